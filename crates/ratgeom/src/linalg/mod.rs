//! Exact vectors and small matrices over `Fraction`.
//!
//! - `Vector`: fixed-length component list; `Point` is an alias.
//! - `Matrix`: row-major, determinant by cofactor expansion (no elimination,
//!   no pivot division).
//!
//! All results are new values; shape errors are `DimensionMismatch`.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::{Point, Vector};
