//! Exact-rational geometry kernel.
//!
//! Layers, leaves first: `bigint` → `fraction` → `linalg` → `predicates` → `engine`.
//! Nothing on the predicate path touches floating point; the only `f64`
//! values are the lossy `to_f64` diagnostics.
//!
//! API Policy
//! - `api` is the curated surface for callers (CLI, benches). Module paths
//!   below it may move.

#[macro_use]
mod macros;

pub mod api;
pub mod bigint;
pub mod engine;
pub mod error;
pub mod fraction;
pub mod linalg;
pub mod predicates;
pub mod sample;
pub mod sign;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bigint::BigInt;
pub use error::{KernelError, Result};
pub use fraction::Fraction;
pub use linalg::{Matrix, Point, Vector};
pub use sign::Sign;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::{
        convex_hull, intersection_graph, locate_point, Contact, HullCfg, IntersectionGraph,
        Location, Segment,
    };
    pub use crate::predicates::{
        compare_lex, in_circle, orientation, segments_intersect, Intersection,
    };
    pub use crate::{BigInt, Fraction, KernelError, Matrix, Point, Sign, Vector};
}
