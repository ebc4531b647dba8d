//! Geometry engine: algorithms composed from exact predicates.
//!
//! Every branch is decided by a predicate sign or an exact `Fraction`
//! comparison; no coordinate is ever approximated. Arithmetic errors
//! propagate unchanged.
//!
//! Degeneracy conventions
//! - Ties between points are broken by `predicates::compare_lex`.
//! - `convex_hull`: duplicates merged; collinear boundary points dropped
//!   unless `HullCfg::keep_collinear`.
//! - `locate_point`: boundary is its own outcome, never folded into inside/outside.
//! - `intersection_graph`: touching and overlapping segments are connected.
//! - `is_convex`: repeated vertices merged; straight-on collinear vertices
//!   allowed, a vertex where the boundary doubles back is not.

mod hull;
mod intersect;
mod polygon;

pub use hull::{convex_hull, HullCfg};
pub use intersect::{
    intersection_graph, intersection_point, Contact, IntersectionEdge, IntersectionGraph, Segment,
};
pub use polygon::{
    is_convex, locate_point, polygon_orientation, signed_area, signed_area2, winding_number,
    Location,
};
