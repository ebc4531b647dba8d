//! Curated surface for callers (CLI, benches).
//!
//! Prefer these re-exports over deep module paths; the layout below this
//! module may change between versions.

// Numbers
pub use crate::bigint::BigInt;
pub use crate::fraction::Fraction;
pub use crate::sign::Sign;
// Linear algebra
pub use crate::linalg::{Matrix, Point, Vector};
// Predicates
pub use crate::predicates::{
    collinear, compare_lex, in_circle, on_segment, orientation, orientation3d,
    segments_intersect, Intersection,
};
// Engine
pub use crate::engine::{
    convex_hull, intersection_graph, intersection_point, is_convex, locate_point,
    polygon_orientation, signed_area, signed_area2, winding_number, Contact, HullCfg,
    IntersectionEdge, IntersectionGraph, Location, Segment,
};
// Sampling
pub use crate::sample::{draw_points, draw_rational_points, LatticeCfg, ReplayToken};
// Errors
pub use crate::error::{KernelError, Result};
