//! Sign-exact geometric predicates.
//!
//! Every predicate evaluates a determinant over `Fraction` and returns its
//! exact sign. There is no epsilon: `Sign::Zero` means the configuration is
//! exactly degenerate (collinear, coplanar, concyclic), and callers must
//! branch on it explicitly.
//!
//! Conventions
//! - `orientation`: Positive = counter-clockwise, Negative = clockwise.
//! - `in_circle`: Positive = `d` strictly inside the circle through CCW `a, b, c`.
//! - Tie-break order: `compare_lex` (x first, then y). The engine uses it as
//!   its only ordering on points.
//!
//! Errors: only `DimensionMismatch` for points of the wrong dimension.

use crate::error::{KernelError, Result};
use crate::fraction::Fraction;
use crate::linalg::{Matrix, Point, Vector};
use crate::sign::Sign;

/// Sign of `| b-a ; c-a |`.
pub fn orientation(a: &Point, b: &Point, c: &Point) -> Result<Sign> {
    a.expect_dim(2)?;
    let ab = b.sub(a)?;
    let ac = c.sub(a)?;
    Ok(ab.cross2(&ac)?.signum())
}

/// Sign of `| b-a ; c-a ; d-a |`. Positive when `d` lies on the side of the
/// plane `abc` toward which `(b-a) × (c-a)` points.
pub fn orientation3d(a: &Point, b: &Point, c: &Point, d: &Point) -> Result<Sign> {
    a.expect_dim(3)?;
    let m = Matrix::from_rows(vec![b.sub(a)?, c.sub(a)?, d.sub(a)?])?;
    Ok(m.determinant()?.signum())
}

#[inline]
pub fn collinear(a: &Point, b: &Point, c: &Point) -> Result<bool> {
    Ok(orientation(a, b, c)?.is_zero())
}

/// Sign of the lifted determinant with rows `(x, y, x²+y², 1)` for `a, b, c, d`.
pub fn in_circle(a: &Point, b: &Point, c: &Point, d: &Point) -> Result<Sign> {
    let lift = |p: &Point| -> Result<Vector> {
        p.expect_dim(2)?;
        Ok(Vector::new(vec![
            p.x().clone(),
            p.y().clone(),
            p.norm_squared(),
            Fraction::one(),
        ]))
    };
    let m = Matrix::from_rows(vec![lift(a)?, lift(b)?, lift(c)?, lift(d)?])?;
    Ok(m.determinant()?.signum())
}

/// Lexicographic order on coordinates (x, then y, ...).
#[inline]
pub fn compare_lex(a: &Point, b: &Point) -> Sign {
    Sign::from_ordering(a.components().cmp(b.components()))
}

/// Lexicographically (min, max) of two points.
pub(crate) fn minmax_lex<'a>(a: &'a Point, b: &'a Point) -> (&'a Point, &'a Point) {
    if compare_lex(a, b).is_positive() {
        (b, a)
    } else {
        (a, b)
    }
}

/// `p` lies on the closed segment `ab` (endpoints included).
///
/// Collinear points are totally ordered along their line by `compare_lex`, so
/// the range check needs no projection.
pub fn on_segment(p: &Point, a: &Point, b: &Point) -> Result<bool> {
    if !orientation(a, b, p)?.is_zero() {
        return Ok(false);
    }
    let (lo, hi) = minmax_lex(a, b);
    Ok(!compare_lex(lo, p).is_positive() && !compare_lex(p, hi).is_positive())
}

/// How two closed segments meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intersection {
    /// No common point.
    Disjoint,
    /// Single crossing point interior to both segments.
    Proper,
    /// Single common point that is an endpoint of at least one segment.
    Touching,
    /// Collinear with a common sub-segment of positive length.
    Overlapping,
}

impl Intersection {
    #[inline]
    pub fn exists(self) -> bool {
        self != Intersection::Disjoint
    }
}

/// Classify segments `p1p2` and `p3p4` from orientation signs alone; the
/// collinear branch compares coordinates exactly.
pub fn segments_intersect(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> Result<Intersection> {
    let d1 = orientation(p3, p4, p1)?;
    let d2 = orientation(p3, p4, p2)?;
    let d3 = orientation(p1, p2, p3)?;
    let d4 = orientation(p1, p2, p4)?;

    if [d1, d2, d3, d4].iter().all(|s| s.is_zero()) {
        return Ok(collinear_overlap(p1, p2, p3, p4));
    }
    if (d1 * d2).is_negative() && (d3 * d4).is_negative() {
        return Ok(Intersection::Proper);
    }
    let touches = (d1.is_zero() && on_segment(p1, p3, p4)?)
        || (d2.is_zero() && on_segment(p2, p3, p4)?)
        || (d3.is_zero() && on_segment(p3, p1, p2)?)
        || (d4.is_zero() && on_segment(p4, p1, p2)?);
    Ok(if touches {
        Intersection::Touching
    } else {
        Intersection::Disjoint
    })
}

fn collinear_overlap(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> Intersection {
    let (lo, hi) = collinear_overlap_range(p1, p2, p3, p4);
    match compare_lex(lo, hi) {
        Sign::Positive => Intersection::Disjoint,
        Sign::Zero => Intersection::Touching,
        Sign::Negative => Intersection::Overlapping,
    }
}

/// Candidate common range of two collinear segments: `(max of lows, min of highs)`.
/// Empty when `lo > hi`.
pub(crate) fn collinear_overlap_range<'a>(
    p1: &'a Point,
    p2: &'a Point,
    p3: &'a Point,
    p4: &'a Point,
) -> (&'a Point, &'a Point) {
    let (lo1, hi1) = minmax_lex(p1, p2);
    let (lo2, hi2) = minmax_lex(p3, p4);
    let lo = if compare_lex(lo1, lo2).is_negative() {
        lo2
    } else {
        lo1
    };
    let hi = if compare_lex(hi1, hi2).is_positive() {
        hi2
    } else {
        hi1
    };
    (lo, hi)
}

/// Shorthand used by callers that need the dimension check without a predicate.
#[inline]
pub(crate) fn expect_planar(points: &[Point]) -> Result<()> {
    match points.iter().find(|p| p.dim() != 2) {
        Some(p) => Err(KernelError::dims(2, p.dim())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests;
