//! Polygon queries: point location, area, convexity.
//!
//! A polygon is a closed vertex cycle `v0, v1, …, v{n-1}` (the closing edge
//! `v{n-1} → v0` is implicit). Every polygon query needs at least 3 vertices.

use crate::error::{KernelError, Result};
use crate::fraction::Fraction;
use crate::linalg::Point;
use crate::predicates::{expect_planar, on_segment, orientation};
use crate::sign::Sign;

/// Where a query point lies relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Inside,
    Boundary,
    Outside,
}

fn expect_polygon(polygon: &[Point]) -> Result<()> {
    if polygon.len() < 3 {
        return Err(KernelError::InsufficientInput {
            required: 3,
            found: polygon.len(),
        });
    }
    expect_planar(polygon)
}

fn edges(polygon: &[Point]) -> impl Iterator<Item = (&Point, &Point)> {
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .take(polygon.len())
}

/// Winding number of `polygon` around `p` (Sunday's crossing rule).
///
/// Upward edges include their lower endpoint, downward edges their upper
/// one, so a vertex on the ray is counted once. The value is meaningful for
/// points off the boundary; use `locate_point` when `p` may lie on it.
pub fn winding_number(polygon: &[Point], p: &Point) -> Result<i64> {
    expect_polygon(polygon)?;
    p.expect_dim(2)?;
    let mut wn = 0i64;
    for (a, b) in edges(polygon) {
        if a.y() <= p.y() {
            if b.y() > p.y() && orientation(a, b, p)? == Sign::Positive {
                wn += 1;
            }
        } else if b.y() <= p.y() && orientation(a, b, p)? == Sign::Negative {
            wn -= 1;
        }
    }
    Ok(wn)
}

/// Classify `p` against a (possibly non-convex, possibly self-intersecting)
/// polygon. Boundary is checked first and exactly; otherwise non-zero
/// winding means inside.
pub fn locate_point(polygon: &[Point], p: &Point) -> Result<Location> {
    expect_polygon(polygon)?;
    p.expect_dim(2)?;
    for (a, b) in edges(polygon) {
        if on_segment(p, a, b)? {
            return Ok(Location::Boundary);
        }
    }
    Ok(if winding_number(polygon, p)? != 0 {
        Location::Inside
    } else {
        Location::Outside
    })
}

/// Twice the signed area (shoelace sum); positive for counter-clockwise.
pub fn signed_area2(polygon: &[Point]) -> Result<Fraction> {
    expect_polygon(polygon)?;
    let mut acc = Fraction::zero();
    for (a, b) in edges(polygon) {
        acc = acc + a.cross2(b)?;
    }
    Ok(acc)
}

pub fn signed_area(polygon: &[Point]) -> Result<Fraction> {
    signed_area2(polygon)?.checked_div(&Fraction::from(2))
}

/// Winding direction of a simple polygon (Zero when the area vanishes).
pub fn polygon_orientation(polygon: &[Point]) -> Result<Sign> {
    Ok(signed_area2(polygon)?.signum())
}

/// Convexity test on the vertex cycle, exact.
///
/// Repeated consecutive vertices (including a closing repeat of `v0`) are
/// merged first. The cycle is then convex iff
/// - no two turns have opposite signs and at least one turn is non-zero,
/// - no zero turn reverses direction (`(b - a) · (c - b) < 0`),
/// - the edge directions change x- and y-sign at most twice each, which
///   rejects star polygons whose turns all agree.
///
/// Collinear vertices that continue straight on are allowed. Fewer than 3
/// distinct consecutive vertices is not convex.
pub fn is_convex(polygon: &[Point]) -> Result<bool> {
    expect_polygon(polygon)?;
    let mut verts: Vec<&Point> = Vec::with_capacity(polygon.len());
    for p in polygon {
        if verts.last() != Some(&p) {
            verts.push(p);
        }
    }
    while verts.len() > 1 && verts.first() == verts.last() {
        verts.pop();
    }
    let n = verts.len();
    if n < 3 {
        return Ok(false);
    }

    let mut dirs = Vec::with_capacity(n);
    for i in 0..n {
        dirs.push(verts[(i + 1) % n].sub(verts[i])?);
    }
    let mut turn = Sign::Zero;
    for i in 0..n {
        let (d0, d1) = (&dirs[i], &dirs[(i + 1) % n]);
        let s = d0.cross2(d1)?.signum();
        if s.is_zero() {
            if d0.dot(d1)?.signum().is_negative() {
                return Ok(false);
            }
            continue;
        }
        if turn.is_zero() {
            turn = s;
        } else if s != turn {
            return Ok(false);
        }
    }
    if turn.is_zero() {
        return Ok(false);
    }
    let flips = |axis: usize| {
        let signs: Vec<Sign> = dirs
            .iter()
            .map(|d| d[axis].signum())
            .filter(|s| !s.is_zero())
            .collect();
        signs
            .iter()
            .zip(signs.iter().cycle().skip(1))
            .filter(|(a, b)| a != b)
            .count()
    };
    Ok(flips(0) <= 2 && flips(1) <= 2)
}
