//! Andrew's monotone chain over exact points.

use crate::error::{KernelError, Result};
use crate::linalg::Point;
use crate::predicates::{compare_lex, expect_planar, orientation};
use crate::sign::Sign;

/// Hull conventions.
///
/// - `keep_collinear = false` (default): vertices strictly convex; points in
///   the relative interior of a hull edge are dropped.
/// - `keep_collinear = true`: every input point on the hull boundary is kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    pub keep_collinear: bool,
}

/// Convex hull in counter-clockwise order, starting at the lexicographically
/// smallest point.
///
/// Degenerate inputs
/// - Fewer than 3 points: `InsufficientInput`.
/// - Exact duplicates are merged before the scan.
/// - All points coincide: one vertex.
/// - All points collinear: the two extremes (every distinct point in
///   lexicographic order when `keep_collinear`).
pub fn convex_hull(points: &[Point], cfg: HullCfg) -> Result<Vec<Point>> {
    if points.len() < 3 {
        return Err(KernelError::InsufficientInput {
            required: 3,
            found: points.len(),
        });
    }
    expect_planar(points)?;
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| compare_lex(a, b).to_ordering());
    pts.dedup();
    if pts.len() == 1 {
        return Ok(pts);
    }

    let (first, last) = (&pts[0], &pts[pts.len() - 1]);
    let mut all_collinear = true;
    for p in &pts[1..pts.len() - 1] {
        if !orientation(first, last, p)?.is_zero() {
            all_collinear = false;
            break;
        }
    }
    if all_collinear {
        tracing::debug!(input = points.len(), distinct = pts.len(), "convex_hull: collinear input");
        return Ok(if cfg.keep_collinear {
            pts
        } else {
            vec![first.clone(), last.clone()]
        });
    }

    // A turn that is not counter-clockwise ends the current chain vertex.
    let pops = |s: Sign| {
        if cfg.keep_collinear {
            s.is_negative()
        } else {
            !s.is_positive()
        }
    };
    let lower = half_chain(pts.iter(), pops)?;
    let upper = half_chain(pts.iter().rev(), pops)?;

    let mut hull = lower;
    hull.pop();
    hull.extend(upper);
    hull.pop();
    tracing::debug!(input = points.len(), hull = hull.len(), "convex_hull");
    Ok(hull)
}

fn half_chain<'a>(
    pts: impl Iterator<Item = &'a Point>,
    pops: impl Fn(Sign) -> bool,
) -> Result<Vec<Point>> {
    let mut chain: Vec<Point> = Vec::new();
    for p in pts {
        while chain.len() >= 2 && pops(orientation(&chain[chain.len() - 2], &chain[chain.len() - 1], p)?) {
            chain.pop();
        }
        chain.push(p.clone());
    }
    Ok(chain)
}
