//! Segment intersection graph.
//!
//! Nodes are input segments (by index); an edge joins every pair that
//! shares at least one point. Each edge carries the exact contact geometry.
//! All-pairs O(n²): inputs here are small and exactness, not throughput, is
//! the point.

use crate::error::Result;
use crate::linalg::Point;
use crate::predicates::{collinear_overlap_range, on_segment, segments_intersect, Intersection};

/// Closed segment between two planar points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    #[inline]
    pub fn classify(&self, other: &Segment) -> Result<Intersection> {
        segments_intersect(&self.a, &self.b, &other.a, &other.b)
    }
}

/// Exact common geometry of two segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Contact {
    Point(Point),
    /// Shared sub-segment, endpoints in lexicographic order.
    Overlap(Segment),
}

/// Common point or sub-segment of `s` and `t`, `None` when disjoint.
///
/// A proper crossing is solved exactly: `p = s.a + u (s.b - s.a)` with
/// `u = (t.a - s.a) × (t.b - t.a) / (s.b - s.a) × (t.b - t.a)`.
pub fn intersection_point(s: &Segment, t: &Segment) -> Result<Option<Contact>> {
    contact_of(s, t, s.classify(t)?)
}

/// Contact geometry for a pair already classified as `kind`.
fn contact_of(s: &Segment, t: &Segment, kind: Intersection) -> Result<Option<Contact>> {
    let contact = match kind {
        Intersection::Disjoint => return Ok(None),
        Intersection::Overlapping => {
            let (lo, hi) = collinear_overlap_range(&s.a, &s.b, &t.a, &t.b);
            Contact::Overlap(Segment::new(lo.clone(), hi.clone()))
        }
        Intersection::Touching => Contact::Point(touch_point(s, t)?),
        Intersection::Proper => {
            let r = s.b.sub(&s.a)?;
            let d = t.b.sub(&t.a)?;
            let u = t.a.sub(&s.a)?.cross2(&d)?.checked_div(&r.cross2(&d)?)?;
            Contact::Point(s.a.add(&r.scale(&u))?)
        }
    };
    Ok(Some(contact))
}

/// For touching segments the contact is an endpoint of one of them.
fn touch_point(s: &Segment, t: &Segment) -> Result<Point> {
    for (p, other) in [(&s.a, t), (&s.b, t), (&t.a, s), (&t.b, s)] {
        if on_segment(p, &other.a, &other.b)? {
            return Ok(p.clone());
        }
    }
    // Unreachable for a Touching classification; keep the collinear answer.
    Ok(collinear_overlap_range(&s.a, &s.b, &t.a, &t.b).0.clone())
}

/// One edge of the intersection graph (`i < j`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionEdge {
    pub i: usize,
    pub j: usize,
    pub kind: Intersection,
    pub contact: Contact,
}

/// Segments as nodes, pairwise contacts as edges.
#[derive(Clone, Debug, Default)]
pub struct IntersectionGraph {
    pub num_segments: usize,
    pub edges: Vec<IntersectionEdge>,
    /// Edge indices incident to each segment, ascending.
    pub adj: Vec<Vec<usize>>,
}

impl IntersectionGraph {
    /// Segment indices adjacent to `i`, ascending.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[i].iter().map(move |&e| {
            let edge = &self.edges[e];
            if edge.i == i {
                edge.j
            } else {
                edge.i
            }
        })
    }

    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.adj[i].len()
    }

    /// Connected components as sorted index lists, ordered by smallest member.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.num_segments];
        let mut out = Vec::new();
        for start in 0..self.num_segments {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let mut stack = vec![start];
            let mut comp = Vec::new();
            while let Some(k) = stack.pop() {
                comp.push(k);
                for n in self.neighbors(k) {
                    if !seen[n] {
                        seen[n] = true;
                        stack.push(n);
                    }
                }
            }
            comp.sort_unstable();
            out.push(comp);
        }
        out
    }
}

pub fn intersection_graph(segments: &[Segment]) -> Result<IntersectionGraph> {
    let n = segments.len();
    let mut graph = IntersectionGraph {
        num_segments: n,
        edges: Vec::new(),
        adj: vec![Vec::new(); n],
    };
    for i in 0..n {
        segments[i].a.expect_dim(2)?;
        segments[i].b.expect_dim(2)?;
        for j in (i + 1)..n {
            let kind = segments[i].classify(&segments[j])?;
            let Some(contact) = contact_of(&segments[i], &segments[j], kind)? else {
                continue;
            };
            let e = graph.edges.len();
            graph.edges.push(IntersectionEdge { i, j, kind, contact });
            graph.adj[i].push(e);
            graph.adj[j].push(e);
        }
    }
    tracing::debug!(segments = n, edges = graph.edges.len(), "intersection_graph");
    Ok(graph)
}
