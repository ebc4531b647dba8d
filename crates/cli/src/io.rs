//! Point tables in and out: `"x,y"` literals, CSV via polars, JSON views.
//!
//! Cells are always read as strings (schema inference disabled) so that
//! `1/3` or `0.1` reach `Fraction::from_str` untouched; nothing passes
//! through `f64`.

use anyhow::{anyhow, Context, Result};
use polars::prelude::*;
use ratgeom::api::{Contact, Fraction, IntersectionGraph, Point, Segment, Vector};
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

/// Parse a planar point literal such as `"1/2,-3"` or `"0.25, 4"`.
pub fn parse_point(s: &str) -> Result<Point> {
    let mut parts = s.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(anyhow!("point literal {s:?}: expected \"x,y\""));
    };
    let x: Fraction = x
        .trim()
        .parse()
        .with_context(|| format!("point literal {s:?}: x"))?;
    let y: Fraction = y
        .trim()
        .parse()
        .with_context(|| format!("point literal {s:?}: y"))?;
    Ok(Vector::xy(x, y))
}

fn read_table(path: &Path) -> Result<DataFrame> {
    let lf = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?;
    lf.collect()
        .with_context(|| format!("reading {}", path.display()))
}

/// One column of exact values; empty cells are an error.
fn fractions(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<Fraction>> {
    let col = df
        .column(name)
        .with_context(|| format!("{}: missing column {name:?}", path.display()))?;
    let mut out = Vec::with_capacity(df.height());
    for (row, cell) in col.str()?.into_iter().enumerate() {
        let cell = cell.ok_or_else(|| anyhow!("{}: row {row}: empty {name}", path.display()))?;
        let v = cell
            .trim()
            .parse()
            .with_context(|| format!("{}: row {row}: column {name}", path.display()))?;
        out.push(v);
    }
    Ok(out)
}

/// Points from a CSV with header columns `x,y`.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = read_table(path)?;
    let xs = fractions(&df, "x", path)?;
    let ys = fractions(&df, "y", path)?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Vector::xy(x, y)).collect())
}

/// Segments from a CSV with header columns `x1,y1,x2,y2`.
pub fn read_segments(path: &Path) -> Result<Vec<Segment>> {
    let df = read_table(path)?;
    let cols = ["x1", "y1", "x2", "y2"]
        .iter()
        .map(|name| fractions(&df, name, path))
        .collect::<Result<Vec<_>>>()?;
    let mut out = Vec::with_capacity(df.height());
    for r in 0..df.height() {
        let a = Vector::xy(cols[0][r].clone(), cols[1][r].clone());
        let b = Vector::xy(cols[2][r].clone(), cols[3][r].clone());
        out.push(Segment::new(a, b));
    }
    Ok(out)
}

/// Write points as a two-column string CSV (`x,y`).
pub fn write_points(path: &Path, pts: &[Point]) -> Result<()> {
    ensure_parent(path)?;
    let xs: Vec<String> = pts.iter().map(|p| p.x().to_string()).collect();
    let ys: Vec<String> = pts.iter().map(|p| p.y().to_string()).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Exact coordinates as strings (`"n"` or `"n/d"`).
pub fn point_json(p: &Point) -> Vec<String> {
    p.components().iter().map(|c| c.to_string()).collect()
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContactJson {
    Point { at: Vec<String> },
    Overlap { from: Vec<String>, to: Vec<String> },
}

impl From<&Contact> for ContactJson {
    fn from(c: &Contact) -> Self {
        match c {
            Contact::Point(p) => ContactJson::Point { at: point_json(p) },
            Contact::Overlap(s) => ContactJson::Overlap {
                from: point_json(&s.a),
                to: point_json(&s.b),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EdgeJson {
    pub i: usize,
    pub j: usize,
    pub kind: String,
    pub contact: ContactJson,
}

#[derive(Debug, Serialize)]
pub struct GraphJson {
    pub num_segments: usize,
    pub edges: Vec<EdgeJson>,
    pub components: Vec<Vec<usize>>,
}

impl From<&IntersectionGraph> for GraphJson {
    fn from(g: &IntersectionGraph) -> Self {
        Self {
            num_segments: g.num_segments,
            edges: g
                .edges
                .iter()
                .map(|e| EdgeJson {
                    i: e.i,
                    j: e.j,
                    kind: format!("{:?}", e.kind).to_lowercase(),
                    contact: (&e.contact).into(),
                })
                .collect(),
            components: g.components(),
        }
    }
}
