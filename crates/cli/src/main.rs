use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ratgeom::api::{
    convex_hull, draw_points, draw_rational_points, in_circle, intersection_graph, locate_point,
    orientation, polygon_orientation, signed_area, HullCfg, LatticeCfg, Location, ReplayToken,
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{parse_point, point_json, GraphJson};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "ratgeom-cli")]
#[command(about = "Exact rational geometry on point and segment tables")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a CSV point table (columns x,y)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Keep points lying inside hull edges
        #[arg(long)]
        keep_collinear: bool,
    },
    /// Classify a point against a polygon given as a CSV vertex cycle
    Locate {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Pairwise intersection graph of a CSV segment table (x1,y1,x2,y2)
    Intersections {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Orientation of the triangle a, b, c
    Orient {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
    },
    /// Position of d relative to the circle through a, b, c
    Incircle {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
        #[arg(allow_hyphen_values = true)]
        d: String,
    },
    /// Write a seeded random point table
    Gen {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 100)]
        half_width: i64,
        /// Largest coordinate denominator; 1 draws lattice points
        #[arg(long, default_value_t = 1)]
        max_den: i64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version and provenance JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            keep_collinear,
        } => hull(input, out, keep_collinear),
        Action::Locate { polygon, point } => {
            println!("{}", locate(polygon, &point)?);
            Ok(())
        }
        Action::Intersections { input, out } => intersections(input, out),
        Action::Orient { a, b, c } => {
            let (a, b, c) = (parse_point(&a)?, parse_point(&b)?, parse_point(&c)?);
            println!("{}", orientation(&a, &b, &c)?);
            Ok(())
        }
        Action::Incircle { a, b, c, d } => {
            let pts = [&a, &b, &c, &d]
                .into_iter()
                .map(|s| parse_point(s))
                .collect::<Result<Vec<_>>>()?;
            println!("{}", in_circle(&pts[0], &pts[1], &pts[2], &pts[3])?);
            Ok(())
        }
        Action::Gen {
            count,
            seed,
            index,
            half_width,
            max_den,
            out,
        } => {
            let cfg = LatticeCfg {
                count,
                half_width,
                max_den,
            };
            gen(cfg, ReplayToken::new(seed, index), out)
        }
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct HullJson {
    keep_collinear: bool,
    num_points: usize,
    hull: Vec<Vec<String>>,
    /// Exact area; absent for degenerate (point or segment) hulls.
    area: Option<String>,
}

fn hull(input: PathBuf, out: PathBuf, keep_collinear: bool) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), keep_collinear, "hull");
    let pts = io::read_points(&input)?;
    let verts = convex_hull(&pts, HullCfg { keep_collinear })
        .with_context(|| format!("hull of {}", input.display()))?;
    let area = if verts.len() >= 3 {
        Some(signed_area(&verts)?.to_string())
    } else {
        None
    };
    tracing::info!(points = pts.len(), vertices = verts.len(), "hull_done");
    let doc = HullJson {
        keep_collinear,
        num_points: pts.len(),
        hull: verts.iter().map(point_json).collect(),
        area,
    };
    io::write_json(&out, &doc)?;
    provenance::write_sidecar(
        &out,
        Payload::new(json!({ "command": "hull", "keep_collinear": keep_collinear }))
            .with_input(&input),
    )?;
    Ok(())
}

fn locate(polygon: PathBuf, point: &str) -> Result<&'static str> {
    tracing::info!(polygon = %polygon.display(), point, "locate");
    let poly = io::read_points(&polygon)?;
    let p = parse_point(point)?;
    if polygon_orientation(&poly)?.is_zero() {
        tracing::warn!("polygon has zero signed area");
    }
    Ok(match locate_point(&poly, &p)? {
        Location::Inside => "inside",
        Location::Boundary => "boundary",
        Location::Outside => "outside",
    })
}

fn intersections(input: PathBuf, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "intersections");
    let segs = io::read_segments(&input)?;
    let graph = intersection_graph(&segs)
        .with_context(|| format!("intersections of {}", input.display()))?;
    let doc = GraphJson::from(&graph);
    tracing::info!(
        segments = segs.len(),
        edges = doc.edges.len(),
        components = doc.components.len(),
        "intersections_done"
    );
    io::write_json(&out, &doc)?;
    provenance::write_sidecar(
        &out,
        Payload::new(json!({ "command": "intersections" })).with_input(&input),
    )?;
    Ok(())
}

fn gen(cfg: LatticeCfg, tok: ReplayToken, out: PathBuf) -> Result<()> {
    tracing::info!(count = cfg.count, seed = tok.seed, index = tok.index, "gen");
    let pts = if cfg.max_den <= 1 {
        draw_points(cfg, tok)
    } else {
        draw_rational_points(cfg, tok)?
    };
    io::write_points(&out, &pts)?;
    provenance::write_sidecar(
        &out,
        Payload::new(json!({
            "command": "gen",
            "count": cfg.count,
            "seed": tok.seed,
            "index": tok.index,
            "half_width": cfg.half_width,
            "max_den": cfg.max_den
        })),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new(json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn read_json(path: &std::path::Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn hull_writes_exact_vertices_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.csv");
        fs::write(&input, "x,y\n0,0\n2,0\n2,2\n0,2\n1,1\n1/2,0\n").unwrap();
        let out = dir.path().join("hull.json");
        hull(input.clone(), out.clone(), false).unwrap();
        let v = read_json(&out);
        assert_eq!(v["num_points"], 6);
        assert_eq!(v["hull"].as_array().unwrap().len(), 4);
        assert_eq!(v["hull"][0][0], "0");
        assert_eq!(v["area"], "4");
        assert!(dir.path().join("hull.provenance.json").exists());

        hull(input, out.clone(), true).unwrap();
        assert_eq!(read_json(&out)["hull"][1][0], "1/2");
    }

    #[test]
    fn hull_rejects_short_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.csv");
        fs::write(&input, "x,y\n0,0\n1,1\n").unwrap();
        let err = hull(input, dir.path().join("h.json"), false).unwrap_err();
        assert!(format!("{err:#}").contains("at least 3"), "{err:#}");
    }

    #[test]
    fn locate_reports_each_outcome() {
        let dir = tempdir().unwrap();
        let poly = dir.path().join("poly.csv");
        fs::write(&poly, "x,y\n0,0\n2,0\n2,2\n0,2\n").unwrap();
        assert_eq!(locate(poly.clone(), "1,1").unwrap(), "inside");
        assert_eq!(locate(poly.clone(), "2,1/3").unwrap(), "boundary");
        assert_eq!(locate(poly, "-1/1000000000000,1").unwrap(), "outside");
    }

    #[test]
    fn gen_then_hull() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("gen/pts.csv");
        let cfg = LatticeCfg {
            count: 20,
            half_width: 10,
            max_den: 4,
        };
        gen(cfg, ReplayToken::new(5, 0), pts.clone()).unwrap();
        assert!(dir.path().join("gen/pts.provenance.json").exists());
        assert_eq!(io::read_points(&pts).unwrap().len(), 20);
        let out = dir.path().join("gen/hull.json");
        hull(pts, out.clone(), false).unwrap();
        assert!(read_json(&out)["hull"].as_array().unwrap().len() >= 1);
    }

    #[test]
    fn intersections_writes_graph() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("segs.csv");
        fs::write(&input, "x1,y1,x2,y2\n0,0,3,1\n0,1,1,0\n2,0,4,0\n3,0,5,0\n").unwrap();
        let out = dir.path().join("graph.json");
        intersections(input, out.clone()).unwrap();
        let v = read_json(&out);
        assert_eq!(v["num_segments"], 4);
        assert_eq!(v["edges"][0]["contact"]["at"], json!(["3/4", "1/4"]));
        assert_eq!(v["edges"][1]["kind"], "overlapping");
        assert_eq!(v["edges"][1]["contact"]["from"], json!(["3", "0"]));
    }

    #[test]
    fn cli_parses_negative_point_literals() {
        let cmd = Cmd::try_parse_from(["ratgeom-cli", "orient", "-1,0", "1,0", "0,-1/2"]).unwrap();
        assert!(matches!(cmd.action, Action::Orient { ref a, .. } if a == "-1,0"));
    }
}
