//! Criterion benches for the engine: hull, point location, intersection graph.
//! Input sizes n in {16, 64, 256}; inputs come from seeded lattice draws.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ratgeom::api::{
    convex_hull, draw_points, draw_rational_points, intersection_graph, locate_point, HullCfg,
    LatticeCfg, ReplayToken, Segment,
};

fn cfg(n: usize) -> LatticeCfg {
    LatticeCfg {
        count: n,
        half_width: 500,
        max_den: 32,
    }
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    for &n in &[16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::new("convex_hull_lattice", n), &n, |b, &n| {
            b.iter_batched(
                || draw_points(cfg(n), ReplayToken::new(21, n as u64)),
                |pts| {
                    let _ = convex_hull(&pts, HullCfg::default()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("convex_hull_rational", n), &n, |b, &n| {
            b.iter_batched(
                || draw_rational_points(cfg(n), ReplayToken::new(22, n as u64)).unwrap(),
                |pts| {
                    let _ = convex_hull(&pts, HullCfg { keep_collinear: true }).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("locate_point", n), &n, |b, &n| {
            let pts = draw_points(cfg(n.max(3)), ReplayToken::new(23, n as u64));
            let hull = convex_hull(&pts, HullCfg::default()).unwrap();
            b.iter_batched(
                || draw_points(cfg(16), ReplayToken::new(24, n as u64)),
                |queries| {
                    for q in &queries {
                        let _ = locate_point(&hull, q).unwrap();
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("intersection_graph", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let pts = draw_points(cfg(2 * n), ReplayToken::new(25, n as u64));
                    pts.chunks_exact(2)
                        .map(|c| Segment::new(c[0].clone(), c[1].clone()))
                        .collect::<Vec<_>>()
                },
                |segs| {
                    let _ = intersection_graph(&segs).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
