//! Criterion benches for the exact predicates.
//!
//! Operand sizes: small lattice coordinates vs. coordinates with 30–60 digit
//! numerators, to see how cost scales with bit length.
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ratgeom::api::{
    draw_rational_points, in_circle, orientation, segments_intersect, BigInt, Fraction,
    LatticeCfg, Point, ReplayToken, Sign, Vector,
};

/// Scale every coordinate by `10^digits / (10^digits + 1)` so operands grow
/// without changing the configuration much.
fn inflate(pts: Vec<Point>, digits: u32) -> Vec<Point> {
    let big = BigInt::from(10).pow(digits);
    let s = Fraction::new(big.clone(), &big + &BigInt::one()).unwrap();
    pts.iter().map(|p| p.scale(&s)).collect()
}

fn operands(digits: u32, seed: u64) -> Vec<Point> {
    let cfg = LatticeCfg {
        count: 64,
        half_width: 1000,
        max_den: 97,
    };
    let pts = draw_rational_points(cfg, ReplayToken::new(seed, 0)).unwrap();
    if digits == 0 {
        pts
    } else {
        inflate(pts, digits)
    }
}

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");
    for &digits in &[0u32, 30, 60] {
        group.bench_with_input(BenchmarkId::new("orientation", digits), &digits, |b, &d| {
            b.iter_batched(
                || operands(d, 11),
                |pts| {
                    for w in pts.windows(3) {
                        let _ = orientation(&w[0], &w[1], &w[2]).unwrap();
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("in_circle", digits), &digits, |b, &d| {
            b.iter_batched(
                || operands(d, 12),
                |pts| {
                    for w in pts.windows(4) {
                        let _ = in_circle(&w[0], &w[1], &w[2], &w[3]).unwrap();
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("segments_intersect", digits), &digits, |b, &d| {
            b.iter_batched(
                || operands(d, 13),
                |pts| {
                    for w in pts.windows(4) {
                        let _ = segments_intersect(&w[0], &w[1], &w[2], &w[3]).unwrap();
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();

    // Worst case for the sign: exactly collinear points with huge coordinates.
    let big = Fraction::new(BigInt::from(10).pow(50), BigInt::from(3)).unwrap();
    let half = Fraction::new(BigInt::from(10).pow(50), BigInt::from(6)).unwrap();
    let a = Vector::xy(Fraction::zero(), Fraction::zero());
    let b = Vector::xy(big.clone(), big);
    let m = Vector::xy(half.clone(), half);
    assert_eq!(orientation(&a, &b, &m).unwrap(), Sign::Zero);
    assert_ne!(b, m);
    c.bench_function("orientation_degenerate_big", |bch| {
        bch.iter(|| orientation(&a, &b, &m).unwrap())
    });
}

criterion_group!(benches, bench_predicates);
criterion_main!(benches);
