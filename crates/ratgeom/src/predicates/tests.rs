use super::*;
use proptest::prelude::*;

fn p(x: &str, y: &str) -> Point {
    Vector::xy(x.parse().unwrap(), y.parse().unwrap())
}

fn pi(x: i64, y: i64) -> Point {
    Vector::from_ints(&[x, y])
}

#[test]
fn orientation_reference_cases() {
    let (o, e) = (pi(0, 0), pi(1, 0));
    assert_eq!(orientation(&o, &e, &pi(1, 1)).unwrap(), Sign::Positive);
    assert_eq!(orientation(&o, &e, &pi(-1, 0)).unwrap(), Sign::Zero);
    assert_eq!(orientation(&o, &e, &pi(1, -1)).unwrap(), Sign::Negative);
}

#[test]
fn orientation_is_exact_near_degeneracy() {
    // c reduces to (1, 1/3), exactly on y = x / 3; the other two miss the
    // line by 1/(3 * 10^30), far below f64 resolution.
    let a = pi(0, 0);
    let b = pi(3, 1);
    let c = p("1", "333333333333333333333333333333333/999999999999999999999999999999999");
    assert_eq!(orientation(&a, &b, &c).unwrap(), Sign::Zero);
    let above = p("1", "1000000000000000000000000000001/3000000000000000000000000000000");
    assert_eq!(orientation(&a, &b, &above).unwrap(), Sign::Positive);
    let below = p("1", "999999999999999999999999999999/3000000000000000000000000000000");
    assert_eq!(orientation(&a, &b, &below).unwrap(), Sign::Negative);
}

#[test]
fn orientation_rejects_non_planar_points() {
    let a = Vector::from_ints(&[0, 0, 0]);
    assert!(matches!(
        orientation(&a, &a, &a),
        Err(KernelError::DimensionMismatch { expected: 2, found: 3 })
    ));
    assert!(orientation(&pi(0, 0), &Vector::from_ints(&[1, 0, 0]), &pi(0, 1)).is_err());
}

#[test]
fn in_circle_reference_cases() {
    let (a, b, c) = (pi(0, 0), pi(1, 0), pi(0, 1));
    assert_eq!(in_circle(&a, &b, &c, &p("0.25", "0.25")).unwrap(), Sign::Positive);
    // (1,1) is on the circumcircle of the right triangle.
    assert_eq!(in_circle(&a, &b, &c, &pi(1, 1)).unwrap(), Sign::Zero);
    assert_eq!(in_circle(&a, &b, &c, &pi(2, 2)).unwrap(), Sign::Negative);
    // Clockwise input flips the sign.
    assert_eq!(in_circle(&a, &c, &b, &p("0.25", "0.25")).unwrap(), Sign::Negative);
}

#[test]
fn orientation3d_signs() {
    let o = Vector::from_ints(&[0, 0, 0]);
    let x = Vector::from_ints(&[1, 0, 0]);
    let y = Vector::from_ints(&[0, 1, 0]);
    assert_eq!(orientation3d(&o, &x, &y, &Vector::from_ints(&[0, 0, 1])).unwrap(), Sign::Positive);
    assert_eq!(orientation3d(&o, &x, &y, &Vector::from_ints(&[5, 7, 0])).unwrap(), Sign::Zero);
    assert_eq!(orientation3d(&o, &x, &y, &Vector::from_ints(&[0, 0, -2])).unwrap(), Sign::Negative);
}

#[test]
fn segment_classification() {
    let s = |a: (i64, i64), b: (i64, i64), c: (i64, i64), d: (i64, i64)| {
        segments_intersect(&pi(a.0, a.1), &pi(b.0, b.1), &pi(c.0, c.1), &pi(d.0, d.1)).unwrap()
    };
    assert_eq!(s((0, 0), (2, 2), (0, 2), (2, 0)), Intersection::Proper);
    assert_eq!(s((0, 0), (2, 0), (1, 0), (1, 5)), Intersection::Touching);
    assert_eq!(s((0, 0), (2, 0), (2, 0), (3, 1)), Intersection::Touching);
    assert_eq!(s((0, 0), (2, 0), (3, 0), (4, 0)), Intersection::Disjoint);
    assert_eq!(s((0, 0), (2, 0), (2, 0), (4, 0)), Intersection::Touching);
    assert_eq!(s((0, 0), (3, 0), (1, 0), (5, 0)), Intersection::Overlapping);
    assert_eq!(s((0, 0), (1, 1), (0, 1), (1, 2)), Intersection::Disjoint);
    assert_eq!(s((0, 0), (2, 0), (1, 1), (1, 3)), Intersection::Disjoint);
    // Degenerate point segments.
    assert_eq!(s((1, 1), (1, 1), (0, 0), (2, 2)), Intersection::Touching);
    assert_eq!(s((1, 1), (1, 1), (2, 2), (2, 2)), Intersection::Disjoint);
    assert!(!Intersection::Disjoint.exists());
    assert!(Intersection::Overlapping.exists());
}

#[test]
fn on_segment_and_lex_order() {
    assert!(on_segment(&pi(1, 1), &pi(0, 0), &pi(2, 2)).unwrap());
    assert!(on_segment(&pi(2, 2), &pi(2, 2), &pi(0, 0)).unwrap());
    assert!(!on_segment(&pi(3, 3), &pi(0, 0), &pi(2, 2)).unwrap());
    assert!(!on_segment(&pi(1, 0), &pi(0, 0), &pi(2, 2)).unwrap());
    assert_eq!(compare_lex(&pi(0, 5), &pi(1, -5)), Sign::Negative);
    assert_eq!(compare_lex(&pi(1, 5), &pi(1, -5)), Sign::Positive);
    assert_eq!(compare_lex(&p("1/2", "0"), &p("2/4", "0")), Sign::Zero);
}

fn arb_point() -> impl Strategy<Value = Point> {
    (-50i64..50, -50i64..50, 1i64..8, 1i64..8).prop_map(|(x, y, dx, dy)| {
        Vector::xy(
            Fraction::from_ints(x, dx).unwrap(),
            Fraction::from_ints(y, dy).unwrap(),
        )
    })
}

proptest! {
    #[test]
    fn orientation_is_antisymmetric_and_cyclic(a in arb_point(), b in arb_point(), c in arb_point()) {
        let abc = orientation(&a, &b, &c).unwrap();
        prop_assert_eq!(orientation(&b, &c, &a).unwrap(), abc);
        prop_assert_eq!(orientation(&b, &a, &c).unwrap(), -abc);
    }

    #[test]
    fn in_circle_is_invariant_under_cyclic_shift(
        a in arb_point(), b in arb_point(), c in arb_point(), d in arb_point()
    ) {
        let s = in_circle(&a, &b, &c, &d).unwrap();
        prop_assert_eq!(in_circle(&b, &c, &a, &d).unwrap(), s);
        prop_assert_eq!(in_circle(&b, &a, &c, &d).unwrap(), -s);
    }

    #[test]
    fn segment_relation_is_symmetric(
        a in arb_point(), b in arb_point(), c in arb_point(), d in arb_point()
    ) {
        let r = segments_intersect(&a, &b, &c, &d).unwrap();
        prop_assert_eq!(segments_intersect(&c, &d, &a, &b).unwrap(), r);
        prop_assert_eq!(segments_intersect(&b, &a, &d, &c).unwrap(), r);
    }
}
