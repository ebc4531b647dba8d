use super::*;
use proptest::prelude::*;

fn q(s: &str) -> Fraction {
    s.parse().unwrap()
}

fn is_canonical(f: &Fraction) -> bool {
    f.denom().is_positive() && f.numer().abs().gcd(f.denom()).is_one()
}

fn arb_fraction() -> impl Strategy<Value = Fraction> {
    (any::<i64>(), any::<i64>().prop_filter("non-zero", |d| *d != 0))
        .prop_map(|(n, d)| Fraction::from_ints(n, d).unwrap())
}

#[test]
fn construction_reduces_and_normalizes_sign() {
    let f = Fraction::from_ints(6, -8).unwrap();
    assert_eq!(f.numer(), &BigInt::from(-3));
    assert_eq!(f.denom(), &BigInt::from(4));
    assert_eq!(Fraction::from_ints(0, -7).unwrap(), Fraction::zero());
    assert_eq!(Fraction::zero().denom(), &BigInt::one());
}

#[test]
fn zero_denominator_is_division_by_zero() {
    assert_eq!(Fraction::from_ints(1, 0), Err(KernelError::DivisionByZero));
    assert_eq!("3/0".parse::<Fraction>(), Err(KernelError::DivisionByZero));
    assert_eq!(
        q("1/2").checked_div(&Fraction::zero()),
        Err(KernelError::DivisionByZero)
    );
    assert_eq!(Fraction::zero().recip(), Err(KernelError::DivisionByZero));
}

#[test]
fn compare_uses_cross_multiplication() {
    assert_eq!(q("1/2").cmp(&q("2/3")), Ordering::Less);
    assert_eq!(q("-1/2").cmp(&q("-2/3")), Ordering::Greater);
    assert_eq!(q("4/6").cmp(&q("2/3")), Ordering::Equal);
    // Differs only far beyond f64 precision.
    let big = BigInt::from(10).pow(40);
    let a = Fraction::new(&big + &BigInt::one(), big.clone()).unwrap();
    let b = Fraction::new(&big + &BigInt::from(2), big.clone()).unwrap();
    assert_eq!(a.to_f64(), b.to_f64());
    assert!(a < b);
}

#[test]
fn parses_rational_integer_and_decimal_literals() {
    assert_eq!(q("3/-6"), Fraction::from_ints(-1, 2).unwrap());
    assert_eq!(q("-42"), Fraction::from(-42));
    assert_eq!(q("0.25"), Fraction::from_ints(1, 4).unwrap());
    assert_eq!(q("-1.50"), Fraction::from_ints(-3, 2).unwrap());
    assert_eq!(q("7/2").to_string(), "7/2");
    assert_eq!(q("8/2").to_string(), "4");
}

#[test]
fn rejects_malformed_literals_naming_input() {
    for bad in ["", "1/", "/2", "1/2/3", "a/b", ".5", "1.", "1.2.3", "1.5/2", "--1"] {
        match bad.parse::<Fraction>() {
            Err(KernelError::ParseError { input, .. }) => assert_eq!(input, bad),
            other => panic!("{bad:?} parsed as {other:?}"),
        }
    }
}

#[test]
fn floor_ceil_and_pow() {
    assert_eq!(q("7/2").floor(), BigInt::from(3));
    assert_eq!(q("-7/2").floor(), BigInt::from(-4));
    assert_eq!(q("-7/2").ceil(), BigInt::from(-3));
    assert_eq!(q("3").ceil(), BigInt::from(3));
    assert_eq!(q("-6/3").floor(), BigInt::from(-2));
    let huge = Fraction::new(-(BigInt::from(10).pow(40) + BigInt::one()), BigInt::from(10).pow(20)).unwrap();
    assert_eq!(huge.floor(), -(BigInt::from(10).pow(20) + BigInt::one()));
    assert_eq!(huge.ceil(), -BigInt::from(10).pow(20));
    assert_eq!(q("-2/3").pow(3).unwrap(), q("-8/27"));
    assert_eq!(q("-2/3").pow(-2).unwrap(), q("9/4"));
    assert_eq!(q("5/7").pow(0).unwrap(), Fraction::one());
}

#[test]
fn to_f64_survives_huge_parts() {
    let n = BigInt::from(10).pow(400);
    let f = Fraction::new(&n * &BigInt::from(3), &n * &BigInt::from(4)).unwrap();
    assert_eq!(f, q("3/4"));
    let g = Fraction::new(BigInt::from(1), BigInt::from(3).pow(700)).unwrap();
    assert!(g.to_f64() >= 0.0 && g.to_f64().is_finite());
    assert!((q("-1/3").to_f64() + 1.0 / 3.0).abs() < 1e-15);
}

proptest! {
    #[test]
    fn every_operation_stays_canonical(a in arb_fraction(), b in arb_fraction()) {
        prop_assert!(is_canonical(&(&a + &b)));
        prop_assert!(is_canonical(&(&a - &b)));
        prop_assert!(is_canonical(&(&a * &b)));
        prop_assert!(is_canonical(&-&a));
        if !b.is_zero() {
            prop_assert!(is_canonical(&a.checked_div(&b).unwrap()));
        }
    }

    #[test]
    fn div_then_mul_round_trips(a in arb_fraction(), b in arb_fraction()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(&a.checked_div(&b).unwrap() * &b, a);
    }

    #[test]
    fn reconstruction_is_idempotent(a in arb_fraction()) {
        let again = Fraction::new(a.numer().clone(), a.denom().clone()).unwrap();
        prop_assert_eq!(again, a);
    }

    #[test]
    fn ordering_matches_i128_cross_products(
        (an, ad) in (any::<i32>(), 1..i32::MAX),
        (bn, bd) in (any::<i32>(), 1..i32::MAX),
    ) {
        let a = Fraction::from_ints(an.into(), ad.into()).unwrap();
        let b = Fraction::from_ints(bn.into(), bd.into()).unwrap();
        let expected = (i128::from(an) * i128::from(bd)).cmp(&(i128::from(bn) * i128::from(ad)));
        prop_assert_eq!(a.cmp(&b), expected);
    }
}
