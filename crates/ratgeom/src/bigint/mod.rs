//! Arbitrary-precision signed integers.
//!
//! Representation
//! - `sign` plus little-endian base-2^32 limbs (most significant last).
//! - Canonical: no high zero limbs; zero is `(Sign::Zero, [])`. Because the
//!   representation is unique per value, derived `Eq`/`Hash` are value equality.
//!
//! Division convention
//! - `div_rem` truncates toward zero and the remainder takes the sign of the
//!   dividend (same as Rust's `/` and `%` on primitives). `Fraction`
//!   normalization only divides by positive gcds, so it never depends on the
//!   remainder sign.

mod mag;
mod parse;

use std::cmp::Ordering;

use crate::error::{KernelError, Result};
use crate::sign::Sign;

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    mag: Vec<u32>,
}

impl BigInt {
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            mag: vec![1],
        }
    }

    /// Build from a sign flag and little-endian limbs; normalizes high zero limbs.
    pub fn from_limbs(negative: bool, limbs: Vec<u32>) -> Self {
        let sign = if negative {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::from_mag(sign, limbs)
    }

    fn from_mag(sign: Sign, mut mag: Vec<u32>) -> Self {
        mag::trim(&mut mag);
        if mag.is_empty() || sign == Sign::Zero {
            return Self::zero();
        }
        Self { sign, mag }
    }

    /// Little-endian magnitude limbs (empty for zero).
    #[inline]
    pub fn limbs(&self) -> &[u32] {
        &self.mag
    }

    #[inline]
    pub fn signum(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.mag == [1]
    }

    /// Number of significant bits of `|self|`; 0 for zero.
    #[inline]
    pub fn bit_length(&self) -> u64 {
        mag::bit_length(&self.mag)
    }

    pub fn abs(&self) -> Self {
        Self {
            sign: if self.is_zero() {
                Sign::Zero
            } else {
                Sign::Positive
            },
            mag: self.mag.clone(),
        }
    }

    pub fn negate(&self) -> Self {
        Self {
            sign: -self.sign,
            mag: self.mag.clone(),
        }
    }

    fn add_signed(&self, sign: Sign, other: &[u32]) -> Self {
        match (self.sign, sign) {
            (Sign::Zero, _) => Self::from_mag(sign, other.to_vec()),
            (_, Sign::Zero) => self.clone(),
            (a, b) if a == b => Self::from_mag(a, mag::add(&self.mag, other)),
            (a, b) => match mag::cmp(&self.mag, other) {
                Ordering::Equal => Self::zero(),
                Ordering::Greater => Self::from_mag(a, mag::sub(&self.mag, other)),
                Ordering::Less => Self::from_mag(b, mag::sub(other, &self.mag)),
            },
        }
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        self.add_signed(rhs.sign, &rhs.mag)
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        self.add_signed(-rhs.sign, &rhs.mag)
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        Self::from_mag(self.sign * rhs.sign, mag::mul(&self.mag, &rhs.mag))
    }

    /// Truncating division: `self = q * rhs + r`, `|r| < |rhs|`, `r` has the sign of `self`.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(KernelError::DivisionByZero);
        }
        let (q, r) = mag::divrem(&self.mag, &rhs.mag);
        Ok((
            Self::from_mag(self.sign * rhs.sign, q),
            Self::from_mag(self.sign, r),
        ))
    }

    /// Truncating division by a strictly positive divisor (a canonical
    /// denominator or a gcd of non-zero values).
    pub(crate) fn div_rem_positive(&self, rhs: &Self) -> (Self, Self) {
        debug_assert!(rhs.is_positive(), "div_rem_positive by {rhs:?}");
        let (q, r) = mag::divrem(&self.mag, &rhs.mag);
        (
            Self::from_mag(self.sign * rhs.sign, q),
            Self::from_mag(self.sign, r),
        )
    }

    /// Exact quotient when the positive `rhs` is known to divide `self`.
    pub(crate) fn div_exact(&self, rhs: &Self) -> Self {
        let (q, r) = self.div_rem_positive(rhs);
        debug_assert!(r.is_zero(), "div_exact with non-zero remainder");
        q
    }

    /// Greatest common divisor; always non-negative and `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.mag.clone();
        let mut b = other.mag.clone();
        while !b.is_empty() {
            let (_, r) = mag::divrem(&a, &b);
            a = std::mem::replace(&mut b, r);
        }
        Self::from_mag(Sign::Positive, a)
    }

    pub fn pow(&self, mut exp: u32) -> Self {
        let mut base = self.clone();
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// `self * 2^bits`.
    pub fn shl_bits(&self, bits: usize) -> Self {
        Self::from_mag(self.sign, mag::shl(&self.mag, bits))
    }

    pub fn to_i64(&self) -> Option<i64> {
        let v = self.to_i128()?;
        i64::try_from(v).ok()
    }

    pub fn to_i128(&self) -> Option<i128> {
        if self.mag.len() > 4 {
            return None;
        }
        let m = self
            .mag
            .iter()
            .rev()
            .fold(0u128, |acc, &limb| (acc << 32) | u128::from(limb));
        match self.sign {
            Sign::Zero => Some(0),
            Sign::Positive => i128::try_from(m).ok(),
            Sign::Negative if m <= i128::MIN.unsigned_abs() => Some((m as i128).wrapping_neg()),
            Sign::Negative => None,
        }
    }

    /// Lossy conversion for diagnostics; overflows to ±infinity.
    pub fn to_f64(&self) -> f64 {
        let m = self
            .mag
            .iter()
            .rev()
            .fold(0.0f64, |acc, &limb| acc * 4_294_967_296.0 + f64::from(limb));
        if self.is_negative() {
            -m
        } else {
            m
        }
    }
}

forward_binop!(BigInt, Add, add, add_ref);
forward_binop!(BigInt, Sub, sub, sub_ref);
forward_binop!(BigInt, Mul, mul, mul_ref);

impl std::ops::Neg for BigInt {
    type Output = BigInt;
    #[inline]
    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

impl std::ops::Neg for &BigInt {
    type Output = BigInt;
    #[inline]
    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            o => return o,
        }
        match self.sign {
            Sign::Zero => Ordering::Equal,
            Sign::Positive => mag::cmp(&self.mag, &other.mag),
            Sign::Negative => mag::cmp(&other.mag, &self.mag),
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(v: $t) -> Self {
                let mut v = v as u128;
                let mut mag = Vec::new();
                while v != 0 {
                    mag.push(v as u32);
                    v >>= 32;
                }
                Self::from_mag(Sign::Positive, mag)
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(v: $t) -> Self {
                let b = BigInt::from(v.unsigned_abs());
                if v < 0 { -b } else { b }
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, u128, usize);
from_signed!(i8, i16, i32, i64, i128, isize);
