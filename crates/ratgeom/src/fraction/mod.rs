//! Exact rationals in canonical form.
//!
//! Invariants (hold after every constructor and operation):
//! - `den > 0`
//! - `gcd(|num|, den) = 1`
//! - zero is `0/1`
//!
//! Comparison is by cross-multiplication only. `to_f64` is a one-way
//! diagnostic and is never called on the predicate path.

mod parse;

use std::cmp::Ordering;

use crate::bigint::BigInt;
use crate::error::{KernelError, Result};
use crate::sign::Sign;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// Reduce `num/den` to canonical form; fails on a zero denominator.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            return Err(KernelError::DivisionByZero);
        }
        if num.is_zero() {
            return Ok(Self::zero());
        }
        let (num, den) = if den.is_negative() {
            (-num, -den)
        } else {
            (num, den)
        };
        let g = num.gcd(&den);
        if g.is_one() {
            return Ok(Self { num, den });
        }
        Ok(Self {
            num: num.div_exact(&g),
            den: den.div_exact(&g),
        })
    }

    pub fn from_ints(num: i64, den: i64) -> Result<Self> {
        Self::new(BigInt::from(num), BigInt::from(den))
    }

    /// Caller guarantees `num/den` is already canonical.
    fn from_canonical(num: BigInt, den: BigInt) -> Self {
        debug_assert!(den.is_positive() && num.gcd(&den).is_one());
        Self { num, den }
    }

    /// Reduce a product/sum whose denominator is known to be positive.
    fn reduce(num: BigInt, den: BigInt) -> Self {
        debug_assert!(den.is_positive());
        if num.is_zero() {
            return Self::zero();
        }
        let g = num.gcd(&den);
        if g.is_one() {
            return Self { num, den };
        }
        Self {
            num: num.div_exact(&g),
            den: den.div_exact(&g),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            num: BigInt::zero(),
            den: BigInt::one(),
        }
    }

    #[inline]
    pub fn one() -> Self {
        Self {
            num: BigInt::one(),
            den: BigInt::one(),
        }
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    #[inline]
    pub fn signum(&self) -> Sign {
        self.num.signum()
    }

    pub fn abs(&self) -> Self {
        Self::from_canonical(self.num.abs(), self.den.clone())
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        if self.den == rhs.den {
            return Self::reduce(&self.num + &rhs.num, self.den.clone());
        }
        Self::reduce(
            &(&self.num * &rhs.den) + &(&rhs.num * &self.den),
            &self.den * &rhs.den,
        )
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        if self.den == rhs.den {
            return Self::reduce(&self.num - &rhs.num, self.den.clone());
        }
        Self::reduce(
            &(&self.num * &rhs.den) - &(&rhs.num * &self.den),
            &self.den * &rhs.den,
        )
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        if self.is_integer() && rhs.is_integer() {
            return Self::from_canonical(&self.num * &rhs.num, BigInt::one());
        }
        Self::reduce(&self.num * &rhs.num, &self.den * &rhs.den)
    }

    /// `self / rhs`; fails with `DivisionByZero` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(KernelError::DivisionByZero);
        }
        Self::new(&self.num * &rhs.den, &self.den * &rhs.num)
    }

    pub fn recip(&self) -> Result<Self> {
        Self::one().checked_div(self)
    }

    #[inline]
    pub fn square(&self) -> Self {
        self * self
    }

    /// Integer power; a negative exponent inverts first.
    pub fn pow(&self, exp: i32) -> Result<Self> {
        let base = if exp < 0 { self.recip()? } else { self.clone() };
        let e = exp.unsigned_abs();
        // Powers of coprime parts stay coprime.
        Ok(Self::from_canonical(base.num.pow(e), base.den.pow(e)))
    }

    /// Largest integer `<= self`.
    pub fn floor(&self) -> BigInt {
        let (q, r) = self.num.div_rem_positive(&self.den);
        if r.is_negative() {
            q - BigInt::one()
        } else {
            q
        }
    }

    /// Smallest integer `>= self`.
    pub fn ceil(&self) -> BigInt {
        let (q, r) = self.num.div_rem_positive(&self.den);
        if r.is_positive() {
            q + BigInt::one()
        } else {
            q
        }
    }

    /// Lossy diagnostic conversion.
    ///
    /// Divides with ~64 significant quotient bits before converting, so large
    /// numerators and denominators do not overflow to `inf/inf`.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let shift = 64 - (self.num.bit_length() as i64 - self.den.bit_length() as i64);
        let (n, d) = if shift >= 0 {
            (self.num.abs().shl_bits(shift as usize), self.den.clone())
        } else {
            (self.num.abs(), self.den.shl_bits(shift.unsigned_abs() as usize))
        };
        let (q, _) = n.div_rem_positive(&d);
        let exp = (-shift).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let v = q.to_f64() * 2f64.powi(exp);
        if self.num.is_negative() {
            -v
        } else {
            v
        }
    }
}

forward_binop!(Fraction, Add, add, add_ref);
forward_binop!(Fraction, Sub, sub, sub_ref);
forward_binop!(Fraction, Mul, mul, mul_ref);

impl std::ops::Neg for Fraction {
    type Output = Fraction;
    #[inline]
    fn neg(self) -> Fraction {
        Fraction::from_canonical(-self.num, self.den)
    }
}

impl std::ops::Neg for &Fraction {
    type Output = Fraction;
    #[inline]
    fn neg(self) -> Fraction {
        Fraction::from_canonical(-&self.num, self.den.clone())
    }
}

impl std::iter::Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::zero(), |acc, x| acc + x)
    }
}

impl Ord for Fraction {
    /// Exact three-way comparison: `a.num * b.den` vs `b.num * a.den`.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.den == other.den {
            return self.num.cmp(&other.num);
        }
        let (sa, sb) = (self.signum(), other.signum());
        if sa != sb {
            return sa.cmp(&sb);
        }
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Fraction {
    fn from(num: BigInt) -> Self {
        Self::from_canonical(num, BigInt::one())
    }
}

impl From<i64> for Fraction {
    fn from(v: i64) -> Self {
        Self::from(BigInt::from(v))
    }
}

impl From<i32> for Fraction {
    fn from(v: i32) -> Self {
        Self::from(BigInt::from(v))
    }
}

#[cfg(test)]
mod tests;
