//! Tri-state sign shared by numbers and predicates.
//!
//! Predicates never collapse to `bool`: `Zero` is an exact degeneracy
//! (collinear, concyclic) and callers branch on it explicitly.

use std::cmp::Ordering;
use std::ops::{Mul, Neg};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    #[default]
    Zero,
    Positive,
}

impl Sign {
    #[inline]
    pub fn from_ordering(o: Ordering) -> Self {
        match o {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    #[inline]
    pub fn to_ordering(self) -> Ordering {
        match self {
            Sign::Negative => Ordering::Less,
            Sign::Zero => Ordering::Equal,
            Sign::Positive => Ordering::Greater,
        }
    }

    /// -1, 0 or +1.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }
    #[inline]
    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

impl Neg for Sign {
    type Output = Sign;
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;
    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sign::Negative => "NEGATIVE",
            Sign::Zero => "ZERO",
            Sign::Positive => "POSITIVE",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_follows_sign_rules() {
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Zero * Sign::Negative, Sign::Zero);
        assert_eq!(-Sign::Positive, Sign::Negative);
    }

    #[test]
    fn ordering_conversion_is_inverse() {
        for s in [Sign::Negative, Sign::Zero, Sign::Positive] {
            assert_eq!(Sign::from_ordering(s.to_ordering()), s);
        }
        assert_eq!(Sign::Negative.as_i8(), -1);
    }
}
