//! Rational literals: `"n/d"`, `"n"` and finite decimals such as `"-0.25"`.

use std::fmt;
use std::str::FromStr;

use super::Fraction;
use crate::bigint::BigInt;
use crate::error::KernelError;

impl FromStr for Fraction {
    type Err = KernelError;

    /// A zero denominator in `"n/0"` is `DivisionByZero`, not a parse error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((n, d)) = s.split_once('/') {
            let num = integer_part(s, n)?;
            let den = integer_part(s, d)?;
            return Fraction::new(num, den);
        }
        if let Some((int, frac)) = s.split_once('.') {
            return decimal(s, int, frac);
        }
        integer_part(s, s).map(Fraction::from)
    }
}

fn integer_part(input: &str, part: &str) -> Result<BigInt, KernelError> {
    part.parse::<BigInt>().map_err(|e| match e {
        KernelError::ParseError { reason, .. } => KernelError::parse(input, reason),
        other => other,
    })
}

fn decimal(input: &str, int: &str, frac: &str) -> Result<Fraction, KernelError> {
    let (negative, int) = match int.as_bytes().first() {
        Some(b'-') => (true, &int[1..]),
        Some(b'+') => (false, &int[1..]),
        _ => (false, int),
    };
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int) || !all_digits(frac) {
        return Err(KernelError::parse(
            input,
            "decimal literal needs digits on both sides of '.'",
        ));
    }
    let digits: BigInt = integer_part(input, &format!("{int}{frac}"))?;
    let num = if negative { -digits } else { digits };
    let den = BigInt::from(10).pow(frac.len() as u32);
    Fraction::new(num, den)
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.num, self.den)
    }
}
