//! Decimal text form: `FromStr`, `Display`, `Debug`.

use std::fmt;
use std::str::FromStr;

use super::{mag, BigInt};
use crate::error::KernelError;

/// Largest power of ten below 2^32, used as the conversion chunk.
const DEC_CHUNK: u32 = 1_000_000_000;
const DEC_DIGITS: usize = 9;

impl FromStr for BigInt {
    type Err = KernelError;

    /// Accepts an optional `+`/`-` followed by one or more ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() {
            return Err(KernelError::parse(s, "expected at least one digit"));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(KernelError::parse(
                s,
                format!("unexpected character {bad:?}"),
            ));
        }
        let mut limbs = Vec::with_capacity(digits.len() / DEC_DIGITS + 1);
        for chunk in digits.as_bytes().chunks(DEC_DIGITS) {
            let val = chunk
                .iter()
                .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'));
            mag::mul_small_add(&mut limbs, 10u32.pow(chunk.len() as u32), val);
        }
        Ok(BigInt::from_limbs(negative, limbs))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chunks = Vec::new();
        let mut rest = self.mag.clone();
        while !rest.is_empty() {
            let (q, r) = mag::divrem_small(&rest, DEC_CHUNK);
            chunks.push(r);
            rest = q;
        }
        let mut digits = match chunks.pop() {
            None => String::from("0"),
            Some(top) => top.to_string(),
        };
        for c in chunks.iter().rev() {
            digits.push_str(&format!("{c:09}"));
        }
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}
