//! Error type shared by every layer of the kernel.
//!
//! All failures are local and deterministic. Degenerate predicate outcomes
//! are not errors (they are `Sign::Zero`).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Zero divisor or zero denominator.
    #[error("division by zero")]
    DivisionByZero,
    /// Vector/matrix operand shapes do not agree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Geometry algorithm given too few points.
    #[error("insufficient input: need at least {required} points, got {found}")]
    InsufficientInput { required: usize, found: usize },
    /// Malformed numeric literal.
    #[error("cannot parse {input:?}: {reason}")]
    ParseError { input: String, reason: String },
}

impl KernelError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::ParseError {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn dims(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, KernelError>;
