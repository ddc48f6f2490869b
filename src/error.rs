/*
    Errors
*/

use num_bigint::BigInt;
use thiserror::Error;

/// A precondition violation on a numeric input.
///
/// Raised by the fixed-width operations when the integer operand
/// is not strictly positive, or when a truncation width of zero
/// would have to be applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("expected a strictly positive integer, received {0}")]
    NonPositive(BigInt),
    #[error("truncation width must be at least 1 bit")]
    ZeroWidth,
}

/// A malformed binary string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("binary string is empty")]
    Empty,
    #[error("invalid binary digit {found:?} at position {index}")]
    InvalidDigit { index: usize, found: char },
    #[error("expected {expected} binary digits, received {found}")]
    WrongLength { expected: usize, found: usize },
}

/// Any error raised by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, Error>;
