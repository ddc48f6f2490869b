/*
    Traits relevant to fixed-width arithmetic
*/

use num_bigint::BigUint;

use crate::DomainError;

/// A specification for fit-to-width behavior.
///
/// Any fixed-width integer operation can be decomposed into two steps:
///  - an exact operation on unbounded integers, and
///  - a fitting step that maps the exact result into the register.
/// A `Context` describes the second step: it decides which bits of the
/// exact result survive.
pub trait Context {
    /// Fits a strictly positive, exact result to this context.
    fn fit(&self, exact: BigUint) -> Result<BigUint, DomainError>;
}
