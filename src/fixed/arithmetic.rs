/*
    Arithmetic on fixed-width registers
*/

use num_bigint::{BigInt, BigUint};

use super::*;
use crate::Context;

/// Fits `a` to the register described by `ctx`.
pub fn truncate<C: Context>(a: impl Into<BigInt>, ctx: &C) -> Result<BigUint, DomainError> {
    ctx.fit(positive(a)?)
}

/// Adds `a` and `b` exactly, then fits the sum to `ctx`.
/// The sum, not each operand, must be strictly positive.
pub fn add<C: Context>(
    a: impl Into<BigInt>,
    b: impl Into<BigInt>,
    ctx: &C,
) -> Result<BigUint, DomainError> {
    ctx.fit(positive(a.into() + b.into())?)
}

/// Multiplies `a` and `b` exactly, then fits the product to `ctx`.
/// The product, not each operand, must be strictly positive.
pub fn mul<C: Context>(
    a: impl Into<BigInt>,
    b: impl Into<BigInt>,
    ctx: &C,
) -> Result<BigUint, DomainError> {
    ctx.fit(positive(a.into() * b.into())?)
}

/// `lsb_truncate(a + b, n)`
pub fn add_with_lsb_trunc(
    a: impl Into<BigInt>,
    b: impl Into<BigInt>,
    n: usize,
) -> Result<BigUint, DomainError> {
    add(a, b, &FixedContext::new(n).policy(Policy::Lsb))
}

/// `lsb_truncate(a * b, n)`
pub fn mul_with_lsb_trunc(
    a: impl Into<BigInt>,
    b: impl Into<BigInt>,
    n: usize,
) -> Result<BigUint, DomainError> {
    mul(a, b, &FixedContext::new(n).policy(Policy::Lsb))
}

/// `msb_truncate(a + b, n)`
pub fn add_with_msb_trunc(
    a: impl Into<BigInt>,
    b: impl Into<BigInt>,
    n: usize,
) -> Result<BigUint, DomainError> {
    add(a, b, &FixedContext::new(n).policy(Policy::Msb))
}

/// `msb_truncate(a * b, n)`
pub fn mul_with_msb_trunc(
    a: impl Into<BigInt>,
    b: impl Into<BigInt>,
    n: usize,
) -> Result<BigUint, DomainError> {
    mul(a, b, &FixedContext::new(n).policy(Policy::Msb))
}
