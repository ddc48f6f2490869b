/*
    Fixed-width truncation of positive integers
*/

mod arithmetic;
mod context;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::DomainError;

pub use arithmetic::*;

/// Which bits survive when a value does not fit its width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Keep the leading bits, dropping the low-order side.
    #[default]
    Lsb,
    /// Keep the trailing bits, i.e., reduce modulo `2^n`.
    Msb,
    /// Keep the leading bits, rounding up when the first dropped bit is 1.
    LsbApprox,
}

/// A fixed-width register: a bit width and a truncation `Policy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedContext {
    width: usize,
    policy: Policy,
}

// Converts a caller-supplied integer, rejecting zero and negative values.
pub(crate) fn positive(a: impl Into<BigInt>) -> Result<BigUint, DomainError> {
    let a = a.into();
    match a.to_biguint() {
        Some(u) if !u.is_zero() => Ok(u),
        _ => Err(DomainError::NonPositive(a)),
    }
}

// Returns the number of bits to drop from `a`, or `None` if it fits in `n` bits.
fn excess_bits(a: &BigUint, n: usize) -> Result<Option<u64>, DomainError> {
    let bits = a.bits();
    let width = n as u64;
    if bits <= width {
        Ok(None)
    } else if width == 0 {
        Err(DomainError::ZeroWidth)
    } else {
        Ok(Some(bits - width))
    }
}

pub(crate) fn lsb_trunc(a: BigUint, n: usize) -> Result<BigUint, DomainError> {
    match excess_bits(&a, n)? {
        Some(excess) => {
            tracing::trace!(bits = a.bits(), width = n, policy = "lsb", "truncating");
            Ok(a >> excess)
        }
        None => Ok(a),
    }
}

pub(crate) fn msb_trunc(a: BigUint, n: usize) -> Result<BigUint, DomainError> {
    match excess_bits(&a, n)? {
        Some(_) => {
            tracing::trace!(bits = a.bits(), width = n, policy = "msb", "truncating");
            Ok(a.mod_floor(&(BigUint::one() << n)))
        }
        None => Ok(a),
    }
}

pub(crate) fn lsb_trunc_approx(a: BigUint, n: usize) -> Result<BigUint, DomainError> {
    let excess = match excess_bits(&a, n)? {
        Some(excess) => excess,
        None => return Ok(a),
    };

    tracing::trace!(bits = a.bits(), width = n, policy = "lsb-approx", "truncating");
    let prefix = &a >> excess;

    // first dropped bit decides the rounding
    if !a.bit(excess - 1) {
        return Ok(prefix);
    }

    let carried = prefix + 1u32;
    tracing::debug!(width = n, "rounding kept prefix up");
    if carried.bits() > n as u64 {
        tracing::debug!(width = n, "carry overflowed width, truncating again");
    }
    lsb_trunc(carried, n)
}

/// Returns the number of bits in the minimal binary form of `a`,
/// i.e., `floor(log2(a)) + 1`.
///
/// Fails with `DomainError::NonPositive` unless `a > 0`.
pub fn bit_length(a: impl Into<BigInt>) -> Result<u64, DomainError> {
    Ok(positive(a)?.bits())
}

/// Returns true if `a` needs more than `n` bits.
pub fn is_overflow(a: impl Into<BigInt>, n: usize) -> Result<bool, DomainError> {
    Ok(bit_length(a)? > n as u64)
}

/// Truncates `a` to its `n` leading bits, dropping the low-order side.
/// Returns `a` unchanged if it already fits in `n` bits.
///
/// For example, `2045` is `0b11111111101` and truncates to
/// `0b1111111110 = 1022` at 10 bits.
pub fn lsb_truncate(a: impl Into<BigInt>, n: usize) -> Result<BigUint, DomainError> {
    lsb_trunc(positive(a)?, n)
}

/// Truncates `a` to its `n` trailing bits, dropping the high-order side.
/// Returns `a` unchanged if it already fits in `n` bits; otherwise this is
/// `a mod 2^n`.
pub fn msb_truncate(a: impl Into<BigInt>, n: usize) -> Result<BigUint, DomainError> {
    msb_trunc(positive(a)?, n)
}

/// Like `lsb_truncate`, but rounds to nearest: if the first dropped bit
/// is 1 the kept prefix is incremented, and the incremented value is
/// truncated again in case the carry grew it past `n` bits.
pub fn lsb_truncate_with_approximation(
    a: impl Into<BigInt>,
    n: usize,
) -> Result<BigUint, DomainError> {
    lsb_trunc_approx(positive(a)?, n)
}
