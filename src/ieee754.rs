/*
    Bit-level view of IEEE-754 binary64 values
*/

mod convert;
mod render;

use bitvec::prelude::*;

use crate::binary::{BinaryString, BitVec};

/** The bit fields of an IEEE-754 double-precision number.
 *
 * A `Float64Bits` stores the 64-bit pattern of an `f64` in its
 * canonical big-endian order: bit 0 is the sign, bits 1 to 11 hold the
 * biased exponent and bits 12 to 63 hold the mantissa field.
 * Fields are read straight off the stored pattern; no special case is
 * made for zeros, subnormals, infinities or NaNs.
 *
 */
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Float64Bits {
    bits: BitVec,
}

// Format parameters
impl Float64Bits {
    /// Bitwidth of the representation.
    pub const N: usize = 64;

    /// Bitwidth of the exponent field.
    pub const E: usize = 11;

    /// Bitwidth of the mantissa field.
    pub const M: usize = Self::N - Self::E - 1;

    /// Number of (binary) digits of a normalized significand.
    /// This is just `Self::M + 1`.
    pub const PREC: usize = Self::M + 1;

    /// Exponent of the largest finite value.
    pub const EMAX: i64 = i64::pow(2, (Self::E - 1) as u32) - 1;

    /// Exponent of the smallest normal value.
    /// This is just `1 - Self::EMAX`.
    pub const EMIN: i64 = 1 - Self::EMAX;

    /// The exponent field bias.
    /// This is just `Self::EMAX`.
    pub const BIAS: i64 = Self::EMAX;
}

// Reads a bit slice as an unsigned integer, most significant bit first.
fn bits_to_u64(bits: &BitSlice<u8, Msb0>) -> u64 {
    assert!(bits.len() <= 64, "cannot load {} bits into a u64", bits.len());
    bits.iter().fold(0, |acc, b| (acc << 1) | u64::from(*b))
}

// Field accessors
impl Float64Bits {
    /// Decodes the bit pattern of `f`.
    pub fn new(f: f64) -> Self {
        tracing::trace!(value = f, bits = f.to_bits(), "decoding f64");
        Self {
            bits: BitVec::from_slice(&f.to_be_bytes()),
        }
    }

    /// Returns the raw bit pattern as an integer.
    pub fn to_bits(&self) -> u64 {
        bits_to_u64(&self.bits)
    }

    /// Returns the 64-digit binary pattern: sign, exponent field,
    /// then mantissa field.
    pub fn to_binary_string(&self) -> BinaryString {
        BinaryString::from_bits(&self.bits)
    }

    /// Returns 1 if the sign bit is set and 0 otherwise.
    ///
    /// This reads the stored bit, so `-0.0` and a NaN with its
    /// sign bit set both report 1.
    pub fn sign_bit(&self) -> u8 {
        u8::from(self.bits[0])
    }

    /// Returns the 11-digit biased exponent field.
    pub fn exponent_field(&self) -> BinaryString {
        BinaryString::from_bits(self.exponent_bits())
    }

    /// Returns the unbiased exponent, the exponent field minus `Self::BIAS`.
    /// Zeros and subnormals give `-1023`, infinities and NaNs give `1024`.
    pub fn exponent_value(&self) -> i64 {
        // an 11-bit field always fits
        bits_to_u64(self.exponent_bits()) as i64 - Self::BIAS
    }

    /// Returns the 52-digit mantissa field.
    pub fn mantissa_field(&self) -> BinaryString {
        BinaryString::from_bits(self.mantissa_bits())
    }

    /// Returns the 53-bit significand: the mantissa field with an
    /// implicit leading one.
    ///
    /// Only meaningful for normal numbers; the leading one is added
    /// for zeros and subnormals as well.
    pub fn mantissa_value(&self) -> u64 {
        (1 << Self::M) | bits_to_u64(self.mantissa_bits())
    }

    #[inline]
    fn exponent_bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits[1..(Self::E + 1)]
    }

    #[inline]
    fn mantissa_bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits[(Self::E + 1)..]
    }
}

// Classification
impl Float64Bits {
    /// Returns true if this encodes a (signed) zero.
    pub fn is_zero(&self) -> bool {
        self.bits[1..].not_any()
    }

    /// Returns true if this encodes a subnormal number.
    pub fn is_subnormal(&self) -> bool {
        self.exponent_bits().not_any() && self.mantissa_bits().any()
    }

    /// Returns true if this encodes a normal number.
    pub fn is_normal(&self) -> bool {
        self.exponent_bits().any() && !self.exponent_bits().all()
    }

    /// Returns true if this encodes an infinity.
    pub fn is_infinity(&self) -> bool {
        self.exponent_bits().all() && self.mantissa_bits().not_any()
    }

    /// Returns true if this encodes a NaN.
    pub fn is_nan(&self) -> bool {
        self.exponent_bits().all() && self.mantissa_bits().any()
    }
}

/// Returns the 64-digit big-endian IEEE-754 pattern of `f`.
///
/// The pattern of a NaN depends on how the platform produced it.
pub fn to_binary_string(f: f64) -> BinaryString {
    Float64Bits::new(f).to_binary_string()
}

/// Returns 1 if the sign bit of `f` is set and 0 otherwise.
pub fn sign_bit(f: f64) -> u8 {
    Float64Bits::new(f).sign_bit()
}

/// Returns true if `f < 0`.
///
/// Unlike `sign_bit`, this is false for `-0.0` and for every NaN.
pub fn is_sign_negative_cmp(f: f64) -> bool {
    f < 0.0
}

/// Returns the 11-digit biased exponent field of `f`.
pub fn exponent_field(f: f64) -> BinaryString {
    Float64Bits::new(f).exponent_field()
}

/// Returns the unbiased exponent of `f`.
pub fn exponent_value(f: f64) -> i64 {
    Float64Bits::new(f).exponent_value()
}

/// Returns the 52-digit mantissa field of `f`.
pub fn mantissa_field(f: f64) -> BinaryString {
    Float64Bits::new(f).mantissa_field()
}

/// Returns the significand of `f` with the implicit leading one.
pub fn mantissa_value(f: f64) -> u64 {
    Float64Bits::new(f).mantissa_value()
}

/// Returns `"{sign}, {exponent field}, {mantissa field}"`.
pub fn split_render(f: f64) -> String {
    Float64Bits::new(f).split_render()
}

/// Returns `f` in binary scientific notation, e.g., `"-1.1 x 2^-2"` for `-0.375`.
pub fn scientific_render(f: f64) -> String {
    Float64Bits::new(f).scientific_render()
}
