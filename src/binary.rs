/*
    Binary strings
*/

use std::fmt;
use std::str::FromStr;

use bitvec::prelude::*;
use num_bigint::BigUint;

use crate::FormatError;

/// Bit storage used throughout the crate.
///
/// Index 0 is the most significant bit, so slicing a `BitVec`
/// reads fields in the same order they are written out.
pub(crate) type BitVec = bitvec::vec::BitVec<u8, Msb0>;

/// Digit used to left-pad a `BinaryString` when packing it into bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    #[default]
    Zero,
    One,
}

impl Padding {
    fn bit(self) -> bool {
        matches!(self, Padding::One)
    }
}

/// Returns true if `s` is a non-empty string of `'0'` and `'1'` digits.
pub fn is_binary_str(s: &str) -> bool {
    validate(s).is_ok()
}

fn validate(s: &str) -> Result<(), FormatError> {
    if s.is_empty() {
        return Err(FormatError::Empty);
    }

    match s.chars().enumerate().find(|(_, c)| *c != '0' && *c != '1') {
        Some((index, found)) => Err(FormatError::InvalidDigit { index, found }),
        None => Ok(()),
    }
}

/// An unsigned binary number written most-significant bit first.
///
/// The string carries no sign and no width beyond its own length:
/// `"0011"` and `"11"` denote the same value but are different strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryString(String);

impl BinaryString {
    /// Validates `s` and wraps it as a `BinaryString`.
    pub fn new(s: impl Into<String>) -> Result<Self, FormatError> {
        let s = s.into();
        validate(&s)?;
        Ok(Self(s))
    }

    // Renders a bit slice, most significant bit first.
    pub(crate) fn from_bits(bits: &BitSlice<u8, Msb0>) -> Self {
        Self(bits.iter().map(|b| if *b { '1' } else { '0' }).collect())
    }

    /// Returns the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of digits.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn to_bits(&self) -> BitVec {
        self.0.chars().map(|c| c == '1').collect()
    }

    /// Interprets the digits as an unsigned integer.
    pub fn to_biguint(&self) -> BigUint {
        let mut i = BigUint::default();
        for c in self.0.chars() {
            i <<= 1u32;
            i.set_bit(0, c == '1');
        }
        i
    }

    /// Interprets the digits as an unsigned integer if it fits in a `u64`.
    /// Leading zeros do not count against the 64-bit limit.
    pub fn to_u64(&self) -> Option<u64> {
        let digits = self.0.trim_start_matches('0');
        if digits.len() > 64 {
            return None;
        }
        Some(digits.chars().fold(0, |acc, c| (acc << 1) | u64::from(c == '1')))
    }

    /// Packs the digits into bytes, most significant byte first.
    ///
    /// The string is first left-padded with `padding` to a multiple of 8
    /// digits, e.g., `"011011"` becomes `"00011011"`, i.e., `[0x1b]`.
    pub fn to_bytes(&self, padding: Padding) -> Vec<u8> {
        let width = self.width();
        let padded = width.div_ceil(8) * 8;

        let mut bv = BitVec::repeat(padding.bit(), padded - width);
        bv.extend(self.0.chars().map(|c| c == '1'));
        assert_eq!(bv.len() % 8, 0, "padded length is not byte aligned: {}", bv.len());
        bv.into_vec()
    }
}

impl FromStr for BinaryString {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for BinaryString {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

// Minimal form, no leading zeros (zero itself is "0")
impl From<&BigUint> for BinaryString {
    fn from(i: &BigUint) -> Self {
        Self(format!("{:b}", i))
    }
}

impl AsRef<str> for BinaryString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for BinaryString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BinaryString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
