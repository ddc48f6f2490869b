/*
    Conversions to and from `Float64Bits`
*/

use super::*;
use crate::FormatError;

impl Float64Bits {
    /// Rebuilds a `Float64Bits` from a 64-digit binary pattern.
    pub fn from_binary(s: &BinaryString) -> Result<Self, FormatError> {
        if s.width() != Self::N {
            return Err(FormatError::WrongLength {
                expected: Self::N,
                found: s.width(),
            });
        }

        Ok(Self { bits: s.to_bits() })
    }
}

// Implementing `From<f64>` for `Float64Bits`
impl From<f64> for Float64Bits {
    fn from(f: f64) -> Self {
        Self::new(f)
    }
}

// Implementing `From<Float64Bits>` for `f64`
impl From<Float64Bits> for f64 {
    fn from(fp: Float64Bits) -> Self {
        f64::from_bits(fp.to_bits())
    }
}

impl TryFrom<&BinaryString> for Float64Bits {
    type Error = FormatError;

    fn try_from(s: &BinaryString) -> Result<Self, Self::Error> {
        Self::from_binary(s)
    }
}
