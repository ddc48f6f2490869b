/*
    Textual renderings of `Float64Bits`
*/

use std::fmt;

use super::*;

impl Float64Bits {
    /// Returns the three fields joined by `", "`,
    /// e.g., `"0, 01111111111, 0001100110011..."` for `1.1`.
    pub fn split_render(&self) -> String {
        format!(
            "{}, {}, {}",
            self.sign_bit(),
            self.exponent_field(),
            self.mantissa_field()
        )
    }

    /// Returns the value in binary scientific notation.
    ///
    /// Trailing zeros of the mantissa field are dropped and the sign is
    /// written as `-1` or `1`. The exponent suffix `" x 2^{e}"` is omitted
    /// when the unbiased exponent is 0, so `1.0` renders as `"1."`.
    /// The result is meant for reading, not for parsing back.
    pub fn scientific_render(&self) -> String {
        let sign = if self.sign_bit() == 1 { -1 } else { 1 };
        let mantissa = self.mantissa_field();
        let trimmed = mantissa.as_str().trim_end_matches('0');
        match self.exponent_value() {
            0 => format!("{}.{}", sign, trimmed),
            exp => format!("{}.{} x 2^{}", sign, trimmed, exp),
        }
    }
}

// Parenthesized split rendering
impl fmt::Display for Float64Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.split_render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scientific_omits_zero_exponent() {
        assert_eq!(Float64Bits::new(1.0).scientific_render(), "1.");
        assert_eq!(Float64Bits::new(-1.5).scientific_render(), "-1.1");
        assert_eq!(Float64Bits::new(-0.375).scientific_render(), "-1.1 x 2^-2");
        assert_eq!(Float64Bits::new(8.0).scientific_render(), "1. x 2^3");
    }
}
