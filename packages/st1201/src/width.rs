//! Encoded field widths.
//!
//! ST 1201 only permits 8, 16, 32 and 64-bit integers on the wire. [`FieldWidth`]
//! keeps any other width from reaching a constructed codec.

use crate::error::{Error, Result};

/// Byte width of an encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub enum FieldWidth {
    /// 8-bit integer
    One,
    /// 16-bit integer
    Two,
    /// 32-bit integer
    Four,
    /// 64-bit integer
    Eight,
}

impl FieldWidth {
    /// All valid widths, narrowest first.
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Four, Self::Eight];

    /// Number of bytes on the wire.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Number of bits on the wire.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::One => u8::BITS,
            Self::Two => u16::BITS,
            Self::Four => u32::BITS,
            Self::Eight => u64::BITS,
        }
    }

    /// Usable integer bits. The top bit is left to the sentinel markers.
    #[must_use]
    pub const fn data_exponent(self) -> u32 {
        self.bits() - 1
    }

    /// Picks the narrowest width holding `bytes` bytes.
    ///
    /// A count of zero selects [`FieldWidth::One`]. Returns `None` when more
    /// than 8 bytes are needed.
    #[must_use]
    pub const fn for_byte_count(bytes: usize) -> Option<Self> {
        match bytes {
            0 | 1 => Some(Self::One),
            2 => Some(Self::Two),
            3 | 4 => Some(Self::Four),
            5..=8 => Some(Self::Eight),
            _ => None,
        }
    }
}

impl TryFrom<usize> for FieldWidth {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            _ => Err(Error::InvalidFieldLength(value)),
        }
    }
}

impl From<FieldWidth> for usize {
    fn from(value: FieldWidth) -> Self {
        value.bytes()
    }
}

impl std::fmt::Display for FieldWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes", self.bytes())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(1, FieldWidth::One; "one_byte")]
    #[test_case(2, FieldWidth::Two; "two_bytes")]
    #[test_case(4, FieldWidth::Four; "four_bytes")]
    #[test_case(8, FieldWidth::Eight; "eight_bytes")]
    fn test_try_from_valid_lengths(length: usize, expected: FieldWidth) {
        assert_eq!(FieldWidth::try_from(length).unwrap(), expected);
        assert_eq!(usize::from(expected), length);
    }

    #[test_case(0; "zero")]
    #[test_case(3; "three")]
    #[test_case(5; "five")]
    #[test_case(16; "sixteen")]
    fn test_try_from_invalid_lengths(length: usize) {
        assert_eq!(
            FieldWidth::try_from(length),
            Err(Error::InvalidFieldLength(length))
        );
    }

    #[test_log::test]
    fn test_data_exponent_reserves_top_bit() {
        assert_eq!(FieldWidth::One.data_exponent(), 7);
        assert_eq!(FieldWidth::Two.data_exponent(), 15);
        assert_eq!(FieldWidth::Four.data_exponent(), 31);
        assert_eq!(FieldWidth::Eight.data_exponent(), 63);
    }

    #[test_case(0, Some(FieldWidth::One); "zero_rounds_up_to_one")]
    #[test_case(1, Some(FieldWidth::One); "one")]
    #[test_case(2, Some(FieldWidth::Two); "two")]
    #[test_case(3, Some(FieldWidth::Four); "three_rounds_up_to_four")]
    #[test_case(4, Some(FieldWidth::Four); "four")]
    #[test_case(5, Some(FieldWidth::Eight); "five_rounds_up_to_eight")]
    #[test_case(8, Some(FieldWidth::Eight); "eight")]
    #[test_case(9, None; "nine_is_too_wide")]
    fn test_for_byte_count_ladder(bytes: usize, expected: Option<FieldWidth>) {
        assert_eq!(FieldWidth::for_byte_count(bytes), expected);
    }

    #[test_log::test]
    fn test_display() {
        assert_eq!(FieldWidth::Four.to_string(), "4 bytes");
    }
}
