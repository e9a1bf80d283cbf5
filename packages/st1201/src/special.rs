//! Non-numeric values.
//!
//! ST 1201 reserves three first-byte markers for +infinity, -infinity and NaN.
//! Every marker has the top bit set, which an ordinary codepoint never does
//! beyond `0x80`, so a decoder tells them apart by comparing the first byte
//! against the markers directly.

/// First byte of an encoded +infinity.
pub const POSITIVE_INFINITY_MARKER: u8 = 0xC8;
/// First byte of an encoded -infinity.
pub const NEGATIVE_INFINITY_MARKER: u8 = 0xE8;
/// First byte of an encoded NaN.
pub const NAN_MARKER: u8 = 0xD0;

/// A value sent as a reserved marker rather than a quantized magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Special {
    /// +infinity
    PositiveInfinity,
    /// -infinity
    NegativeInfinity,
    /// Any NaN. The payload is not preserved.
    NaN,
}

impl Special {
    /// Classifies `value`, returning `None` for finite values.
    #[must_use]
    pub fn classify(value: f64) -> Option<Self> {
        if value.is_nan() {
            Some(Self::NaN)
        } else if value.is_infinite() {
            Some(if value.is_sign_positive() {
                Self::PositiveInfinity
            } else {
                Self::NegativeInfinity
            })
        } else {
            None
        }
    }

    /// Matches a first byte against the reserved markers.
    #[must_use]
    pub const fn from_marker(byte: u8) -> Option<Self> {
        match byte {
            POSITIVE_INFINITY_MARKER => Some(Self::PositiveInfinity),
            NEGATIVE_INFINITY_MARKER => Some(Self::NegativeInfinity),
            NAN_MARKER => Some(Self::NaN),
            _ => None,
        }
    }

    /// Reserved first byte for this value.
    #[must_use]
    pub const fn marker(self) -> u8 {
        match self {
            Self::PositiveInfinity => POSITIVE_INFINITY_MARKER,
            Self::NegativeInfinity => NEGATIVE_INFINITY_MARKER,
            Self::NaN => NAN_MARKER,
        }
    }

    /// The `f64` this marker decodes to.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::PositiveInfinity => f64::INFINITY,
            Self::NegativeInfinity => f64::NEG_INFINITY,
            Self::NaN => f64::NAN,
        }
    }
}
