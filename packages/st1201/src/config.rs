//! Declarative codec configuration.
//!
//! A [`CodecConfig`] describes a codec the way a deployment would write it
//! down. With the `serde` feature it (de)serializes as an internally tagged
//! object:
//!
//! ```json
//! { "type": "byPrecision", "min": -900.0, "max": 19000.0, "precision": 0.5 }
//! ```

use crate::codec::RangeCodec;
use crate::error::Error;

/// How to build a [`RangeCodec`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum CodecConfig {
    /// Explicit field length in bytes
    ByFieldLength {
        min: f64,
        max: f64,
        field_length: usize,
    },
    /// Narrowest field length distinguishing steps of `precision`
    ByPrecision { min: f64, max: f64, precision: f64 },
}

impl TryFrom<CodecConfig> for RangeCodec {
    type Error = Error;

    fn try_from(value: CodecConfig) -> Result<Self, Self::Error> {
        match value {
            CodecConfig::ByFieldLength {
                min,
                max,
                field_length,
            } => Self::with_field_length(min, max, field_length),
            CodecConfig::ByPrecision {
                min,
                max,
                precision,
            } => Self::with_precision(min, max, precision),
        }
    }
}

impl RangeCodec {
    /// Configuration that rebuilds this codec.
    #[must_use]
    pub const fn config(&self) -> CodecConfig {
        CodecConfig::ByFieldLength {
            min: self.min(),
            max: self.max(),
            field_length: self.field_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test_log::test]
    fn test_config_rebuilds_codec() {
        let codec = RangeCodec::with_precision(-900.0, 19_000.0, 0.5).unwrap();
        let rebuilt = RangeCodec::try_from(codec.config()).unwrap();

        assert_eq!(rebuilt, codec);
    }

    #[test_log::test]
    fn test_try_from_propagates_errors() {
        let config = CodecConfig::ByFieldLength {
            min: 0.0,
            max: 10.0,
            field_length: 3,
        };

        assert_eq!(
            RangeCodec::try_from(config),
            Err(Error::InvalidFieldLength(3))
        );
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn test_deserialize_by_precision() {
        let config: CodecConfig = serde_json::from_str(
            r#"{ "type": "byPrecision", "min": 0.0, "max": 100.0, "precision": 0.1 }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            CodecConfig::ByPrecision {
                min: 0.0,
                max: 100.0,
                precision: 0.1,
            }
        );
        assert_eq!(RangeCodec::try_from(config).unwrap().field_length(), 2);
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn test_serialize_by_field_length() {
        let codec = RangeCodec::with_field_length(0.0, 1e9, 8).unwrap();
        let json = serde_json::to_value(codec.config()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "byFieldLength",
                "min": 0.0,
                "max": 1e9,
                "fieldLength": 8,
            })
        );
    }
}
