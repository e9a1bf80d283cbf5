use thiserror::Error;

/// Range codec errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Field length is not one of 1, 2, 4 or 8 bytes
    #[error("Invalid field length: {0} bytes (expected 1, 2, 4, or 8)")]
    InvalidFieldLength(usize),

    /// Requested precision needs more than a 64-bit integer
    #[error(
        "Precision {precision} cannot be represented over [{min}, {max}] using a 64-bit integer"
    )]
    PrecisionUnrepresentable {
        /// Lower bound of the requested range
        min: f64,
        /// Upper bound of the requested range
        max: f64,
        /// Requested precision
        precision: f64,
    },

    /// Bounds are not finite or `min` is not below `max`
    #[error("Invalid range [{min}, {max}]")]
    InvalidRange {
        /// Configured lower bound
        min: f64,
        /// Configured upper bound
        max: f64,
    },

    /// Value to encode lies outside the configured range
    #[error("Value {value} must be in range [{min}, {max}]")]
    OutOfRange {
        /// Rejected value
        value: f64,
        /// Configured lower bound
        min: f64,
        /// Configured upper bound
        max: f64,
    },

    /// Byte sequence length differs from the field length
    #[error("Length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Configured field length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Reconstructed value lies outside the configured range
    #[error("Decoded value {value} out of range [{min}, {max}]")]
    DecodedOutOfRange {
        /// Reconstructed value
        value: f64,
        /// Configured lower bound
        min: f64,
        /// Configured upper bound
        max: f64,
    },
}

/// Result type for range codec operations.
pub type Result<T> = std::result::Result<T, Error>;
