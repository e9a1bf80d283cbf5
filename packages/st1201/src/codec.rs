//! The ST 1201 range codec.
//!
//! A [`RangeCodec`] linearly maps `[min, max]` onto the unsigned integers of a
//! fixed [`FieldWidth`] and back. Constants are derived once at construction
//! (ST 1201 section 8.9); encoding and decoding are pure functions of the input
//! and those constants.

use crate::error::{Error, Result};
use crate::special::Special;
use crate::width::FieldWidth;

/// Range codec configured for a value range and field width.
///
/// # Examples
///
/// ```rust
/// # use misb_st1201::RangeCodec;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let codec = RangeCodec::with_field_length(0.0, 1e9, 8)?;
///
/// let encoded = codec.encode(3.14159)?;
/// assert_eq!(encoded, [0x00, 0x00, 0x00, 0x06, 0x48, 0x7e, 0x7c, 0x06]);
///
/// let decoded = codec.decode(&encoded)?;
/// assert!((decoded - 3.14159).abs() < 1e-8);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeCodec {
    min: f64,
    max: f64,
    width: FieldWidth,
    range_exponent: i32,
    data_exponent: i32,
    forward_scale: f64,
    reverse_scale: f64,
    zero_offset: f64,
}

/// Base-2 logarithm through the natural log, as ST 1201 computes it.
///
/// Kept instead of [`f64::log2`] so exponents match the standard's algorithm
/// at power-of-two boundaries.
fn log2(value: f64) -> f64 {
    value.ln() / std::f64::consts::LN_2
}

const fn check_range(min: f64, max: f64) -> Result<()> {
    if min.is_finite() && max.is_finite() && min < max && (max - min).is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidRange { min, max })
    }
}

impl RangeCodec {
    /// Creates a codec over `[min, max]` encoding into `width`.
    ///
    /// # Errors
    ///
    /// * `InvalidRange` - If a bound is not finite, `min >= max`, or the range is
    ///   too narrow for the derived scale to be finite
    pub fn new(min: f64, max: f64, width: FieldWidth) -> Result<Self> {
        check_range(min, max)?;

        #[allow(clippy::cast_possible_truncation)]
        let range_exponent = log2(max - min).ceil() as i32;
        #[allow(clippy::cast_possible_wrap)]
        let data_exponent = width.data_exponent() as i32;
        let forward_scale = 2_f64.powi(data_exponent - range_exponent);
        let reverse_scale = 2_f64.powi(range_exponent - data_exponent);

        if !forward_scale.is_finite() || reverse_scale == 0.0 {
            return Err(Error::InvalidRange { min, max });
        }

        let zero_offset = if min < 0.0 && max > 0.0 {
            let scaled = forward_scale * min;
            scaled - scaled.floor()
        } else {
            0.0
        };

        log::debug!(
            "new: min={min} max={max} width={width} b_pow={range_exponent} d_pow={data_exponent} \
             s_f={forward_scale} s_r={reverse_scale} z_offset={zero_offset}"
        );

        Ok(Self {
            min,
            max,
            width,
            range_exponent,
            data_exponent,
            forward_scale,
            reverse_scale,
            zero_offset,
        })
    }

    /// Creates a codec with an explicit field length in bytes.
    ///
    /// # Errors
    ///
    /// * `InvalidFieldLength` - If `field_length` is not 1, 2, 4, or 8
    /// * `InvalidRange` - If the range is invalid (see [`RangeCodec::new`])
    pub fn with_field_length(min: f64, max: f64, field_length: usize) -> Result<Self> {
        let width = FieldWidth::try_from(field_length).inspect_err(|e| {
            log::debug!("with_field_length: rejected field_length={field_length}: {e}");
        })?;

        Self::new(min, max, width)
    }

    /// Creates a codec using the narrowest field width that distinguishes
    /// steps of `precision` over `[min, max]`.
    ///
    /// # Errors
    ///
    /// * `PrecisionUnrepresentable` - If `precision` is not a positive finite
    ///   number or would need more than a 64-bit integer
    /// * `InvalidRange` - If the range is invalid (see [`RangeCodec::new`])
    pub fn with_precision(min: f64, max: f64, precision: f64) -> Result<Self> {
        check_range(min, max)?;

        let unrepresentable = Error::PrecisionUnrepresentable {
            min,
            max,
            precision,
        };

        if !precision.is_finite() || precision <= 0.0 {
            return Err(unrepresentable);
        }

        let bits = (log2((max - min) / precision) + 1.0).ceil();
        let bytes = (bits / 8.0).ceil();

        if bytes.is_nan() {
            return Err(unrepresentable);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let byte_count = bytes.max(0.0) as usize;

        let Some(width) = FieldWidth::for_byte_count(byte_count) else {
            log::debug!("with_precision: {bits} bits needed for precision={precision}");
            return Err(unrepresentable);
        };

        log::trace!("with_precision: bits={bits} bytes={bytes} width={width}");

        Self::new(min, max, width)
    }

    /// Encodes `value` into `out`, which must be exactly
    /// [`field_length`](Self::field_length) bytes long.
    ///
    /// Infinities and NaN are written as their reserved marker followed by
    /// zero bytes.
    ///
    /// # Errors
    ///
    /// * `LengthMismatch` - If `out` is not `field_length` bytes long
    /// * `OutOfRange` - If a finite `value` lies outside `[min, max]`
    pub fn encode_into(&self, value: f64, out: &mut [u8]) -> Result<()> {
        let length = self.width.bytes();

        if out.len() != length {
            return Err(Error::LengthMismatch {
                expected: length,
                actual: out.len(),
            });
        }

        if let Some(special) = Special::classify(value) {
            log::trace!("encode: {special:?}");
            out.fill(0);
            out[0] = special.marker();
            return Ok(());
        }

        if value < self.min || value > self.max {
            log::debug!(
                "encode: value={value} outside [{}, {}]",
                self.min,
                self.max
            );
            return Err(Error::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }

        // Unfused; a fused multiply-add can round to a different codepoint.
        #[allow(clippy::suboptimal_flops)]
        let scaled = self.forward_scale * (value - self.min) + self.zero_offset;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let codepoint = scaled.floor() as u64;

        log::trace!("encode: value={value} codepoint={codepoint}");

        out.copy_from_slice(&codepoint.to_be_bytes()[8 - length..]);

        Ok(())
    }

    /// Encodes `value` as `field_length` big-endian bytes.
    ///
    /// # Errors
    ///
    /// * `OutOfRange` - If a finite `value` lies outside `[min, max]`
    pub fn encode(&self, value: f64) -> Result<Vec<u8>> {
        let mut encoded = vec![0; self.width.bytes()];
        self.encode_into(value, &mut encoded)?;
        Ok(encoded)
    }

    /// Decodes a value produced by [`encode`](Self::encode).
    ///
    /// A first byte matching a reserved marker decodes to its non-numeric
    /// value whatever the remaining bytes hold.
    ///
    /// # Errors
    ///
    /// * `LengthMismatch` - If `bytes` is not `field_length` bytes long
    /// * `DecodedOutOfRange` - If the reconstructed value lies outside
    ///   `[min, max]`, which means corrupt input or mismatched configuration.
    ///   Codepoint 0 of a range with a nonzero [`zero_offset`](Self::zero_offset)
    ///   also fails, so `encode(min)` of such a range does not decode.
    pub fn decode(&self, bytes: &[u8]) -> Result<f64> {
        let length = self.width.bytes();

        if bytes.len() != length {
            return Err(Error::LengthMismatch {
                expected: length,
                actual: bytes.len(),
            });
        }

        if let Some(special) = Special::from_marker(bytes[0]) {
            log::trace!("decode: {special:?}");
            return Ok(special.value());
        }

        let codepoint = bytes
            .iter()
            .fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte));

        #[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
        let value = self.reverse_scale * (codepoint as f64 - self.zero_offset) + self.min;

        log::trace!("decode: codepoint={codepoint} value={value}");

        if value < self.min || value > self.max {
            log::debug!(
                "decode: codepoint={codepoint} reconstructs to {value} outside [{}, {}]",
                self.min,
                self.max
            );
            return Err(Error::DecodedOutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }

        Ok(value)
    }

    /// Lower bound of the encodable range.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the encodable range.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Width of the encoded integer.
    #[must_use]
    pub const fn field_width(&self) -> FieldWidth {
        self.width
    }

    /// Encoded size in bytes.
    #[must_use]
    pub const fn field_length(&self) -> usize {
        self.width.bytes()
    }

    /// `ceil(log2(max - min))`
    #[must_use]
    pub const fn range_exponent(&self) -> i32 {
        self.range_exponent
    }

    /// Usable integer bits, one less than the field's bit count.
    #[must_use]
    pub const fn data_exponent(&self) -> i32 {
        self.data_exponent
    }

    /// Multiplier from a float delta to an integer magnitude.
    #[must_use]
    pub const fn forward_scale(&self) -> f64 {
        self.forward_scale
    }

    /// Multiplier from an integer magnitude back to a float delta.
    #[must_use]
    pub const fn reverse_scale(&self) -> f64 {
        self.reverse_scale
    }

    /// Fraction added during encoding so that 0.0 lands on a codepoint.
    /// Zero unless the range straddles zero.
    #[must_use]
    pub const fn zero_offset(&self) -> f64 {
        self.zero_offset
    }

    /// Float width of one codepoint increment.
    #[must_use]
    pub const fn bucket_width(&self) -> f64 {
        self.reverse_scale
    }

    /// Half a bucket, the nominal worst-case quantization error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.reverse_scale / 2.0
    }
}
