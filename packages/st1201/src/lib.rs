#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! # MISB ST 1201 Range Codec
//!
//! Maps `f64` values onto fixed-width unsigned integers and back, following
//! the linear quantization of MISB ST 1201. A [`RangeCodec`] is configured
//! with a range `[min, max]` and either a field length (1, 2, 4, or 8 bytes)
//! or a required precision, and then encodes values into big-endian bytes.
//!
//! +infinity, -infinity and NaN are carried as reserved first-byte markers
//! (see [`special`]).
//!
//! ```rust
//! use misb_st1201::{FieldWidth, RangeCodec};
//!
//! # fn main() -> Result<(), misb_st1201::Error> {
//! let codec = RangeCodec::with_precision(0.0, 100.0, 0.1)?;
//! assert_eq!(codec.field_width(), FieldWidth::Two);
//!
//! let encoded = codec.encode(42.0)?;
//! assert_eq!(encoded.len(), 2);
//!
//! let decoded = codec.decode(&encoded)?;
//! assert!((decoded - 42.0).abs() <= codec.bucket_width());
//!
//! assert_eq!(codec.encode(f64::INFINITY)?, [0xC8, 0x00]);
//! # Ok(())
//! # }
//! ```

#[cfg(any(test, feature = "arb"))]
pub mod arb;

pub mod codec;
pub mod config;
pub mod error;
pub mod special;
pub mod width;

pub use codec::RangeCodec;
pub use config::CodecConfig;
pub use error::{Error, Result};
pub use special::{NAN_MARKER, NEGATIVE_INFINITY_MARKER, POSITIVE_INFINITY_MARKER, Special};
pub use width::FieldWidth;
