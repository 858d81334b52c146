//! # zenppm
//!
//! Decoder and encoder for binary PPM (`P6`) images: 8 bits per channel,
//! maxval 255, packed RGB.
//!
//! Decoding is a bounded, single-shot operation. The header is validated in
//! full (magic, width and height in `1..=8192`, maxval 255) before any pixel
//! buffer is allocated, and the result is a [`Raster`] that owns exactly
//! `width * height * 3` bytes. Encoding writes the magic, one comment line,
//! the dimensions, the maxval and the raw pixels.
//!
//! ## Non-Goals
//!
//! - ASCII PNM (P1, P2, P3)
//! - PBM/PGM/PAM, 16-bit samples, maxval other than 255
//! - Streaming or incremental decode
//!
//! ## Usage
//!
//! ```
//! use zenppm::{EncodeRequest, Raster, Unstoppable};
//!
//! let raster = Raster::new(2, 1, vec![255, 0, 0, 0, 255, 0])?;
//! let bytes = EncodeRequest::new().encode(&raster, Unstoppable)?;
//! assert!(bytes.starts_with(b"P6\n# zenppm\n2 1\n255\n"));
//!
//! let decoded = zenppm::decode(&bytes, Unstoppable)?;
//! assert_eq!(decoded, raster);
//! # Ok::<(), zenppm::PpmError>(())
//! ```
//!
//! With the default `std` feature, [`read_ppm`] and [`write_ppm`] work on
//! file paths directly.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod raster;

pub mod ppm;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod file;

// Re-exports
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::PpmError;
#[cfg(feature = "std")]
pub use file::{read_ppm, write_ppm};
pub use info::ImageInfo;
pub use limits::{LimitKind, Limits};
pub use ppm::{DEFAULT_COMMENT, MAX_DIMENSION, MAXVAL};
pub use raster::Raster;

/// Decode a P6 file image with default settings.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Raster, PpmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode a raster with the default comment line.
pub fn encode(raster: &Raster, stop: impl Stop) -> Result<alloc::vec::Vec<u8>, PpmError> {
    EncodeRequest::new().encode(raster, stop)
}
