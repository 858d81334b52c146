//! PPM P6: raw 8-bit RGB with a short ASCII header.
//!
//! ```text
//! P6
//! # optional comment lines at any token boundary
//! <width> <height>
//! 255
//! <width * height * 3 bytes of RGB>
//! ```
//!
//! Exactly one separator byte follows the maxval field (optionally preceded
//! by a comment line); pixel data starts right after it.

mod decode;
mod encode;
mod header;

use crate::error::PpmError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::raster::Raster;
use alloc::vec::Vec;
use enough::Stop;

pub(crate) use encode::{check_input, header_bytes};

pub(crate) const MAGIC: &[u8; 2] = b"P6";

/// Largest accepted width or height. Caps allocation from untrusted headers.
pub const MAX_DIMENSION: u32 = 8192;

/// The only supported maxval (one byte per channel).
pub const MAXVAL: u32 = 255;

/// Magic plus three single-digit fields and separators.
pub(crate) const MIN_HEADER_LEN: usize = 14;

/// Comment tag written by [`crate::EncodeRequest::new`].
pub const DEFAULT_COMMENT: &str = "zenppm";

/// Parsed P6 header (internal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PpmHeader {
    pub width: u32,
    pub height: u32,
    pub maxval: u32,
    pub data_offset: usize,
}

impl PpmHeader {
    /// `width * height * 3`, or `None` on overflow.
    pub(crate) fn pixel_bytes(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|wh| wh.checked_mul(3))
    }
}

/// Probe header for ImageInfo without touching pixel data.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, PpmError> {
    let header = decode::parse_header(data, false)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        maxval: header.maxval,
        data_offset: header.data_offset,
    })
}

/// Decode P6 data (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    strict_separator: bool,
    stop: &dyn Stop,
) -> Result<Raster, PpmError> {
    let header = decode::parse_header(data, strict_separator)?;
    log::debug!(
        "decoding P6 {}x{} ({} input bytes)",
        header.width,
        header.height,
        data.len()
    );

    if let Some(limits) = limits {
        limits.check_header(&header)?;
    }

    stop.check()?;

    let pixels = decode::pixel_region(data, &header)?;
    Raster::new(header.width, header.height, pixels.to_vec())
}

/// Encode to P6 (called from EncodeRequest).
pub(crate) fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    comment: Option<&str>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PpmError> {
    encode::encode_ppm(pixels, width, height, comment, stop)
}
