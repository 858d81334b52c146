//! P6 encoder.

use super::{MAX_DIMENSION, MAXVAL};
use crate::error::PpmError;
use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

/// Validate dimensions and buffer length, returning the pixel byte count.
pub(crate) fn check_input(pixels: &[u8], width: u32, height: u32) -> Result<usize, PpmError> {
    if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
        return Err(PpmError::InvalidDimensions { width, height });
    }
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(PpmError::InvalidDimensions { width, height })?;
    if pixels.len() != expected {
        return Err(PpmError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(expected)
}

/// Build the text header: magic, optional comment line, dimensions, maxval.
pub(crate) fn header_bytes(width: u32, height: u32, comment: Option<&str>) -> Vec<u8> {
    let header = match comment {
        Some(tag) => format!("P6\n# {tag}\n{width} {height}\n{MAXVAL}\n"),
        None => format!("P6\n{width} {height}\n{MAXVAL}\n"),
    };
    header.into_bytes()
}

/// Encode a packed RGB buffer to a complete P6 file image.
pub(crate) fn encode_ppm(
    pixels: &[u8],
    width: u32,
    height: u32,
    comment: Option<&str>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PpmError> {
    let expected = check_input(pixels, width, height)?;

    stop.check()?;

    let header = header_bytes(width, height, comment);
    let mut out = Vec::with_capacity(header.len() + expected);
    out.extend_from_slice(&header);
    out.extend_from_slice(pixels);
    Ok(out)
}
