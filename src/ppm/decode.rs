//! P6 header parsing and pixel extraction.

use super::header::{Cursor, is_whitespace};
use super::{MAGIC, MAX_DIMENSION, MAXVAL, MIN_HEADER_LEN, PpmHeader};
use crate::error::PpmError;

/// Parse and validate a P6 header, locating the first pixel byte.
///
/// Fails fast in field order: length, magic, width, height, maxval, then
/// (only when `strict_separator` is set) the separator byte.
pub(crate) fn parse_header(data: &[u8], strict_separator: bool) -> Result<PpmHeader, PpmError> {
    if data.len() < MIN_HEADER_LEN {
        return Err(PpmError::TruncatedHeader { len: data.len() });
    }
    if &data[..2] != MAGIC {
        return Err(PpmError::BadMagic);
    }
    // Reject "P6" that is merely the prefix of some other token.
    if !(is_whitespace(data[2]) || data[2] == b'#') {
        return Err(PpmError::BadMagic);
    }

    let mut cursor = Cursor::new(data, MAGIC.len());

    let width = cursor.read_number().map_err(|_| PpmError::BadWidth(None))?;
    if !(1..=MAX_DIMENSION).contains(&width) {
        return Err(PpmError::BadWidth(Some(width)));
    }

    let height = cursor
        .read_number()
        .map_err(|_| PpmError::BadHeight(None))?;
    if !(1..=MAX_DIMENSION).contains(&height) {
        return Err(PpmError::BadHeight(Some(height)));
    }

    let maxval = cursor
        .read_number()
        .map_err(|_| PpmError::BadMaxval(None))?;
    if maxval != MAXVAL {
        return Err(PpmError::BadMaxval(Some(maxval)));
    }

    if cursor.peek() == Some(b'#') {
        cursor.skip_to_eol();
    }
    let separator_offset = cursor.pos();
    // Exactly one separator byte. At EOF nothing is consumed and the pixel
    // length check reports the truncation.
    if let Some(byte) = cursor.bump() {
        if strict_separator && !is_whitespace(byte) {
            return Err(PpmError::BadSeparator {
                offset: separator_offset,
                byte,
            });
        }
    }

    let header = PpmHeader {
        width,
        height,
        maxval,
        data_offset: cursor.pos(),
    };
    log::trace!(
        "ppm header: {width}x{height} maxval {maxval}, pixels at offset {}",
        header.data_offset
    );
    Ok(header)
}

/// Borrow exactly the pixel region described by `header`.
///
/// Bytes after the region are ignored.
pub(crate) fn pixel_region<'a>(data: &'a [u8], header: &PpmHeader) -> Result<&'a [u8], PpmError> {
    let needed = header.pixel_bytes().ok_or(PpmError::InvalidDimensions {
        width: header.width,
        height: header.height,
    })?;
    let available = data.get(header.data_offset..).unwrap_or(&[]);
    available
        .get(..needed)
        .ok_or(PpmError::TruncatedPixelData {
            needed,
            actual: available.len(),
        })
}
