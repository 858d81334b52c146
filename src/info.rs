use crate::error::PpmError;

/// Header fields of a P6 file, read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Always 255 for files this crate accepts.
    pub maxval: u32,
    /// Byte offset of the first pixel byte.
    pub data_offset: usize,
}

impl ImageInfo {
    /// Parse and validate the header only.
    ///
    /// Applies the same checks as decoding, except the pixel length check.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PpmError> {
        crate::ppm::probe_header(data)
    }

    /// Pixel bytes the file must carry after the header (`width * height * 3`).
    pub fn pixel_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}
