use alloc::borrow::Cow;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::PpmError;
use crate::ppm::DEFAULT_COMMENT;
use crate::raster::Raster;

/// P6 encode configuration.
///
/// By default a single `# zenppm` comment line follows the magic.
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    comment: Option<Cow<'a, str>>,
}

impl Default for EncodeRequest<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self {
            comment: Some(Cow::Borrowed(DEFAULT_COMMENT)),
        }
    }

    /// Replace the comment tag. Must fit on one line.
    pub fn with_comment(mut self, comment: impl Into<Cow<'a, str>>) -> Result<Self, PpmError> {
        let comment = comment.into();
        if comment.contains(['\r', '\n']) {
            return Err(PpmError::InvalidComment);
        }
        self.comment = Some(comment);
        Ok(self)
    }

    /// Write no comment line at all.
    pub fn without_comment(mut self) -> Self {
        self.comment = None;
        self
    }

    pub(crate) fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Encode a raster to a complete P6 file image.
    pub fn encode(&self, raster: &Raster, stop: impl Stop) -> Result<Vec<u8>, PpmError> {
        self.encode_rgb(raster.pixels(), raster.width(), raster.height(), stop)
    }

    /// Encode a packed RGB buffer of `width * height * 3` bytes.
    pub fn encode_rgb(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, PpmError> {
        log::debug!("encoding P6 {width}x{height}");
        crate::ppm::encode(pixels, width, height, self.comment(), &stop)
    }
}
