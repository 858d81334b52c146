use enough::Stop;

use crate::error::PpmError;
use crate::limits::Limits;
use crate::raster::Raster;

/// Configurable decode of an in-memory P6 file.
///
/// ```
/// use zenppm::{DecodeRequest, Limits, Unstoppable};
///
/// let data = b"P6\n1 1\n255\n\xff\x80\x00";
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let raster = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(raster.pixels(), &[0xff, 0x80, 0x00]);
/// # Ok::<(), zenppm::PpmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    strict_separator: bool,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            strict_separator: false,
        }
    }

    /// Reject headers exceeding these limits before allocating.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Require the byte after maxval to be whitespace.
    ///
    /// Off by default: any byte is accepted as the separator, as most
    /// readers do. When on, a non-whitespace byte fails with
    /// [`PpmError::BadSeparator`].
    pub fn with_strict_separator(mut self, strict: bool) -> Self {
        self.strict_separator = strict;
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<Raster, PpmError> {
        crate::ppm::decode(self.data, self.limits, self.strict_separator, &stop)
    }
}
