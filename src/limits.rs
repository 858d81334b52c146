use core::fmt;

use crate::error::PpmError;
use crate::ppm::PpmHeader;

/// Caller-supplied caps applied to a parsed header before any pixel
/// buffer is allocated.
///
/// They only tighten the format's own 8192x8192 bound. All fields default
/// to `None`.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded pixel buffer (`width * height * 3`).
    pub max_memory_bytes: Option<u64>,
}

/// Which [`Limits`] field a header exceeded.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitKind {
    Width,
    Height,
    Pixels,
    MemoryBytes,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Pixels => "pixel count",
            Self::MemoryBytes => "pixel buffer bytes",
        })
    }
}

impl Limits {
    /// First limit the header exceeds, in field order.
    pub(crate) fn check_header(&self, header: &PpmHeader) -> Result<(), PpmError> {
        let pixels = u64::from(header.width) * u64::from(header.height);
        let checks = [
            (LimitKind::Width, u64::from(header.width), self.max_width.map(u64::from)),
            (LimitKind::Height, u64::from(header.height), self.max_height.map(u64::from)),
            (LimitKind::Pixels, pixels, self.max_pixels),
            (LimitKind::MemoryBytes, pixels * 3, self.max_memory_bytes),
        ];
        match checks
            .into_iter()
            .find(|&(_, value, max)| max.is_some_and(|max| value > max))
        {
            Some((kind, value, Some(max))) => Err(PpmError::LimitExceeded { kind, value, max }),
            _ => Ok(()),
        }
    }
}
