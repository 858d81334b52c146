use core::fmt;
use enough::StopReason;

/// Errors from PPM decoding and encoding.
///
/// Decoding yields the header and truncation kinds, encoding yields
/// [`InvalidDimensions`](Self::InvalidDimensions) and
/// [`WriteFailed`](Self::WriteFailed). Both can yield [`Io`](Self::Io) when
/// going through a file path.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PpmError {
    #[error("truncated header: need at least 14 bytes, got {len}")]
    TruncatedHeader { len: usize },

    #[error("not a P6 header (bad magic bytes)")]
    BadMagic,

    #[error("invalid width: {}", Field(.0))]
    BadWidth(Option<u32>),

    #[error("invalid height: {}", Field(.0))]
    BadHeight(Option<u32>),

    #[error("unsupported maxval: {} (only 255 is supported)", Field(.0))]
    BadMaxval(Option<u32>),

    #[error("expected whitespace after maxval at offset {offset}, found byte 0x{byte:02X}")]
    BadSeparator { offset: usize, byte: u8 },

    #[error("pixel data truncated: need {needed} bytes, got {actual}")]
    TruncatedPixelData { needed: usize, actual: usize },

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("comment must not contain line breaks")]
    InvalidComment,

    #[error("{kind} {value} exceeds limit {max}")]
    LimitExceeded {
        kind: crate::LimitKind,
        value: u64,
        max: u64,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[source] std::io::Error),

    #[cfg(feature = "std")]
    #[error("failed to write image: {0}")]
    WriteFailed(#[source] std::io::Error),
}

impl From<StopReason> for PpmError {
    fn from(r: StopReason) -> Self {
        PpmError::Cancelled(r)
    }
}

/// Renders a header field that may be missing.
struct Field<'a>(&'a Option<u32>);

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("missing"),
        }
    }
}
