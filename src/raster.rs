use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::{AsPixels as _, ComponentBytes as _};

use crate::error::PpmError;
use crate::ppm::check_input;

/// An 8-bit RGB image: row-major, 3 bytes per pixel, no row padding.
///
/// Every `Raster` satisfies `1 <= width, height <= 8192` and
/// `pixels().len() == width * height * 3`; the constructors refuse anything
/// else. This is the buffer handed to and received from a renderer, with
/// [`stride`](Self::stride) bytes per row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Take ownership of a packed RGB buffer.
    ///
    /// Fails with [`PpmError::InvalidDimensions`] for dimensions outside
    /// `1..=8192`, or [`PpmError::BufferSizeMismatch`] if the buffer is not
    /// exactly `width * height * 3` bytes.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, PpmError> {
        check_input(&pixels, width, height)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster with every pixel set to `rgb`, e.g. a cleared render target.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, PpmError> {
        // Validate before allocating.
        if !(1..=crate::MAX_DIMENSION).contains(&width)
            || !(1..=crate::MAX_DIMENSION).contains(&height)
        {
            return Err(PpmError::InvalidDimensions { width, height });
        }
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        for px in pixels.chunks_exact_mut(3) {
            px.copy_from_slice(&rgb);
        }
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row (`width * 3`).
    pub fn stride(&self) -> usize {
        self.width as usize * 3
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable pixel access. The length cannot change through a slice, so
    /// the size invariant holds.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        let stride = self.stride();
        let start = (y as usize).checked_mul(stride)?;
        self.pixels.get(start..start.checked_add(stride)?)
    }

    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(self.stride())
    }

    /// Give up the raster, keeping the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Reinterpret the pixel data as typed RGB pixels.
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> &[rgb::RGB8] {
        self.pixels().as_pixels()
    }

    /// Copy typed RGB pixels into a new raster.
    #[cfg(feature = "rgb")]
    pub fn from_rgb(width: u32, height: u32, pixels: &[rgb::RGB8]) -> Result<Self, PpmError> {
        Self::new(width, height, pixels.as_bytes().to_vec())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGB pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB8> {
        imgref::ImgRef::new(
            self.as_rgb(),
            self.width as usize,
            self.height as usize,
        )
    }

    /// Pack an image (of any stride) into a new raster.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, rgb::RGB8>) -> Result<Self, PpmError> {
        let width = u32::try_from(img.width()).unwrap_or(u32::MAX);
        let height = u32::try_from(img.height()).unwrap_or(u32::MAX);
        if !(1..=crate::MAX_DIMENSION).contains(&width)
            || !(1..=crate::MAX_DIMENSION).contains(&height)
        {
            return Err(PpmError::InvalidDimensions { width, height });
        }
        let mut pixels = Vec::with_capacity(img.width() * img.height() * 3);
        for row in img.rows() {
            pixels.extend_from_slice(row.as_bytes());
        }
        Self::new(width, height, pixels)
    }
}
