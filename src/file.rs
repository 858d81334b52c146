//! Path-based read and write (requires `std`).
//!
//! Files are owned handles; they are closed on every return path,
//! including header validation failures.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use enough::Stop;

use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::PpmError;
use crate::raster::Raster;

/// Rows written between cancellation checks.
const ROWS_PER_STOP_CHECK: usize = 64;

/// Read and decode a P6 file.
///
/// Open and read failures are [`PpmError::Io`]; everything else is the
/// same classification as [`DecodeRequest::decode`].
pub fn read_ppm(path: impl AsRef<Path>, stop: impl Stop) -> Result<Raster, PpmError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(PpmError::Io)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data).map_err(PpmError::Io)?;
    drop(file);
    log::debug!("read {} bytes from {}", data.len(), path.display());
    DecodeRequest::new(&data).decode(stop)
}

/// Encode `raster` with the default comment and write it to `path`.
pub fn write_ppm(path: impl AsRef<Path>, raster: &Raster, stop: impl Stop) -> Result<(), PpmError> {
    EncodeRequest::new().write_to_path(path, raster, stop)
}

impl EncodeRequest<'_> {
    /// Stream the encoded raster to a new file at `path`.
    ///
    /// Failure to create the file is [`PpmError::Io`]; a failed write or
    /// flush is [`PpmError::WriteFailed`]. A failed write may leave a
    /// partial file behind.
    pub fn write_to_path(
        &self,
        path: impl AsRef<Path>,
        raster: &Raster,
        stop: impl Stop,
    ) -> Result<(), PpmError> {
        let path = path.as_ref();
        crate::ppm::check_input(raster.pixels(), raster.width(), raster.height())?;
        stop.check()?;

        let file = File::create(path).map_err(PpmError::Io)?;
        let mut out = BufWriter::new(file);

        let header = crate::ppm::header_bytes(raster.width(), raster.height(), self.comment());
        out.write_all(&header).map_err(PpmError::WriteFailed)?;
        for (y, row) in raster.rows().enumerate() {
            if y % ROWS_PER_STOP_CHECK == 0 {
                stop.check()?;
            }
            out.write_all(row).map_err(PpmError::WriteFailed)?;
        }
        out.flush().map_err(PpmError::WriteFailed)?;

        log::debug!(
            "wrote P6 {}x{} to {}",
            raster.width(),
            raster.height(),
            path.display()
        );
        Ok(())
    }
}
