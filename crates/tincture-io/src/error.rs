//! Error types for codec and archive operations.

use std::io;
use thiserror::Error;

/// Codec / packaging error.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error from the core data model.
    #[error(transparent)]
    Core(#[from] tincture_core::Error),

    /// Requested raster format is unknown.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Input bytes are not a decodable image.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Raster encoder rejected a buffer/format combination.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Archive writer failed.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl IoError {
    /// Returns `true` for failures while producing output (raster or archive).
    #[inline]
    pub fn is_encode_error(&self) -> bool {
        matches!(self, Self::EncodeError(_) | Self::Archive(_))
    }
}

/// Result type for codec and packaging operations.
pub type IoResult<T> = Result<T, IoError>;
