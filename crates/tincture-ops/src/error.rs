//! Error types for variant operations.

use thiserror::Error;

/// Error type for variant operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Error from the core data model (channel mismatch, bad mode, ...).
    #[error(transparent)]
    Core(#[from] tincture_core::Error),

    /// Codec or packaging failure.
    #[error(transparent)]
    Io(#[from] tincture_io::IoError),
}

/// Result type for variant operations.
pub type OpsResult<T> = Result<T, OpsError>;
