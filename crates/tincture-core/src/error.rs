//! Error types for tincture-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the data model itself:
//! - Buffer construction (length / dimension checks)
//! - Channel count mismatches between a buffer and a color mode
//! - Parsing of color modes and channel orders supplied by callers
//!
//! # Usage
//!
//! ```rust
//! use tincture_core::{ColorMode, Error};
//!
//! let err = ColorMode::parse("hsv").unwrap_err();
//! assert!(matches!(err, Error::UnsupportedMode(_)));
//! ```
//!
//! # Used By
//!
//! - `tincture-io` - wrapped in `IoError::Core`
//! - `tincture-ops` - wrapped in `OpsError::Core`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or describing pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Channel count mismatch between a buffer and what the caller expects.
    ///
    /// Returned, for example, when an RGB buffer is handed to the CMYK
    /// enumerator.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected channel count
        expected: usize,
        /// Actual channel count
        got: usize,
    },

    /// Invalid buffer dimensions.
    ///
    /// Returned when the sample vector length does not equal
    /// `width * height * channels`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// A color mode outside `{RGB, CMYK}` was requested.
    #[error("unsupported color mode: {0}")]
    UnsupportedMode(String),

    /// A channel order string is not a permutation of the mode's chromatic labels.
    #[error("invalid channel order: {0}")]
    InvalidChannelOrder(String),
}

impl Error {
    /// Creates an [`Error::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(expected: usize, got: usize) -> Self {
        Self::ChannelMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_mismatch() {
        let err = Error::channel_mismatch(4, 3);
        let msg = err.to_string();
        assert!(msg.contains("expected 4"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(2, 2, "expected 12 samples, got 11");
        assert!(err.to_string().contains("2x2"));
        assert!(err.to_string().contains("got 11"));
    }

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            Error::UnsupportedMode("hsv".into()).to_string(),
            "unsupported color mode: hsv"
        );
        assert_eq!(
            Error::InvalidChannelOrder("rrg".into()).to_string(),
            "invalid channel order: rrg"
        );
    }
}
