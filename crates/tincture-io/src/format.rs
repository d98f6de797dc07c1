//! Output raster format selection.
//!
//! Formats are named the way a caller configures them (`"PNG"`, `"jpeg"`,
//! `"TIF"`), matched case-insensitively against the codec's extension table.
//! The lowercased name is kept verbatim as the archive entry extension.

use crate::{IoError, IoResult};
use image::ImageFormat;
use std::fmt;

/// A raster format variants are encoded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    format: ImageFormat,
    extension: String,
}

impl OutputFormat {
    /// Parses a format name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] if the codec does not know the name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tincture_io::OutputFormat;
    ///
    /// let fmt = OutputFormat::parse("PNG").unwrap();
    /// assert_eq!(fmt.extension(), "png");
    /// assert!(OutputFormat::parse("xyz").is_err());
    /// ```
    pub fn parse(name: &str) -> IoResult<Self> {
        let extension = name.trim().to_lowercase();
        if extension.is_empty() {
            return Err(IoError::UnsupportedFormat(name.to_string()));
        }
        let format = ImageFormat::from_extension(&extension)
            .ok_or_else(|| IoError::UnsupportedFormat(name.to_string()))?;
        Ok(Self { format, extension })
    }

    /// Codec format identifier.
    #[inline]
    pub fn image_format(&self) -> ImageFormat {
        self.format
    }

    /// Lowercased requested name, used as the archive entry extension.
    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            extension: "png".to_string(),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension.to_uppercase())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = IoError;

    fn from_str(s: &str) -> IoResult<Self> {
        Self::parse(s)
    }
}
