//! Archive packager.
//!
//! Encodes every buffer of a variant set and writes the results, in order,
//! into a single in-memory ZIP archive. Entry `i` is named `"{i}.{ext}"`.
//!
//! Every entry carries the DOS epoch (1980-01-01 00:00) as its modification
//! time, so packaging the same variants twice yields identical bytes.
//!
//! # Example
//!
//! ```rust,ignore
//! use tincture_io::archive::{package, package_with_options, Compression, PackageOptions};
//!
//! let zip = package(&variants, &OutputFormat::default(), ColorMode::Rgb)?;
//!
//! let opts = PackageOptions { compression: Compression::Stored, level: None };
//! let zip = package_with_options(&variants, &format, mode, &opts)?;
//! ```

use crate::{codec, IoResult, OutputFormat};
use std::io::{Cursor, Write};
use tincture_core::{ColorMode, PixelBuffer};
use tracing::{debug, trace};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Entry compression method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// Deflate (lossless).
    #[default]
    Deflated,
    /// No compression.
    Stored,
}

impl Compression {
    fn method(self) -> CompressionMethod {
        match self {
            Compression::Deflated => CompressionMethod::Deflated,
            Compression::Stored => CompressionMethod::Stored,
        }
    }
}

/// Packaging options.
#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    /// Entry compression method. Default: Deflated.
    pub compression: Compression,
    /// Compression level (Deflate: 0-9). `None` uses the encoder default.
    pub level: Option<i64>,
}

/// Archive entry name for position `index`.
///
/// ```rust
/// use tincture_io::{archive::entry_name, OutputFormat};
///
/// let fmt = OutputFormat::parse("PNG").unwrap();
/// assert_eq!(entry_name(7, &fmt), "7.png");
/// ```
pub fn entry_name(index: usize, format: &OutputFormat) -> String {
    format!("{}.{}", index, format.extension())
}

/// Packages variants with default options.
pub fn package(variants: &[PixelBuffer], format: &OutputFormat, mode: ColorMode) -> IoResult<Vec<u8>> {
    package_with_options(variants, format, mode, &PackageOptions::default())
}

/// Packages variants into a ZIP archive and returns its bytes.
///
/// # Errors
///
/// The first variant that fails to encode aborts the whole operation;
/// no partial archive is returned.
pub fn package_with_options(
    variants: &[PixelBuffer],
    format: &OutputFormat,
    mode: ColorMode,
    options: &PackageOptions,
) -> IoResult<Vec<u8>> {
    trace!(count = variants.len(), format = %format, mode = %mode, "archive::package");

    let file_options = SimpleFileOptions::default()
        .compression_method(options.compression.method())
        .compression_level(options.level)
        .last_modified_time(DateTime::default());

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (index, variant) in variants.iter().enumerate() {
        let encoded = codec::encode(variant, mode, format)?;
        writer.start_file(entry_name(index, format), file_options)?;
        writer.write_all(&encoded)?;
    }

    let bytes = writer.finish()?.into_inner();
    debug!(entries = variants.len(), bytes = bytes.len(), "Packaged archive");
    Ok(bytes)
}
