//! # tincture-io
//!
//! Codec capability and archive packaging.
//!
//! - [`codec`] - decode encoded bytes, convert to RGB/CMYK/grayscale
//!   buffers, encode buffers back to raster bytes (via the `image` crate)
//! - [`archive`] - bundle an ordered variant set into one ZIP archive
//! - [`OutputFormat`] - the raster format entries are written in
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tincture_core::ColorMode;
//! use tincture_io::{archive, codec, OutputFormat};
//!
//! let image = codec::decode(&bytes)?;
//! let buffer = image.to_buffer(ColorMode::Rgb)?;
//! let zip = archive::package(&[buffer], &OutputFormat::parse("PNG")?, ColorMode::Rgb)?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write |
//! |--------|------|-------|
//! | PNG    | Yes  | Yes   |
//! | JPEG   | Yes  | Yes   |
//! | BMP    | Yes  | Yes   |
//! | GIF    | Yes  | Yes   |
//! | TIFF   | Yes  | Yes   |
//! | WebP   | Yes  | Yes (lossless) |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod format;
pub mod archive;
pub mod codec;

pub use archive::{package, package_with_options, Compression, PackageOptions};
pub use codec::{decode, encode, DecodedImage};
pub use error::{IoError, IoResult};
pub use format::OutputFormat;
