//! Bytes in, archive bytes out.
//!
//! [`diversify_bytes`] is the whole service call: decode the uploaded image,
//! diversify it and package the result. All configuration arrives through
//! [`DiversifyOptions`]; nothing is read from the process environment here.

use crate::diversify::diversify;
use crate::OpsResult;
use tincture_core::ColorMode;
use tincture_io::{archive, codec, OutputFormat, PackageOptions};
use tracing::{info, trace};

/// Per-call configuration.
#[derive(Debug, Clone, Default)]
pub struct DiversifyOptions {
    /// Raster format of every archive entry. Default: PNG.
    pub format: OutputFormat,
    /// Channel layout variants are generated in. Default: RGB.
    pub mode: ColorMode,
    /// Archive compression settings.
    pub package: PackageOptions,
}

impl DiversifyOptions {
    /// Options for `format` and `mode` with default packaging.
    pub fn new(format: OutputFormat, mode: ColorMode) -> Self {
        Self {
            format,
            mode,
            package: PackageOptions::default(),
        }
    }
}

/// Decodes `raw`, diversifies it and returns the packaged archive.
///
/// # Errors
///
/// - decode failure if `raw` is not an image
/// - encode / archive failure if any variant cannot be written; no partial
///   archive is produced
pub fn diversify_bytes(raw: &[u8], options: &DiversifyOptions) -> OpsResult<Vec<u8>> {
    trace!(bytes = raw.len(), format = %options.format, mode = %options.mode, "diversify_bytes");

    let image = codec::decode(raw)?;
    let set = diversify(&image, options.mode)?;
    let archive = archive::package_with_options(&set, &options.format, set.mode(), &options.package)?;

    info!(
        width = image.width(),
        height = image.height(),
        mode = %options.mode,
        entries = set.len(),
        archive_bytes = archive.len(),
        "Diversified image into archive"
    );
    Ok(archive)
}
