//! Resolved run settings.
//!
//! Raw flag / environment strings are validated once here and passed down
//! to each command as explicit values.

use anyhow::{Context, Result};
use tincture_core::ColorMode;
use tincture_io::OutputFormat;
use tincture_ops::DiversifyOptions;

/// Validated settings shared by all commands.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Debug logging enabled
    pub debug: bool,
    /// Print progress lines
    pub verbose: bool,
    /// Entry raster format
    pub format: OutputFormat,
    /// Variant color mode
    pub mode: ColorMode,
}

impl Settings {
    /// Validates format and mode names.
    pub fn from_args(debug: bool, verbose: bool, format: &str, mode: &str) -> Result<Self> {
        let format = OutputFormat::parse(format)
            .with_context(|| format!("Invalid output format '{}'", format))?;
        let mode = ColorMode::parse(mode).with_context(|| format!("Invalid color mode '{}'", mode))?;
        Ok(Self {
            debug,
            verbose,
            format,
            mode,
        })
    }

    /// Pipeline options for these settings.
    pub fn diversify_options(&self) -> DiversifyOptions {
        DiversifyOptions::new(self.format.clone(), self.mode)
    }
}

/// Debug switch parsing: only `1`, `True` and `true` turn it on.
pub fn parse_debug_flag(value: &str) -> std::result::Result<bool, String> {
    Ok(matches!(value, "1" | "True" | "true"))
}
