//! Diversify command: image file in, variant archive out.

use super::{default_output_path, format_size, read_input, write_output};
use crate::config::Settings;
use crate::DiversifyArgs;
use anyhow::{Context, Result};
use tincture_ops::diversify_bytes;
use tracing::{info, trace};

/// Runs the diversify command.
pub fn run(args: DiversifyArgs, settings: &Settings) -> Result<()> {
    trace!(input = %args.input.display(), "diversify::run");

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input));

    if settings.verbose {
        println!(
            "Diversifying {} ({} mode, {} entries)",
            args.input.display(),
            settings.mode,
            settings.format
        );
    }

    let raw = read_input(&args.input)?;
    let archive = diversify_bytes(&raw, &settings.diversify_options())
        .with_context(|| format!("Failed to diversify: {}", args.input.display()))?;
    write_output(&output, &archive)?;

    info!(output = %output.display(), bytes = archive.len(), "Wrote archive");
    if settings.verbose {
        println!(
            "Saved {} ({})",
            output.display(),
            format_size(archive.len() as u64)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::fs::File;

    fn write_png(path: &std::path::Path) {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([40, 80, 120])))
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn test_run_writes_archive() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("swatch.png");
        write_png(&input);

        let settings = Settings::from_args(false, false, "PNG", "rgb").unwrap();
        run(
            DiversifyArgs {
                input: input.clone(),
                output: None,
            },
            &settings,
        )
        .unwrap();

        let archive = zip::ZipArchive::new(File::open(dir.path().join("swatch_variants.zip")).unwrap())
            .unwrap();
        assert_eq!(archive.len(), 50);
    }

    #[test]
    fn test_run_cmyk_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("swatch.png");
        let output = dir.path().join("out.zip");
        write_png(&input);

        let settings = Settings::from_args(false, false, "bmp", "cmyk").unwrap();
        run(
            DiversifyArgs {
                input,
                output: Some(output.clone()),
            },
            &settings,
        )
        .unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
        assert_eq!(archive.len(), 96);
        assert_eq!(archive.by_index(95).unwrap().name(), "95.bmp");
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_args(false, false, "PNG", "rgb").unwrap();
        let err = run(
            DiversifyArgs {
                input: dir.path().join("missing.png"),
                output: None,
            },
            &settings,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
