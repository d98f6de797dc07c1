//! tincture - color-channel variant generator
//!
//! Reads an image, produces every inversion / channel-order variant of it and
//! writes them as one ZIP archive. Stands in locally for the upload service,
//! which reads the same `DEBUG` and `IMAGE_FORMAT` environment variables.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::Settings;

#[derive(Parser)]
#[command(name = "tincture")]
#[command(author, version, about = "Color-channel variant generator")]
#[command(long_about = "
Generates every channel inversion / reordering of an image and packages the
results into a single ZIP archive (50 entries in RGB mode, 96 in CMYK mode).

Examples:
  tincture diversify photo.jpg -o photo.zip          # 50 PNG entries
  tincture diversify photo.jpg --mode cmyk           # 96 entries -> photo_variants.zip
  tincture diversify photo.jpg -f JPEG -o out.zip    # entries named 0.jpeg ...
  tincture plan --mode cmyk                          # list what each entry is
  IMAGE_FORMAT=BMP DEBUG=1 tincture diversify in.png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Debug logging. From the environment only `1`, `True` and `true` enable it
    #[arg(
        long,
        env = "DEBUG",
        global = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = config::parse_debug_flag
    )]
    debug: bool,

    /// Raster format of archive entries (PNG, JPEG, BMP, GIF, TIFF, WEBP)
    #[arg(short, long, env = "IMAGE_FORMAT", default_value = "PNG", global = true)]
    format: String,

    /// Color mode: rgb or cmyk
    #[arg(short, long, default_value = "rgb", global = true)]
    mode: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the variant archive for an image
    #[command(visible_alias = "d")]
    Diversify(DiversifyArgs),

    /// Describe every archive entry without reading an image
    #[command(visible_alias = "p")]
    Plan(PlanArgs),
}

/// Arguments for the `diversify` command.
#[derive(Args)]
struct DiversifyArgs {
    /// Input image (any decodable format)
    input: PathBuf,

    /// Output archive [default: <input stem>_variants.zip next to the input]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Arguments for the `plan` command.
#[derive(Args)]
struct PlanArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn init_logging(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_args(cli.debug, cli.verbose, &cli.format, &cli.mode)?;
    init_logging(settings.debug);
    tracing::debug!(?settings, "Resolved settings");

    match cli.command {
        Commands::Diversify(args) => commands::diversify::run(args, &settings),
        Commands::Plan(args) => commands::plan::run(args, &settings),
    }
}
