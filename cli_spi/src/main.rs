use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use lib_spi332::color::{save_preview, upscale};
use lib_spi332::constants::{ARRAY_NAME, DEFAULT_HEIGHT, DEFAULT_WIDTH, VALUES_PER_LINE};
use lib_spi332::{convert_with, ConversionConfig, ResizeFilter};
use log::{info, LevelFilter};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spi332")]
#[command(about = "Convert an image to an RGB-332 C array for SPI displays")]
#[command(version)]
struct Cli {
    /// Image to convert (PNG, JPEG, BMP, ...)
    image: PathBuf,

    /// Target width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Target height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Hex values per output line
    #[arg(long, default_value_t = VALUES_PER_LINE)]
    per_line: usize,

    /// Name of the emitted array
    #[arg(long, default_value = ARRAY_NAME)]
    name: String,

    /// Resampling filter used for the resize
    #[arg(long, value_enum, default_value_t = Filter::CatmullRom)]
    filter: Filter,

    /// Write the array to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save a PNG rebuilt from the quantized bytes
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Enlargement factor for the preview
    #[arg(long, default_value = "8", value_parser = clap::value_parser!(u32).range(1..))]
    preview_scale: u32,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Filter> for ResizeFilter {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => ResizeFilter::Nearest,
            Filter::Triangle => ResizeFilter::Triangle,
            Filter::CatmullRom => ResizeFilter::CatmullRom,
            Filter::Gaussian => ResizeFilter::Gaussian,
            Filter::Lanczos3 => ResizeFilter::Lanczos3,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    lib_spi332::init_logging(match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    });

    run(cli, &mut io::stdout().lock())
}

/// Converts the image and writes the array to `out` or `--output`.
///
/// Nothing is written unless every requested output can be produced.
fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = ConversionConfig::default()
        .with_dimensions(cli.width, cli.height)
        .with_values_per_line(cli.per_line)
        .with_array_name(cli.name)
        .with_filter(cli.filter.into());

    let conversion = convert_with(&cli.image, &config)
        .with_context(|| format!("Failed to convert {:?}", cli.image))?;
    let literal = conversion.to_literal(&config);

    if let Some(path) = &cli.preview {
        let preview = conversion
            .to_preview()
            .context("Failed to rebuild preview")?;
        let preview = upscale(&preview, cli.preview_scale).context("Failed to scale preview")?;
        save_preview(&preview, path)
            .with_context(|| format!("Failed to save preview: {:?}", path))?;
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", literal))
                .with_context(|| format!("Failed to write file: {:?}", path))?;
            info!("Array written to {:?}", path);
        }
        None => writeln!(out, "{}", literal).context("Failed to write array")?,
    }

    Ok(())
}
