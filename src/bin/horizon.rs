//! Horizon chart command line tool.
//!
//! Usage:
//!     horizon <file> <reference> [--data-dir DIR] [--output PATH] [--format json|svg]
//!
//! Loads two tables, plots the relative difference of the first against the second
//! and writes the figure as JSON, or as SVG when built with the `svg` feature.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use hz_chart::prelude::*;
use hz_source::{CsvSource, DEFAULT_DATA_DIR};
use hz_transforms::ExtentMode;

#[derive(Parser)]
#[command(name = "horizon")]
#[command(author, version, about = "Render horizon charts of relative error between two tables", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Table whose deviation is plotted (e.g. simulated values)
    file: PathBuf,

    /// Reference table the deviation is relative to (e.g. observed values)
    reference: PathBuf,

    /// Directory both tables are read from
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Chart configuration as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of bands per sign
    #[arg(long)]
    bands: Option<usize>,

    /// Comma separated layer colors, positive layers first
    #[arg(long, value_delimiter = ',')]
    colors: Option<Vec<String>>,

    /// Extent policy: abs_max, max or span
    #[arg(long)]
    extent: Option<ExtentMode>,

    /// Distance between x ticks, in samples
    #[arg(long)]
    x_tick_step: Option<usize>,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Svg,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    let source = CsvSource::new().with_base_dir(&cli.data_dir);
    let data = source
        .load_difference::<f64>(&cli.file, &cli.reference)
        .with_context(|| {
            format!(
                "Failed to load {} against {}",
                cli.file.display(),
                cli.reference.display()
            )
        })?;

    let config = if config.x_tick_labels.is_empty() {
        HorizonConfig {
            x_tick_labels: data.index_labels.clone(),
            ..config
        }
    } else {
        config
    };

    let figure = Horizon::new(config.clone())
        .run(data.x.as_slice(), &data.y, &data.labels)
        .context("Invalid chart input")?;

    let rendered = match cli.format {
        Format::Json => {
            let renderer = if cli.pretty {
                JsonRenderer::pretty()
            } else {
                JsonRenderer::new()
            };
            renderer.render(&figure)?
        }
        Format::Svg => render_svg(&figure, config.dpi)?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), series = figure.len(), "figure written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Start from the config file (or defaults) and apply command line overrides.
fn load_config(cli: &Cli) -> Result<HorizonConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => HorizonConfig::default(),
    };

    match (cli.bands, &cli.colors) {
        (Some(bands), None) => {
            config.bands = bands;
            config.colors = ColorPalette::graded(bands);
        }
        (bands, Some(colors)) => {
            config.colors = ColorPalette::parse(colors.as_slice()).context("Invalid --colors")?;
            if let Some(bands) = bands {
                config.bands = bands;
            }
        }
        (None, None) => {}
    }
    if let Some(extent) = cli.extent {
        config.extent = extent;
    }
    if let Some(step) = cli.x_tick_step {
        config.x_tick_step = Some(step);
    }

    Ok(config)
}

#[cfg(feature = "svg")]
fn render_svg(figure: &Figure<f64>, dpi: u32) -> Result<String> {
    Ok(SvgRenderer::new().with_dpi(dpi).render(figure)?)
}

#[cfg(not(feature = "svg"))]
fn render_svg(_figure: &Figure<f64>, _dpi: u32) -> Result<String> {
    anyhow::bail!("SVG output requires the 'svg' feature. Use --format json instead.")
}
