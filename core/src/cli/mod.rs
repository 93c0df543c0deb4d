pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for photometa
#[derive(Parser, Debug)]
#[command(name = "photometa")]
#[command(about = "Photo metadata normalization tool")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON tag dump from an EXIF reader
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Supplementary JSON tag dump; its values override FILE
    #[arg(short, long, value_name = "FILE")]
    pub secondary: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// List every tag, not only the key information
    #[arg(short, long)]
    pub all: bool,

    /// strftime pattern for date fields
    #[arg(long, value_name = "PATTERN")]
    pub date_format: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Initializes `env_logger`
///
/// `RUST_LOG` takes precedence when set; otherwise the level is Debug when
/// `verbose` and Info when not.
pub fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();

    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(default_level(verbose));
    }

    builder.init();
}

fn default_level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Reads a JSON tag dump from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON object.
#[cfg(feature = "json")]
pub fn load_tag_map(path: &std::path::Path) -> crate::error::Result<crate::types::TagMap> {
    let text = std::fs::read_to_string(path)?;
    let tags = crate::types::TagMap::from_json_str(&text)?;
    log::debug!("Loaded {} tags from {}", tags.len(), path.display());
    Ok(tags)
}
