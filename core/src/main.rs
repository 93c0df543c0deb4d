use clap::Parser;
use log::{error, info};
use photometa_core::cli::{load_tag_map, setup_logging, Cli, OutputFormat};
use photometa_core::{CanonicalMetadata, FormatOptions, MetadataNormalizer, TagMap, TextReport};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let primary = match load_tag_map(&cli.file) {
        Ok(tags) => tags,
        Err(e) => {
            error!("Failed to load {}: {}", cli.file.display(), e);
            eprintln!("Error: Failed to load {}: {}", cli.file.display(), e);
            process::exit(1);
        }
    };

    let secondary = match &cli.secondary {
        Some(path) => match load_tag_map(path) {
            Ok(tags) => {
                info!("Merging {} supplementary tags from {}", tags.len(), path.display());
                tags
            }
            Err(e) => {
                error!("Failed to load {}: {}", path.display(), e);
                eprintln!("Error: Failed to load {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => TagMap::new(),
    };

    let metadata = MetadataNormalizer::normalize(&primary, &secondary);

    let mut options = FormatOptions::default();
    if let Some(pattern) = cli.date_format {
        options = options.with_date_format(pattern);
    }

    output_metadata(&metadata, options, cli.all, cli.format);
}

fn output_metadata(
    metadata: &CanonicalMetadata,
    options: FormatOptions,
    show_all: bool,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Text => {
            let report = TextReport::new(metadata)
                .with_options(options)
                .show_all(show_all);
            print!("{}", report);
        }
        OutputFormat::Json => match serde_json::to_string_pretty(metadata) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize to JSON: {}", e);
                eprintln!("Error: Failed to serialize to JSON: {}", e);
                process::exit(1);
            }
        },
    }
}
