use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use photometa_core::cli::{load_tag_map, setup_logging};
use photometa_core::{BatchReport, BatchSummary, ImageResult, MetadataNormalizer};
use std::path::{Path, PathBuf};
use std::process;

/// CLI tool for summarizing photo metadata across a directory of tag dumps
#[derive(Parser, Debug)]
#[command(name = "photobatch")]
#[command(about = "Summarize location and date coverage for a directory of JSON tag dumps")]
#[command(version)]
struct Cli {
    /// Directory containing JSON tag dumps
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !cli.directory.is_dir() {
        eprintln!("Error: {} is not a directory", cli.directory.display());
        process::exit(1);
    }

    info!("Processing directory: {}", cli.directory.display());

    let dumps = match collect_tag_dumps(&cli.directory) {
        Ok(files) => files,
        Err(e) => {
            error!("Failed to read directory: {}", e);
            eprintln!("Error: Failed to read directory: {}", e);
            process::exit(1);
        }
    };

    if dumps.is_empty() {
        eprintln!("Error: No tag dumps (.json) found in directory");
        process::exit(1);
    }

    info!("Found {} tag dumps", dumps.len());

    let results: Vec<ImageResult> = dumps.iter().map(|path| analyze_dump(path)).collect();
    let summary = BatchSummary::from_results(&results);

    info!(
        "Analyzed {} of {} images ({} with location, {} with date)",
        summary.analyzed, summary.total, summary.with_location, summary.with_date
    );

    output_summary(&summary, cli.format);
}

fn analyze_dump(path: &Path) -> ImageResult {
    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match load_tag_map(path) {
        Ok(tags) => {
            info!("Processed: {}", path.display());
            ImageResult::analyzed(source, MetadataNormalizer::normalize_single(&tags))
        }
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            ImageResult::failed(source, e.to_string())
        }
    }
}

/// Collects `.json` files in `directory`, sorted by path
fn collect_tag_dumps(directory: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn output_summary(summary: &BatchSummary, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            print!("{}", BatchReport::new(summary));
        }
        OutputFormat::Json => match serde_json::to_string_pretty(summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize to JSON: {}", e);
                eprintln!("Error: Failed to serialize to JSON: {}", e);
                process::exit(1);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_collect_tag_dumps_with_extensions() {
        let temp_dir = TempDir::new().unwrap();

        File::create(temp_dir.path().join("b.json")).unwrap();
        File::create(temp_dir.path().join("a.JSON")).unwrap(); // uppercase
        File::create(temp_dir.path().join("c.txt")).unwrap();
        File::create(temp_dir.path().join("d")).unwrap();
        std::fs::create_dir(temp_dir.path().join("nested.json")).unwrap();

        let files = collect_tag_dumps(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0], temp_dir.path().join("a.JSON"));
        assert_eq!(files[1], temp_dir.path().join("b.json"));
    }

    #[test]
    fn test_analyze_dump() {
        let temp_dir = TempDir::new().unwrap();

        let good = temp_dir.path().join("good.json");
        std::fs::write(
            &good,
            r#"{"GPSLatitude": [40, 26, 46], "GPSLatitudeRef": "N",
                "GPSLongitude": 3.5, "DateTime": "2020:02:02 02:02:02"}"#,
        )
        .unwrap();

        let bad = temp_dir.path().join("bad.json");
        std::fs::write(&bad, "[]").unwrap();

        let results = vec![analyze_dump(&good), analyze_dump(&bad)];
        let summary = BatchSummary::from_results(&results);

        assert_eq!(summary.entries[0].source, "good.json");
        assert_eq!(summary.analyzed, 1);
        assert_eq!(summary.with_location, 1);
        assert_eq!(summary.with_date, 1);
        assert!(summary.entries[1]
            .error
            .as_deref()
            .is_some_and(|e| e.contains("JSON object")));
    }
}
