use crate::api::CanonicalMetadata;
use crate::batch::BatchSummary;
use crate::extraction::format_timestamp;
use crate::types::FormatOptions;
use std::fmt;

/// Text report formatter for canonical metadata
///
/// Shows the key information, the derived location and the photo date.
/// Suitable for sharing as a plain-text summary.
pub struct TextReport<'a> {
    metadata: &'a CanonicalMetadata,
    options: FormatOptions,
    show_all: bool,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report with default formatting
    pub fn new(metadata: &'a CanonicalMetadata) -> Self {
        Self {
            metadata,
            options: FormatOptions::default(),
            show_all: false,
        }
    }

    /// Builder: Set formatting options
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder: Append every tag after the key information
    pub fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image Metadata")?;
        writeln!(f, "==============")?;
        writeln!(f)?;

        writeln!(f, "Key Information")?;
        writeln!(f, "---------------")?;
        let fields = self.metadata.formatted_important_fields(&self.options);
        if fields.is_empty() {
            writeln!(f, "No key metadata found")?;
        }
        for (key, value) in &fields {
            writeln!(f, "{}: {}", key, value)?;
        }
        writeln!(f)?;

        writeln!(f, "Location Data")?;
        writeln!(f, "-------------")?;
        match &self.metadata.location {
            Some(location) => {
                let precision = self.options.coordinate_precision;
                writeln!(f, "Latitude:  {:.*}", precision, location.latitude)?;
                writeln!(f, "Longitude: {:.*}", precision, location.longitude)?;
            }
            None => writeln!(f, "No location data found in this image")?,
        }
        writeln!(f)?;

        writeln!(f, "Photo Date")?;
        writeln!(f, "----------")?;
        match &self.metadata.photo_date {
            Some(date) => writeln!(f, "{}", format_timestamp(date, &self.options))?,
            None => writeln!(f, "No date found in this image")?,
        }

        if self.show_all {
            writeln!(f)?;
            writeln!(f, "All Tags ({})", self.metadata.tags.len())?;
            writeln!(f, "--------")?;
            for (key, value) in self.metadata.formatted_fields(&self.options) {
                writeln!(f, "{}: {}", key, value)?;
            }
        }

        Ok(())
    }
}

/// Text report for a batch summary
pub struct BatchReport<'a> {
    summary: &'a BatchSummary,
}

impl<'a> BatchReport<'a> {
    /// Creates a new batch report
    pub fn new(summary: &'a BatchSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for BatchReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Batch Analysis Results")?;
        writeln!(f, "======================")?;
        writeln!(f, "Processed {} photos", self.summary.total)?;
        writeln!(f)?;
        writeln!(f, "With Location:         {}", self.summary.with_location)?;
        writeln!(f, "With Date:             {}", self.summary.with_date)?;
        writeln!(f, "Successfully Analyzed: {}", self.summary.analyzed)?;
        writeln!(f)?;

        for entry in &self.summary.entries {
            writeln!(f, "{}", entry.source)?;
            match &entry.error {
                Some(error) => writeln!(f, "  Error: {}", error)?,
                None => {
                    writeln!(
                        f,
                        "  Camera:   {}",
                        entry.camera.as_deref().unwrap_or("unknown")
                    )?;
                    writeln!(f, "  Location: {}", yes_no(entry.has_location))?;
                    writeln!(f, "  Date:     {}", yes_no(entry.has_date))?;
                }
            }
        }

        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MetadataNormalizer;
    use crate::batch::ImageResult;
    use crate::types::{TagMap, TagValue};

    fn located_metadata() -> CanonicalMetadata {
        MetadataNormalizer::normalize_single(
            &TagMap::new()
                .with("Make", "Canon")
                .with("FNumber", 2.8)
                .with("DateTimeOriginal", "2023:07:04 10:15:30")
                .with("GPSLatitude", TagValue::triple(40.0, 26.0, 46.0))
                .with("GPSLatitudeRef", "N")
                .with("GPSLongitude", TagValue::triple(79.0, 58.0, 56.0))
                .with("GPSLongitudeRef", "W")
                .with("Flash", 16.0),
        )
    }

    #[test]
    fn test_text_report_format() {
        let metadata = located_metadata();
        let output = format!("{}", TextReport::new(&metadata));

        assert!(output.contains("Image Metadata"));
        assert!(output.contains("Make: Canon"));
        assert!(output.contains("FNumber: f/2.8"));
        assert!(output.contains("DateTimeOriginal: 2023-07-04 10:15:30"));
        assert!(output.contains("GPSLatitude: 40° 26' 46\""));
        assert!(output.contains("Latitude:  40.446111"));
        assert!(output.contains("Longitude: -79.982222"));
        assert!(!output.contains("Flash"));
    }

    #[test]
    fn test_text_report_show_all_and_precision() {
        let metadata = located_metadata();
        let options = FormatOptions::default().with_coordinate_precision(2);
        let output = format!(
            "{}",
            TextReport::new(&metadata).with_options(options).show_all(true)
        );

        assert!(output.contains("Latitude:  40.45"));
        assert!(output.contains("All Tags (8)"));
        assert!(output.contains("Flash: 16"));
    }

    #[test]
    fn test_text_report_without_location() {
        let metadata = MetadataNormalizer::normalize_single(&TagMap::new());
        let output = format!("{}", TextReport::new(&metadata));

        assert!(output.contains("No key metadata found"));
        assert!(output.contains("No location data found in this image"));
        assert!(output.contains("No date found in this image"));
    }

    #[test]
    fn test_batch_report_format() {
        let results = vec![
            ImageResult::analyzed("a.json", located_metadata()),
            ImageResult::failed("b.json", "IO error: denied"),
        ];
        let summary = BatchSummary::from_results(&results);
        let output = format!("{}", BatchReport::new(&summary));

        assert!(output.contains("Processed 2 photos"));
        assert!(output.contains("With Location:         1"));
        assert!(output.contains("Successfully Analyzed: 1"));
        assert!(output.contains("  Camera:   Canon"));
        assert!(output.contains("  Error: IO error: denied"));
    }
}
