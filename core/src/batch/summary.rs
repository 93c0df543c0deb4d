use crate::api::CanonicalMetadata;

/// Normalization outcome for one image in a batch
#[derive(Debug, Clone)]
pub struct ImageResult {
    /// Image identity supplied by the image source (file name, URI, ...)
    pub source: String,

    /// Normalized metadata, or why the image could not be analyzed
    pub outcome: std::result::Result<CanonicalMetadata, String>,
}

impl ImageResult {
    /// Creates a successful result
    pub fn analyzed(source: impl Into<String>, metadata: CanonicalMetadata) -> Self {
        Self {
            source: source.into(),
            outcome: Ok(metadata),
        }
    }

    /// Creates a failed result
    pub fn failed(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            outcome: Err(message.into()),
        }
    }
}

/// Per-image line of a batch summary
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct BatchEntry {
    pub source: String,
    pub camera: Option<String>,
    pub has_location: bool,
    pub has_date: bool,
    pub error: Option<String>,
}

impl BatchEntry {
    fn from_result(result: &ImageResult) -> Self {
        match &result.outcome {
            Ok(metadata) => Self {
                source: result.source.clone(),
                camera: metadata.camera(),
                has_location: metadata.has_location(),
                has_date: metadata.has_date(),
                error: None,
            },
            Err(message) => Self {
                source: result.source.clone(),
                camera: None,
                has_location: false,
                has_date: false,
                error: Some(message.clone()),
            },
        }
    }

    /// Returns whether the image was analyzed successfully
    pub fn is_analyzed(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate statistics over a batch of images
///
/// # Example
///
/// ```
/// use photometa_core::{BatchSummary, ImageResult, MetadataNormalizer, TagMap};
///
/// let tags = TagMap::new()
///     .with("GPSLatitude", 51.5)
///     .with("GPSLongitude", -0.12);
///
/// let results = vec![
///     ImageResult::analyzed("a.jpg", MetadataNormalizer::normalize_single(&tags)),
///     ImageResult::failed("b.jpg", "unreadable"),
/// ];
///
/// let summary = BatchSummary::from_results(&results);
/// assert_eq!(summary.total, 2);
/// assert_eq!(summary.analyzed, 1);
/// assert_eq!(summary.with_location, 1);
/// assert_eq!(summary.with_date, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct BatchSummary {
    pub total: usize,
    pub analyzed: usize,
    pub with_location: usize,
    pub with_date: usize,
    pub entries: Vec<BatchEntry>,
}

impl BatchSummary {
    /// Builds a summary, keeping entries in input order
    pub fn from_results(results: &[ImageResult]) -> Self {
        let entries: Vec<BatchEntry> = results.iter().map(BatchEntry::from_result).collect();

        Self {
            total: entries.len(),
            analyzed: entries.iter().filter(|e| e.is_analyzed()).count(),
            with_location: entries.iter().filter(|e| e.has_location).count(),
            with_date: entries.iter().filter(|e| e.has_date).count(),
            entries,
        }
    }

    /// Returns the number of images that failed analysis
    pub fn failed(&self) -> usize {
        self.total - self.analyzed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MetadataNormalizer;
    use crate::types::TagMap;

    fn normalized(tags: TagMap) -> CanonicalMetadata {
        MetadataNormalizer::normalize_single(&tags)
    }

    #[test]
    fn test_empty_batch() {
        let summary = BatchSummary::from_results(&[]);
        assert_eq!(summary, BatchSummary::default());
        assert_eq!(summary.failed(), 0);
    }

    #[test]
    fn test_counts() {
        let results = vec![
            ImageResult::analyzed(
                "full.jpg",
                normalized(
                    TagMap::new()
                        .with("Make", "Sony")
                        .with("Model", "Alpha 7 IV")
                        .with("DateTimeOriginal", "2022:05:01 07:30:00")
                        .with("GPSLatitude", 35.0)
                        .with("GPSLongitude", 139.0),
                ),
            ),
            ImageResult::analyzed(
                "dated.jpg",
                normalized(TagMap::new().with("DateTime", "2021:01:01 00:00:00")),
            ),
            ImageResult::analyzed("bare.jpg", normalized(TagMap::new())),
            ImageResult::failed("broken.jpg", "not a JSON object"),
        ];

        let summary = BatchSummary::from_results(&results);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.analyzed, 3);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.with_location, 1);
        assert_eq!(summary.with_date, 2);

        assert_eq!(summary.entries[0].camera.as_deref(), Some("Sony Alpha 7 IV"));
        assert_eq!(summary.entries[2].camera, None);
        assert_eq!(
            summary.entries[3].error.as_deref(),
            Some("not a JSON object")
        );
        assert!(!summary.entries[3].is_analyzed());
    }
}
