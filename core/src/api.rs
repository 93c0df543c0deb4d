use crate::extraction::tags::{get_string_value, MAKE, MODEL};
use crate::extraction::{
    extract_location, format_value_with, merge_tags, select_best_date, select_important_fields,
};
use crate::types::{FormatOptions, GeoPoint, TagMap, TagValue};
use chrono::NaiveDateTime;

/// Main entry point for photo metadata normalization
///
/// Merges the tag sources for one image and derives the location and photo
/// date. Normalization is pure and cannot fail: malformed GPS or date tags
/// simply leave the derived fields empty.
///
/// # Example
///
/// ```
/// use photometa_core::{MetadataNormalizer, Rational, TagMap, TagValue};
///
/// // Tags from the EXIF reader
/// let primary = TagMap::new()
///     .with("Make", "Canon")
///     .with("DateTimeOriginal", "2023:07:04 10:15:30")
///     .with("GPSLatitude", TagValue::triple(40.0, 26.0, 46.0))
///     .with("GPSLatitudeRef", "N")
///     .with("GPSLongitude", TagValue::triple(79.0, 58.0, 56.0))
///     .with("GPSLongitudeRef", "W");
///
/// // Supplementary tags from the image picker
/// let secondary = TagMap::new()
///     .with("Model", "EOS R5")
///     .with("FNumber", Rational::new(28, 10));
///
/// let metadata = MetadataNormalizer::normalize(&primary, &secondary);
///
/// assert_eq!(metadata.camera().as_deref(), Some("Canon EOS R5"));
/// assert_eq!(metadata.location.unwrap().to_string(), "40.446111, -79.982222");
/// assert_eq!(metadata.photo_date.unwrap().to_string(), "2023-07-04 10:15:30");
/// ```
pub struct MetadataNormalizer;

impl MetadataNormalizer {
    /// Normalizes tags from a primary reader and a supplementary source
    ///
    /// Supplementary values override primary ones.
    pub fn normalize(primary: &TagMap, secondary: &TagMap) -> CanonicalMetadata {
        Self::from_merged(merge_tags(primary, secondary))
    }

    /// Normalizes tags from a single source
    pub fn normalize_single(tags: &TagMap) -> CanonicalMetadata {
        Self::from_merged(tags.clone())
    }

    fn from_merged(tags: TagMap) -> CanonicalMetadata {
        let location = extract_location(&tags);
        let photo_date = select_best_date(&tags);

        log::debug!(
            "Normalized {} tags (location: {}, date: {})",
            tags.len(),
            location.is_some(),
            photo_date.is_some()
        );

        CanonicalMetadata {
            tags,
            location,
            photo_date,
        }
    }
}

/// Canonical metadata for one image
///
/// Owned by the caller; nothing here is shared with other invocations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct CanonicalMetadata {
    /// Merged raw tags
    pub tags: TagMap,

    /// Location derived from GPS tags
    pub location: Option<GeoPoint>,

    /// Best available photo date
    pub photo_date: Option<NaiveDateTime>,
}

impl CanonicalMetadata {
    /// Returns whether a location was derived
    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    /// Returns whether a photo date was derived
    pub fn has_date(&self) -> bool {
        self.photo_date.is_some()
    }

    /// Returns the camera label, `Make` and `Model` joined by a space
    ///
    /// Either part alone is used when the other is missing.
    pub fn camera(&self) -> Option<String> {
        match (
            get_string_value(&self.tags, MAKE),
            get_string_value(&self.tags, MODEL),
        ) {
            (Some(make), Some(model)) => Some(format!("{} {}", make, model)),
            (Some(make), None) => Some(make),
            (None, Some(model)) => Some(model),
            (None, None) => None,
        }
    }

    /// Returns the key-information fields in display order
    pub fn important_fields(&self) -> Vec<(&'static str, &TagValue)> {
        select_important_fields(&self.tags)
    }

    /// Returns the key-information fields rendered for display
    pub fn formatted_important_fields(
        &self,
        options: &FormatOptions,
    ) -> Vec<(&'static str, String)> {
        self.important_fields()
            .into_iter()
            .map(|(key, value)| (key, format_value_with(key, Some(value), options)))
            .collect()
    }

    /// Returns every tag rendered for display, in key order
    pub fn formatted_fields(&self, options: &FormatOptions) -> Vec<(&str, String)> {
        self.tags
            .iter()
            .map(|(key, value)| (key.as_str(), format_value_with(key, Some(value), options)))
            .collect()
    }
}
