use crate::types::{TagMap, TagValue};

use super::tags::IMPORTANT_FIELDS;

/// Selects the key-information fields present in `tags`
///
/// Output follows the fixed order of [`IMPORTANT_FIELDS`] no matter how the
/// map was built. Absent fields are left out.
///
/// # Example
///
/// ```
/// use photometa_core::{select_important_fields, TagMap};
///
/// let tags = TagMap::new()
///     .with("Orientation", 1.0)
///     .with("Make", "Canon")
///     .with("MakerNote", "opaque");
///
/// let keys: Vec<_> = select_important_fields(&tags).iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec!["Make", "Orientation"]);
/// ```
pub fn select_important_fields(tags: &TagMap) -> Vec<(&'static str, &TagValue)> {
    IMPORTANT_FIELDS
        .iter()
        .filter_map(|&field| tags.get(field).map(|value| (field, value)))
        .collect()
}
