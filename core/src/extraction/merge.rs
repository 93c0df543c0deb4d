use crate::types::TagMap;

/// Merges tags from the primary extraction with a supplementary source
///
/// The result holds every key from both maps. When a key is present in
/// both, the `secondary` value wins: supplementary metadata (for example
/// tags embedded by a platform picker) enriches and overrides what the
/// primary reader found. Neither input is modified.
///
/// # Example
///
/// ```
/// use photometa_core::{merge_tags, TagMap};
///
/// let primary = TagMap::new().with("Make", "Canon").with("FNumber", 2.8);
/// let secondary = TagMap::new().with("FNumber", 4.0);
///
/// let merged = merge_tags(&primary, &secondary);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged.get("FNumber"), secondary.get("FNumber"));
/// ```
pub fn merge_tags(primary: &TagMap, secondary: &TagMap) -> TagMap {
    let mut merged = primary.clone();
    merged.extend(
        secondary
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );

    log::trace!(
        "Merged {} primary and {} secondary tags into {}",
        primary.len(),
        secondary.len(),
        merged.len()
    );

    merged
}
