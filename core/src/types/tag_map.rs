use super::TagValue;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Raw tag mapping from tag name to value
///
/// Keys are kept sorted so iteration, formatting and serialization are
/// deterministic regardless of the order an EXIF reader produced them in.
///
/// # Example
///
/// ```
/// use photometa_core::{TagMap, TagValue};
///
/// let tags: TagMap = [
///     ("Model", TagValue::from("X100V")),
///     ("Make", TagValue::from("FUJIFILM")),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags.keys().collect::<Vec<_>>(), vec!["Make", "Model"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct TagMap(BTreeMap<String, TagValue>);

impl TagMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: adds a tag, replacing any existing value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a tag, returning the previous value if any
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<TagValue>,
    ) -> Option<TagValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates tags in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, TagValue> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Parses a JSON tag dump
    ///
    /// The dump must be a JSON object. `null` members are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or is not an object.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> crate::error::Result<Self> {
        use crate::error::PhotometaError;
        use serde_json::Value;

        match serde_json::from_str::<Value>(s)? {
            Value::Object(map) => Ok(map
                .into_iter()
                .filter_map(|(name, raw)| TagValue::from_json(raw).map(|value| (name, value)))
                .collect()),
            other => Err(PhotometaError::InvalidValue(format!(
                "tag dump must be a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

#[cfg(feature = "json")]
fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(feature = "json")]
impl<'de> serde::Deserialize<'de> for TagMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;

        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(name, value)| TagValue::from_json(value).map(|v| (name, v)))
            .collect())
    }
}

impl<K: Into<String>> FromIterator<(K, TagValue)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (K, TagValue)>>(iter: I) -> Self {
        TagMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>> Extend<(K, TagValue)> for TagMap {
    fn extend<I: IntoIterator<Item = (K, TagValue)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl IntoIterator for TagMap {
    type Item = (String, TagValue);
    type IntoIter = btree_map::IntoIter<String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagMap {
    type Item = (&'a String, &'a TagValue);
    type IntoIter = btree_map::Iter<'a, String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_replaces_existing() {
        let tags = TagMap::new().with("Make", "Canon").with("Make", "Nikon");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("Make"), Some(&TagValue::from("Nikon")));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_str() {
        let tags = TagMap::from_json_str(
            r#"{
                "Make": "Apple",
                "FNumber": {"numerator": 18, "denominator": 10},
                "GPSLatitude": [40, 26, 46],
                "Artist": null
            }"#,
        )
        .unwrap();

        assert_eq!(tags.len(), 3);
        assert!(!tags.contains_key("Artist"));
        assert!(matches!(tags.get("GPSLatitude"), Some(TagValue::Triple(_))));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_str_rejects_non_object() {
        let err = TagMap::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("an array"));

        assert!(TagMap::from_json_str("{not json").is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_deserialize_matches_from_json_str() {
        let text = r#"{"ISOSpeedRatings": 400, "Software": null}"#;
        let via_serde: TagMap = serde_json::from_str(text).unwrap();
        assert_eq!(via_serde, TagMap::from_json_str(text).unwrap());
    }
}
