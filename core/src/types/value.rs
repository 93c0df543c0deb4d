use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// EXIF rational number (numerator / denominator)
///
/// A zero denominator is representable but has no numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    /// Creates a new Rational
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numeric value, or `None` when the denominator is zero
    pub fn to_f64(&self) -> Option<f64> {
        if self.denominator == 0 {
            None
        } else {
            Some(self.numerator as f64 / self.denominator as f64)
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A single raw tag value as produced by an EXIF reader
///
/// Readers disagree on how they hand out values: the same field may come
/// back as a plain number, a numeric string, a rational, or a list of any of
/// these. Three-element lists of scalars (the degree/minute/second shape used
/// by GPS tags) are held as [`TagValue::Triple`].
///
/// The [`fmt::Display`] implementation is the generic rendering used when no
/// field-specific formatting rule applies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum TagValue {
    Number(f64),
    Text(String),
    Rational(Rational),
    Triple(Box<[TagValue; 3]>),
    Sequence(Vec<TagValue>),
}

impl TagValue {
    /// Builds a list value
    ///
    /// Three scalar elements become a [`TagValue::Triple`], anything else a
    /// [`TagValue::Sequence`].
    ///
    /// # Example
    ///
    /// ```
    /// use photometa_core::TagValue;
    ///
    /// let dms = TagValue::sequence(vec![40.0.into(), 26.0.into(), 46.0.into()]);
    /// assert!(matches!(dms, TagValue::Triple(_)));
    ///
    /// let pair = TagValue::sequence(vec![1.0.into(), 2.0.into()]);
    /// assert!(matches!(pair, TagValue::Sequence(_)));
    /// ```
    pub fn sequence(items: Vec<TagValue>) -> Self {
        if items.len() == 3 && items.iter().all(TagValue::is_scalar) {
            match <[TagValue; 3]>::try_from(items) {
                Ok(triple) => TagValue::Triple(Box::new(triple)),
                Err(items) => TagValue::Sequence(items),
            }
        } else {
            TagValue::Sequence(items)
        }
    }

    /// Builds a triple from three values
    pub fn triple(a: impl Into<TagValue>, b: impl Into<TagValue>, c: impl Into<TagValue>) -> Self {
        TagValue::Triple(Box::new([a.into(), b.into(), c.into()]))
    }

    /// Returns whether this is a single value rather than a list
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            TagValue::Number(_) | TagValue::Text(_) | TagValue::Rational(_)
        )
    }

    /// Returns the text content if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the three components of a three-element list
    ///
    /// Works for both [`TagValue::Triple`] and a three-element
    /// [`TagValue::Sequence`].
    pub fn as_triple(&self) -> Option<&[TagValue; 3]> {
        match self {
            TagValue::Triple(items) => Some(items),
            TagValue::Sequence(items) => <&[TagValue; 3]>::try_from(items.as_slice()).ok(),
            _ => None,
        }
    }

    /// Resolves a scalar to a finite number
    ///
    /// - Number: as-is
    /// - Rational: numerator / denominator (`None` for a zero denominator)
    /// - Text: leading decimal number, see [`parse_float`]
    /// - Lists: `None`
    ///
    /// Non-finite results are rejected.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            TagValue::Number(n) => Some(*n),
            TagValue::Rational(r) => r.to_f64(),
            TagValue::Text(s) => parse_float(s),
            TagValue::Triple(_) | TagValue::Sequence(_) => None,
        };
        value.filter(|v| v.is_finite())
    }

    /// Converts a JSON value from a tag dump
    ///
    /// Returns `None` for `null`. Objects with integer `numerator` and
    /// `denominator` members become rationals; other objects, and arrays
    /// with `null` elements, are kept as their compact JSON text.
    #[cfg(feature = "json")]
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => None,
            Value::Bool(b) => Some(TagValue::Text(b.to_string())),
            Value::Number(n) => n.as_f64().map(TagValue::Number),
            Value::String(s) => Some(TagValue::Text(s)),
            Value::Array(items) if items.iter().any(Value::is_null) => {
                Some(TagValue::Text(Value::Array(items).to_string()))
            }
            Value::Array(items) => Some(TagValue::sequence(
                items.into_iter().filter_map(TagValue::from_json).collect(),
            )),
            Value::Object(map) => {
                let numerator = map.get("numerator").and_then(Value::as_i64);
                let denominator = map.get("denominator").and_then(Value::as_i64);
                match (numerator, denominator) {
                    (Some(n), Some(d)) => Some(TagValue::Rational(Rational::new(n, d))),
                    _ => Some(TagValue::Text(Value::Object(map).to_string())),
                }
            }
        }
    }
}

#[cfg(feature = "json")]
impl<'de> serde::Deserialize<'de> for TagValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;

        let raw = serde_json::Value::deserialize(deserializer)?;
        TagValue::from_json(raw).ok_or_else(|| serde::de::Error::custom("null tag value"))
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Number(n) => write!(f, "{}", n),
            TagValue::Text(s) => write!(f, "{}", s),
            TagValue::Rational(r) => write!(f, "{}", r),
            TagValue::Triple(items) => write_joined(f, items.iter()),
            TagValue::Sequence(items) => write_joined(f, items.iter()),
        }
    }
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a TagValue>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl From<f64> for TagValue {
    fn from(n: f64) -> Self {
        TagValue::Number(n)
    }
}

impl From<i64> for TagValue {
    fn from(n: i64) -> Self {
        TagValue::Number(n as f64)
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<Rational> for TagValue {
    fn from(r: Rational) -> Self {
        TagValue::Rational(r)
    }
}

impl From<Vec<TagValue>> for TagValue {
    fn from(items: Vec<TagValue>) -> Self {
        TagValue::sequence(items)
    }
}

/// Parses the leading decimal number of a string
///
/// Leading whitespace is skipped and anything after a valid number is
/// ignored, so `"40.5 N"` yields `40.5`. Returns `None` if the string does
/// not start with a number.
pub fn parse_float(s: &str) -> Option<f64> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)")
            .expect("Failed to compile regex")
    });

    re.captures(s)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3.14", Some(3.14))]
    #[case("  -12", Some(-12.0))]
    #[case("40.5 N", Some(40.5))]
    #[case(".5", Some(0.5))]
    #[case("1e3", Some(1000.0))]
    #[case("not a number", None)]
    #[case("", None)]
    #[case("NaN", None)]
    fn test_parse_float(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_float(input), expected);
    }

    #[test]
    fn test_rational_zero_denominator() {
        assert_eq!(Rational::new(1, 0).to_f64(), None);
        assert_eq!(Rational::new(1, 4).to_f64(), Some(0.25));
    }

    #[test]
    fn test_as_f64_variants() {
        assert_eq!(TagValue::from(2.5).as_f64(), Some(2.5));
        assert_eq!(TagValue::from("7").as_f64(), Some(7.0));
        assert_eq!(TagValue::from(Rational::new(28, 10)).as_f64(), Some(2.8));
        assert_eq!(TagValue::from(Rational::new(28, 0)).as_f64(), None);
        assert_eq!(TagValue::Number(f64::NAN).as_f64(), None);
        assert_eq!(TagValue::triple(1.0, 2.0, 3.0).as_f64(), None);
    }

    #[test]
    fn test_sequence_promotes_scalar_triples_only() {
        let nested = TagValue::sequence(vec![
            TagValue::from(1.0),
            TagValue::Sequence(vec![]),
            TagValue::from(3.0),
        ]);
        assert!(matches!(nested, TagValue::Sequence(_)));
        assert!(nested.as_triple().is_some());

        let four = TagValue::sequence(vec![1.0.into(), 2.0.into(), 3.0.into(), 4.0.into()]);
        assert!(four.as_triple().is_none());
    }

    #[test]
    fn test_display_generic() {
        assert_eq!(TagValue::from(400.0).to_string(), "400");
        assert_eq!(TagValue::from(Rational::new(1, 250)).to_string(), "1/250");
        assert_eq!(
            TagValue::triple(40.0, 26.0, Rational::new(4650, 100)).to_string(),
            "40, 26, 4650/100"
        );
        assert_eq!(
            TagValue::sequence(vec!["a".into(), "b".into()]).to_string(),
            "a, b"
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_shapes() {
        use serde_json::json;

        assert_eq!(TagValue::from_json(json!(null)), None);
        assert_eq!(TagValue::from_json(json!(2.8)), Some(TagValue::Number(2.8)));
        assert_eq!(
            TagValue::from_json(json!({"numerator": 1, "denominator": 250})),
            Some(TagValue::Rational(Rational::new(1, 250)))
        );
        assert_eq!(
            TagValue::from_json(json!([40, 26, {"numerator": 4650, "denominator": 100}])),
            Some(TagValue::triple(40.0, 26.0, Rational::new(4650, 100)))
        );
        assert_eq!(
            TagValue::from_json(json!({"b": 1, "a": 2})),
            Some(TagValue::Text(r#"{"a":2,"b":1}"#.to_string()))
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_array_with_null_keeps_shape() {
        use serde_json::json;

        let value = TagValue::from_json(json!([40, 26, null, 46])).unwrap();
        assert_eq!(value, TagValue::Text("[40,26,null,46]".to_string()));
        assert_eq!(value.as_triple(), None);
        assert_eq!(value.as_f64(), None);
    }
}
