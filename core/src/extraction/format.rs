use crate::types::{FormatOptions, TagValue, DEFAULT_DATE_FORMAT};
use chrono::NaiveDateTime;
use std::fmt::Write;

use super::date::parse_date_value;
use super::tags::{
    DATE_TIME, DATE_TIME_DIGITIZED, DATE_TIME_ORIGINAL, EXPOSURE_TIME, FOCAL_LENGTH, F_NUMBER,
    GPS_LATITUDE, GPS_LONGITUDE, ISO_SPEED_RATINGS,
};

/// Placeholder for a missing value
pub const NOT_AVAILABLE: &str = "Not available";

/// Renders a tag value for display with default options
///
/// See [`format_value_with`].
///
/// # Example
///
/// ```
/// use photometa_core::{format_value, TagValue};
///
/// assert_eq!(format_value("FNumber", Some(&TagValue::from(2.8))), "f/2.8");
/// assert_eq!(format_value("ExposureTime", Some(&TagValue::from(0.004))), "1/250s");
/// assert_eq!(format_value("Unknown", None), "Not available");
/// ```
pub fn format_value(key: &str, value: Option<&TagValue>) -> String {
    format_value_with(key, value, &FormatOptions::default())
}

/// Renders a tag value for display
///
/// Field-specific rules, keyed by exact tag name:
///
/// | Field | Rendering |
/// |---|---|
/// | DateTime, DateTimeOriginal, DateTimeDigitized | parsed date in `options.date_format`, else raw text |
/// | GPSLatitude, GPSLongitude | `D° M' S"` for three-element values |
/// | FNumber | `f/<value>` |
/// | ExposureTime | `1/<n>s` below one second, else `<value>s` |
/// | ISOSpeedRatings | `ISO <value>` |
/// | FocalLength | `<value>mm` |
///
/// Unit rules apply to any scalar. Numbers and rationals show their decimal
/// value; other scalars keep their generic rendering inside the template.
/// Lists, and all other fields, get the generic rendering: lists are
/// comma-joined and rationals print as `n/d`. A missing value renders as
/// [`NOT_AVAILABLE`]. Never fails.
pub fn format_value_with(key: &str, value: Option<&TagValue>, options: &FormatOptions) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };

    let specific = match key {
        DATE_TIME | DATE_TIME_ORIGINAL | DATE_TIME_DIGITIZED => format_date(value, options),
        GPS_LATITUDE | GPS_LONGITUDE => format_dms(value),
        F_NUMBER => unit_display(value).map(|v| format!("f/{}", v)),
        EXPOSURE_TIME => format_exposure(value),
        ISO_SPEED_RATINGS => unit_display(value).map(|v| format!("ISO {}", v)),
        FOCAL_LENGTH => unit_display(value).map(|v| format!("{}mm", v)),
        _ => None,
    };

    specific.unwrap_or_else(|| value.to_string())
}

fn format_date(value: &TagValue, options: &FormatOptions) -> Option<String> {
    let text = value.as_text()?;
    match parse_date_value(value) {
        Some(date) => Some(format_timestamp(&date, options)),
        None => Some(text.to_string()),
    }
}

/// Formats a parsed date with `options.date_format`
///
/// Falls back to the default pattern if the configured one is invalid.
pub fn format_timestamp(date: &NaiveDateTime, options: &FormatOptions) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&options.date_format)).is_ok() {
        return out;
    }

    log::debug!(
        "Invalid date format pattern {:?}; using default",
        options.date_format
    );
    date.format(DEFAULT_DATE_FORMAT).to_string()
}

fn format_dms(value: &TagValue) -> Option<String> {
    let [degrees, minutes, seconds] = value.as_triple()?;
    Some(format!(
        "{}° {}' {}\"",
        component_display(degrees),
        component_display(minutes),
        component_display(seconds)
    ))
}

fn format_exposure(value: &TagValue) -> Option<String> {
    let reciprocal = value
        .as_f64()
        .filter(|seconds| *seconds > 0.0 && *seconds < 1.0)
        .map(|seconds| 1.0 / seconds)
        .filter(|r| r.is_finite());

    match reciprocal {
        Some(r) => Some(format!("1/{}s", r.round())),
        None => unit_display(value).map(|v| format!("{}s", v)),
    }
}

/// Display form of a scalar for interpolation into a unit template
///
/// Numeric values use [`scalar_display`]; other scalars use their generic
/// rendering. Lists return `None`.
fn unit_display(value: &TagValue) -> Option<String> {
    match value {
        TagValue::Triple(_) | TagValue::Sequence(_) => None,
        _ => Some(scalar_display(value).unwrap_or_else(|| value.to_string())),
    }
}

/// Display form of a numeric scalar
///
/// Rationals show their decimal value. Non-numeric values return `None`.
fn scalar_display(value: &TagValue) -> Option<String> {
    match value {
        TagValue::Number(n) => Some(n.to_string()),
        TagValue::Text(s) => value.as_f64().map(|_| s.trim().to_string()),
        TagValue::Rational(_) => value.as_f64().map(|n| n.to_string()),
        TagValue::Triple(_) | TagValue::Sequence(_) => None,
    }
}

fn component_display(value: &TagValue) -> String {
    match value {
        TagValue::Text(s) => s.trim().to_string(),
        _ => scalar_display(value).unwrap_or_else(|| value.to_string()),
    }
}
