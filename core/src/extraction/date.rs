use crate::types::{TagMap, TagValue};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

use super::tags::DATE_PRIORITY;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a camera date string (`YYYY:MM:DD HH:MM:SS`)
///
/// The input must match the camera form exactly, with two-digit fields. The
/// first two colons of the date part become hyphens and the separating
/// space becomes `T`, giving `YYYY-MM-DDTHH:MM:SS`, which is then parsed as
/// a calendar timestamp. Fractional seconds are accepted.
///
/// Returns `None` for empty, malformed or out-of-range input.
///
/// # Example
///
/// ```
/// use photometa_core::parse_camera_date;
///
/// let date = parse_camera_date("2023:07:04 10:15:30").unwrap();
/// assert_eq!(date.to_string(), "2023-07-04 10:15:30");
///
/// assert!(parse_camera_date("2023:13:99 10:15:30").is_none());
/// ```
pub fn parse_camera_date(s: &str) -> Option<NaiveDateTime> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^\d{4}:\d{2}:\d{2} \d{2}:\d{2}:\d{2}(?:\.\d+)?$")
            .expect("Failed to compile regex")
    });

    if !re.is_match(s) {
        log::trace!("Not a camera date: {:?}", s);
        return None;
    }

    let (date, time) = s.split_once(' ')?;
    let iso = format!("{}T{}", date.replacen(':', "-", 2), time);

    match NaiveDateTime::parse_from_str(&iso, ISO_FORMAT) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::trace!("Failed to parse camera date {:?}: {}", s, e);
            None
        }
    }
}

/// Parses a date from a tag value
///
/// Only text values can hold a camera date.
pub fn parse_date_value(value: &TagValue) -> Option<NaiveDateTime> {
    value.as_text().and_then(parse_camera_date)
}

/// Selects the best available photo date
///
/// Tries `DateTimeOriginal`, then `DateTime`, then `DateTimeDigitized`, and
/// returns the first one that is present and parses.
pub fn select_best_date(tags: &TagMap) -> Option<NaiveDateTime> {
    for field in DATE_PRIORITY {
        if let Some(value) = tags.get(field) {
            if let Some(date) = parse_date_value(value) {
                return Some(date);
            }
            log::debug!("Skipping unparseable {}: {}", field, value);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::tags::{DATE_TIME, DATE_TIME_DIGITIZED, DATE_TIME_ORIGINAL};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_camera_date() {
        assert_eq!(
            parse_camera_date("2023:07:04 10:15:30"),
            Some(datetime(2023, 7, 4, 10, 15, 30))
        );
    }

    #[test]
    fn test_parse_camera_date_fractional_seconds() {
        use chrono::Timelike;

        let parsed = parse_camera_date("2023:07:04 10:15:30.25").unwrap();
        assert_eq!(parsed.second(), 30);
        assert_eq!(parsed.nanosecond(), 250_000_000);
    }

    #[rstest]
    #[case("not a date")]
    #[case("2023:13:99 10:15:30")]
    #[case("2023:02:30 10:15:30")]
    #[case("2023:07:04 25:00:00")]
    #[case("0000:00:00 00:00:00")]
    #[case("2023:07:04")]
    #[case("2023-07-04 10:15:30x")]
    #[case("2023-07-04 10:15:30")]
    #[case("2023:7:4 10:15:30")]
    #[case("2023:07:04 10:15")]
    #[case(" 2023:07:04 10:15:30")]
    #[case("")]
    fn test_parse_camera_date_invalid(#[case] input: &str) {
        assert_eq!(parse_camera_date(input), None);
    }

    #[test]
    fn test_parse_date_value_requires_text() {
        assert!(parse_date_value(&TagValue::from("2020:01:01 00:00:00")).is_some());
        assert!(parse_date_value(&TagValue::from(20200101.0)).is_none());
    }

    #[test]
    fn test_select_best_date_prefers_original() {
        let tags = TagMap::new()
            .with(DATE_TIME, "2020:01:01 00:00:00")
            .with(DATE_TIME_ORIGINAL, "2019:06:15 12:30:00")
            .with(DATE_TIME_DIGITIZED, "2018:01:01 00:00:00");

        assert_eq!(
            select_best_date(&tags),
            Some(datetime(2019, 6, 15, 12, 30, 0))
        );
    }

    #[test]
    fn test_select_best_date_skips_unparseable() {
        let tags = TagMap::new()
            .with(DATE_TIME_ORIGINAL, "    :  :     :  :  ")
            .with(DATE_TIME, 5.0)
            .with(DATE_TIME_DIGITIZED, "2018:01:01 08:00:00");

        assert_eq!(select_best_date(&tags), Some(datetime(2018, 1, 1, 8, 0, 0)));
    }

    #[test]
    fn test_select_best_date_none() {
        assert_eq!(select_best_date(&TagMap::new()), None);

        let tags = TagMap::new().with(DATE_TIME, "garbage");
        assert_eq!(select_best_date(&tags), None);
    }
}
