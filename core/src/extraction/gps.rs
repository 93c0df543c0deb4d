use crate::types::{GeoPoint, Hemisphere, TagMap, TagValue};

use super::tags::{GPS_LATITUDE, GPS_LATITUDE_REF, GPS_LONGITUDE, GPS_LONGITUDE_REF};

/// Converts a raw GPS coordinate to signed decimal degrees
///
/// # Algorithm
///
/// 1. Three-element value (degrees, minutes, seconds): every component is
///    resolved to a number first (rational, numeric text or plain number).
///    One unresolvable component fails the whole conversion.
///    Result is `degrees + minutes / 60 + seconds / 3600`.
/// 2. Plain number: already decimal degrees
/// 3. Text: parsed as a decimal number
/// 4. Anything else: `None`
///
/// South and West negate the magnitude. A missing reference keeps the
/// value positive.
///
/// The result is always finite.
///
/// # Example
///
/// ```
/// use photometa_core::{convert_coordinate, Hemisphere, TagValue};
///
/// let dms = TagValue::triple(40.0, 26.0, 46.0);
/// let lat = convert_coordinate(&dms, Some(Hemisphere::South)).unwrap();
/// assert!((lat + 40.446111).abs() < 1e-5);
///
/// assert_eq!(convert_coordinate(&TagValue::from("not a number"), None), None);
/// ```
pub fn convert_coordinate(raw: &TagValue, reference: Option<Hemisphere>) -> Option<f64> {
    let magnitude = match raw {
        TagValue::Triple(_) | TagValue::Sequence(_) => dms_to_decimal(raw)?,
        TagValue::Number(n) => *n,
        TagValue::Text(s) => match crate::types::parse_float(s) {
            Some(n) => n,
            None => {
                log::debug!("GPS coordinate text is not numeric: {:?}", s);
                return None;
            }
        },
        TagValue::Rational(_) => {
            log::debug!("Unsupported GPS coordinate shape: {}", raw);
            return None;
        }
    };

    if !magnitude.is_finite() {
        log::debug!("GPS coordinate is not finite: {}", magnitude);
        return None;
    }

    Some(match reference {
        Some(hemisphere) => hemisphere.apply(magnitude),
        None => magnitude,
    })
}

/// Combines a degree/minute/second value into decimal degrees
///
/// Every component must resolve before any arithmetic happens.
fn dms_to_decimal(raw: &TagValue) -> Option<f64> {
    let Some([degrees, minutes, seconds]) = raw.as_triple() else {
        log::debug!("GPS coordinate list does not have three components: {}", raw);
        return None;
    };

    match (degrees.as_f64(), minutes.as_f64(), seconds.as_f64()) {
        (Some(d), Some(m), Some(s)) => Some(d + m / 60.0 + s / 3600.0),
        _ => {
            log::debug!("Invalid GPS coordinate components: {}", raw);
            None
        }
    }
}

/// Extracts the photo location from GPS tags
///
/// Both latitude and longitude must be present and convertible; a single
/// usable axis is not a location.
pub fn extract_location(tags: &TagMap) -> Option<GeoPoint> {
    let latitude = convert_axis(tags, GPS_LATITUDE, GPS_LATITUDE_REF);
    let longitude = convert_axis(tags, GPS_LONGITUDE, GPS_LONGITUDE_REF);

    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        (None, None) => None,
        _ => {
            log::debug!("Only one GPS axis converted; dropping location");
            None
        }
    }
}

fn convert_axis(tags: &TagMap, coordinate_tag: &str, reference_tag: &str) -> Option<f64> {
    let raw = tags.get(coordinate_tag)?;
    let reference = tags.get(reference_tag).and_then(Hemisphere::from_value);
    convert_coordinate(raw, reference)
}
