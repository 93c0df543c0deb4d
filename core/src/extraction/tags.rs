use crate::types::{TagMap, TagValue};

// Date Tags
pub const DATE_TIME: &str = "DateTime";
pub const DATE_TIME_ORIGINAL: &str = "DateTimeOriginal";
pub const DATE_TIME_DIGITIZED: &str = "DateTimeDigitized";

// Camera Tags
pub const MAKE: &str = "Make";
pub const MODEL: &str = "Model";
pub const SOFTWARE: &str = "Software";

// Exposure Tags
pub const F_NUMBER: &str = "FNumber";
pub const EXPOSURE_TIME: &str = "ExposureTime";
pub const ISO_SPEED_RATINGS: &str = "ISOSpeedRatings";
pub const FOCAL_LENGTH: &str = "FocalLength";

// GPS Tags
pub const GPS_LATITUDE: &str = "GPSLatitude";
pub const GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
pub const GPS_LONGITUDE: &str = "GPSLongitude";
pub const GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";
pub const GPS_ALTITUDE: &str = "GPSAltitude";

// Image Geometry Tags
pub const IMAGE_WIDTH: &str = "ImageWidth";
pub const IMAGE_HEIGHT: &str = "ImageHeight";
pub const ORIENTATION: &str = "Orientation";

/// Date fields in the order they are tried when picking the photo date
pub const DATE_PRIORITY: [&str; 3] = [DATE_TIME_ORIGINAL, DATE_TIME, DATE_TIME_DIGITIZED];

/// Fields shown in the key-information summary, in display order
pub const IMPORTANT_FIELDS: [&str; 17] = [
    DATE_TIME,
    DATE_TIME_ORIGINAL,
    MAKE,
    MODEL,
    SOFTWARE,
    F_NUMBER,
    EXPOSURE_TIME,
    ISO_SPEED_RATINGS,
    FOCAL_LENGTH,
    GPS_LATITUDE,
    GPS_LATITUDE_REF,
    GPS_LONGITUDE,
    GPS_LONGITUDE_REF,
    GPS_ALTITUDE,
    IMAGE_WIDTH,
    IMAGE_HEIGHT,
    ORIENTATION,
];

/// Helper to get a string value from a tag
///
/// Returns `None` if the tag is not present, is not text, or is blank
pub fn get_string_value(tags: &TagMap, name: &str) -> Option<String> {
    tags.get(name)
        .and_then(TagValue::as_text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
