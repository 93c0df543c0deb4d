pub mod date;
pub mod format;
pub mod gps;
pub mod important;
pub mod merge;
pub mod tags;

pub use date::{parse_camera_date, parse_date_value, select_best_date};
pub use format::{format_timestamp, format_value, format_value_with, NOT_AVAILABLE};
pub use gps::{convert_coordinate, extract_location};
pub use important::select_important_fields;
pub use merge::merge_tags;
pub use tags::*;
