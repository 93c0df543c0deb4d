pub mod api;
pub mod batch;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod types;

pub use api::{CanonicalMetadata, MetadataNormalizer};
pub use batch::{BatchEntry, BatchSummary, ImageResult};
pub use cli::report::{BatchReport, TextReport};
pub use error::{PhotometaError, Result};
pub use extraction::{
    convert_coordinate, extract_location, format_timestamp, format_value, format_value_with,
    merge_tags, parse_camera_date, parse_date_value, select_best_date, select_important_fields,
};
pub use types::*;
