//! Batch analysis
//!
//! Aggregates normalization results for several images into location,
//! date and success counts.

mod summary;

pub use summary::{BatchEntry, BatchSummary, ImageResult};
