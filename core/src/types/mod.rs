//! Core type definitions for photo metadata
//!
//! This module provides the fundamental types used throughout the photometa library:
//! - [`TagValue`]: A raw tag value (number, text, rational, triple or sequence)
//! - [`Rational`]: EXIF numerator/denominator pair
//! - [`TagMap`]: Raw tag mapping keyed by tag name
//! - [`Hemisphere`]: GPS hemisphere reference (N/S/E/W)
//! - [`GeoPoint`]: Derived latitude/longitude in decimal degrees
//! - [`FormatOptions`]: Configuration for rendering values and reports

mod geo;
mod hemisphere;
mod options;
mod tag_map;
mod value;

pub use geo::GeoPoint;
pub use hemisphere::Hemisphere;
pub use options::{FormatOptions, DEFAULT_COORDINATE_PRECISION, DEFAULT_DATE_FORMAT};
pub use tag_map::TagMap;
pub use value::{parse_float, Rational, TagValue};
