/// Default display pattern for parsed camera dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default number of decimal places for coordinates
pub const DEFAULT_COORDINATE_PRECISION: usize = 6;

/// Configuration for rendering tag values and reports
///
/// The defaults are locale-independent, so output is identical on every
/// machine.
///
/// # Example
///
/// ```
/// use photometa_core::FormatOptions;
///
/// let options = FormatOptions::default()
///     .with_date_format("%d/%m/%Y %H:%M")
///     .with_coordinate_precision(4);
///
/// assert_eq!(options.date_format, "%d/%m/%Y %H:%M");
/// assert_eq!(options.coordinate_precision, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// `chrono` strftime pattern used for DateTime fields
    pub date_format: String,

    /// Decimal places used when printing derived coordinates
    pub coordinate_precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            coordinate_precision: DEFAULT_COORDINATE_PRECISION,
        }
    }
}

impl FormatOptions {
    /// Builder: Set the date display pattern
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    /// Builder: Set the coordinate precision
    pub fn with_coordinate_precision(mut self, precision: usize) -> Self {
        self.coordinate_precision = precision;
        self
    }
}
