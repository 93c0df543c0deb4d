use std::fmt;

/// Derived photo location in signed decimal degrees
///
/// Values are reported as computed; no range clamping is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new GeoPoint
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_six_decimals() {
        let point = GeoPoint::new(40.446111111, -79.982222222);
        assert_eq!(point.to_string(), "40.446111, -79.982222");
    }
}
