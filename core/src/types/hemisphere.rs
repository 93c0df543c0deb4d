use super::TagValue;
use std::fmt;

/// GPS hemisphere reference (`GPSLatitudeRef` / `GPSLongitudeRef`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses a hemisphere reference
    ///
    /// Accepts the single-letter EXIF codes and the full words, ignoring
    /// case and surrounding whitespace. Anything else is `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use photometa_core::Hemisphere;
    ///
    /// assert_eq!(Hemisphere::parse("S"), Some(Hemisphere::South));
    /// assert_eq!(Hemisphere::parse(" west "), Some(Hemisphere::West));
    /// assert_eq!(Hemisphere::parse("X"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Some(Hemisphere::North),
            "s" | "south" => Some(Hemisphere::South),
            "e" | "east" => Some(Hemisphere::East),
            "w" | "west" => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Parses a hemisphere reference from a tag value
    ///
    /// Only text values carry a reference.
    pub fn from_value(value: &TagValue) -> Option<Self> {
        value.as_text().and_then(Self::parse)
    }

    /// Returns whether coordinates in this hemisphere are negative
    pub fn is_negative(&self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }

    /// Applies the hemisphere sign to a magnitude
    pub fn apply(&self, magnitude: f64) -> f64 {
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Returns the single-letter EXIF code
    pub fn code(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
