use thiserror::Error;

/// Result type for photometa operations
pub type Result<T> = std::result::Result<T, PhotometaError>;

/// Error types for photometa operations
///
/// Malformed tag values never produce these; they degrade to missing
/// coordinates, dates or a fallback rendering. Errors only come from
/// reading tag dumps.
#[derive(Error, Debug)]
pub enum PhotometaError {
    /// Tag dump could not be decoded
    #[error("Tag dump error: {0}")]
    TagDump(String),

    /// Tag dump decoded but has the wrong shape
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for PhotometaError {
    fn from(e: serde_json::Error) -> Self {
        PhotometaError::TagDump(format!("{}", e))
    }
}
