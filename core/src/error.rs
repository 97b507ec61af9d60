use thiserror::Error;

/// Result type for dicomlens operations
pub type Result<T> = std::result::Result<T, DicomLensError>;

/// Error types for dicomlens operations
///
/// Strict tag construction is the only fallible operation inside the
/// extraction core; everything else degrades to a display value. The
/// remaining variants belong to the CLI boundary.
#[derive(Error, Debug)]
pub enum DicomLensError {
    /// Malformed group or element code on strict tag construction
    #[error("Invalid tag code: {0}")]
    InvalidTagCode(String),

    /// Malformed raw element map handed to the CLI
    #[error("Invalid element map: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for DicomLensError {
    fn from(e: serde_json::Error) -> Self {
        DicomLensError::InvalidInput(format!("{}", e))
    }
}
