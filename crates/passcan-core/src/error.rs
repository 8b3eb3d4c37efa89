//! Error types for the passcan-core library.

use thiserror::Error;

/// Main error type for the passcan library.
#[derive(Error, Debug)]
pub enum PassCanError {
    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to passport field extraction.
///
/// Extraction has exactly one failure mode. Empty input, input where no line
/// survives normalization and input missing a mandatory field all collapse
/// into [`ExtractionError::NoDataFound`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionError {
    /// No usable passport data could be recovered from the text.
    #[error("no passport data found")]
    NoDataFound,
}

/// Result type for the passcan library.
pub type Result<T> = std::result::Result<T, PassCanError>;
