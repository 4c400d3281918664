/// Error types for sheet retrieval and parsing
use thiserror::Error;

/// Main error type for sheet operations
#[derive(Error, Debug)]
pub enum SheetError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Bad response status for {url}: {status}")]
    BadStatus { url: String, status: u16 },

    /// Server answered with an empty body
    #[error("Empty response from {0}")]
    EmptyResponse(String),

    /// Failed to read a local export
    #[error("Failed to read sheet export: {0}")]
    Io(#[from] std::io::Error),

    /// Header row is narrower than the column schema expects
    #[error("Header has {found} columns, schema needs at least {expected}")]
    HeaderTooNarrow { expected: usize, found: usize },

    /// Unknown time window name
    #[error("Unknown time window {0:?} (expected 6months, 12months or all)")]
    UnknownWindow(String),

    /// Week key not in "YYYY-WW" form
    #[error("Invalid week key {0:?}")]
    InvalidWeekKey(String),

    /// Cutoff date computation failed
    #[error(transparent)]
    Date(#[from] runlog_utils::error::DateError),
}

/// Type alias for Results using SheetError
pub type Result<T> = std::result::Result<T, SheetError>;
