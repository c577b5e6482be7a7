//! Error types for the insight utilities.

use insight_search::SearchError;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    /// Malformed segment or other unusable input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Malformed version string.
    #[error("invalid version: {0}")]
    InvalidVersion(String),

    /// Search, fetch or summarisation error.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, InsightError>;
