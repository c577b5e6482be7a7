//! Error types for the insight-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling.

/// Errors that can occur while searching, fetching or summarising.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The caller supplied an unusable query or parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The search provider failed or returned no results. Terminal for
    /// the query that triggered it.
    #[error("search unavailable: {0}")]
    SearchUnavailable(String),

    /// A single page could not be fetched or decoded.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// An HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse an HTML response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for insight-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
