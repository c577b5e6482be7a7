//! Insight: small, self-contained utilities.
//!
//! - [`overlap`]: overlap detection for closed 1-D segments
//! - [`version`]: ordering of dotted numeric version strings
//! - [`search`]: web search, page scraping and extractive summarisation
//!   (re-export of the `insight-search` crate)
//!
//! Every call is independent: no shared state, no persistence.

pub mod error;
pub mod overlap;
pub mod version;

pub use insight_search as search;

pub use error::{InsightError, Result};
pub use overlap::{any_overlap, find_overlap, overlap_region, overlaps, Segment};
pub use version::{compare, compare_with_separators, Version};

/// Summarise the top `top_n` web results for `query`.
///
/// Thin wrapper over [`insight_search::summarize`] returning [`InsightError`].
///
/// # Errors
///
/// [`InsightError::InvalidInput`] for an empty query or `top_n == 0`, and
/// [`InsightError::Search`] wrapping `SearchUnavailable` when the search
/// fails or finds nothing.
pub async fn summarize(query: &str, top_n: usize) -> Result<Vec<search::PageSummary>> {
    insight_search::summarize(query, top_n)
        .await
        .map_err(|err| match err {
            search::SearchError::InvalidInput(msg) => InsightError::InvalidInput(msg),
            other => InsightError::Search(other),
        })
}
