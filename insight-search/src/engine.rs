//! Trait definition for pluggable search providers.
//!
//! The pipeline only ever talks to a [`SearchProvider`], so a different
//! engine (or a test double) can be swapped in without touching it.

use crate::error::SearchError;
use crate::types::{SearchEngine, SearchResult};

/// A query-to-ranked-URLs search capability.
///
/// Implementors must:
///
/// - return results in rank order with 1-based `rank` values
/// - return at most `num_results` results
/// - fail with [`SearchError::InvalidInput`] for an empty query or
///   `num_results == 0`
/// - fail with [`SearchError::SearchUnavailable`] when the backend errors
///   or produces zero results
///
/// All implementations must be `Send + Sync`.
pub trait SearchProvider: Send + Sync {
    /// Search for `query` and return up to `num_results` ranked results.
    ///
    /// # Errors
    ///
    /// See the trait-level contract.
    fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;

    /// Returns which [`SearchEngine`] variant this implementation represents.
    fn engine_type(&self) -> SearchEngine;
}

/// Reject inputs every provider must refuse before touching the network.
pub(crate) fn validate_request(query: &str, num_results: usize) -> Result<(), SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::InvalidInput("query must not be empty".into()));
    }
    if num_results == 0 {
        return Err(SearchError::InvalidInput(
            "num_results must be greater than 0".into(),
        ));
    }
    Ok(())
}
