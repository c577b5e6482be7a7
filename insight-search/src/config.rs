//! Search and summary configuration with sensible defaults.
//!
//! [`SearchConfig`] controls HTTP behaviour shared by the search engine and
//! the page fetcher. [`SummaryConfig`] controls the scrape and summarise
//! pipeline. Both follow the same pattern: `Default` for normal use, field
//! overrides for custom behaviour, and `validate()` before use.

use crate::error::SearchError;

/// HTTP configuration for search requests and page fetches.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Whether to request safe search filtering from engines that support it.
    pub safe_search: bool,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Maximum number of redirects followed per request.
    pub max_redirects: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 8,
            safe_search: true,
            user_agent: None,
            max_redirects: 10,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_redirects == 0 {
            return Err(SearchError::Config(
                "max_redirects must be greater than 0".into(),
            ));
        }
        if matches!(self.user_agent, Some(ref ua) if ua.trim().is_empty()) {
            return Err(SearchError::Config(
                "user_agent must not be blank".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the scrape and summarise pipeline.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Number of pages summarised when the caller does not choose.
    pub default_top_n: usize,
    /// Maximum number of sentences kept per page.
    pub sentences_per_page: usize,
    /// Pages fetched at once. `1` fetches strictly one after another.
    /// Output order follows search rank regardless of this value.
    pub max_concurrent_fetches: usize,
    /// Extracted text beyond this many bytes is cut before summarising.
    pub max_page_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            default_top_n: 5,
            sentences_per_page: 3,
            max_concurrent_fetches: 1,
            max_page_chars: crate::content::DEFAULT_MAX_CHARS,
        }
    }
}

impl SummaryConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Every count must be greater than zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        let fields = [
            ("default_top_n", self.default_top_n),
            ("sentences_per_page", self.sentences_per_page),
            ("max_concurrent_fetches", self.max_concurrent_fetches),
            ("max_page_chars", self.max_page_chars),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(SearchError::Config(format!(
                    "{name} must be greater than 0"
                )));
            }
        }
        Ok(())
    }
}
