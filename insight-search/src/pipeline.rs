//! Scrape and summarise pipeline: search, fetch, extract, rank, return.
//!
//! [`TextInsight`] composes a [`SearchProvider`], a [`PageFetcher`] and a
//! [`Summariser`]. Every collaborator is injected, so any of them can be
//! replaced without touching the pipeline.

use crate::config::SummaryConfig;
use crate::content;
use crate::engine::SearchProvider;
use crate::error::SearchError;
use crate::fetch::PageFetcher;
use crate::summariser::Summariser;
use crate::types::{PageSummary, SearchResult};
use futures::StreamExt;

/// Search, scrape and summarise, one [`PageSummary`] per fetched page.
#[derive(Debug, Clone)]
pub struct TextInsight<P, F, S> {
    provider: P,
    fetcher: F,
    summariser: S,
    config: SummaryConfig,
}

impl<P, F, S> TextInsight<P, F, S>
where
    P: SearchProvider,
    F: PageFetcher,
    S: Summariser,
{
    /// Compose a pipeline with the default [`SummaryConfig`].
    pub fn new(provider: P, fetcher: F, summariser: S) -> Self {
        Self {
            provider,
            fetcher,
            summariser,
            config: SummaryConfig::default(),
        }
    }

    /// Replace the pipeline configuration.
    pub fn with_config(mut self, config: SummaryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarise the top `top_n` search results for `query`.
    ///
    /// # Pipeline
    ///
    /// 1. Validate the query, `top_n` and the configuration
    /// 2. Ask the provider for up to `top_n` ranked results
    /// 3. Fetch every result page, at most `max_concurrent_fetches` at a time
    /// 4. Log and skip pages that fail to fetch
    /// 5. Extract visible text and keep the best `sentences_per_page` sentences
    ///
    /// Summaries are returned in search rank order. A page without any
    /// sentences still yields a summary, with no sentences.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidInput`] for a blank query or `top_n == 0`
    /// - [`SearchError::Config`] for an invalid configuration
    /// - [`SearchError::SearchUnavailable`] if the provider fails or finds
    ///   nothing
    pub async fn summarize(
        &self,
        query: &str,
        top_n: usize,
    ) -> Result<Vec<PageSummary>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidInput("query must not be empty".into()));
        }
        if top_n == 0 {
            return Err(SearchError::InvalidInput(
                "top_n must be greater than 0".into(),
            ));
        }
        self.config.validate()?;

        tracing::trace!(query, top_n, "summarize");

        let mut results = self
            .provider
            .search(query, top_n)
            .await
            .map_err(|err| match err {
                SearchError::InvalidInput(_) | SearchError::SearchUnavailable(_) => err,
                other => SearchError::SearchUnavailable(other.to_string()),
            })?;
        if results.is_empty() {
            return Err(SearchError::SearchUnavailable(format!(
                "{} returned no results",
                self.provider.engine_type()
            )));
        }
        results.truncate(top_n);
        tracing::debug!(
            engine = %self.provider.engine_type(),
            count = results.len(),
            "search results received"
        );

        let fetched: Vec<(SearchResult, Result<String, SearchError>)> =
            futures::stream::iter(results)
                .map(|result| async move {
                    let body = self.fetcher.fetch(&result.url).await;
                    (result, body)
                })
                .buffered(self.config.max_concurrent_fetches)
                .collect()
                .await;

        let mut summaries = Vec::with_capacity(fetched.len());
        for (result, body) in fetched {
            match body {
                Ok(html) => summaries.push(self.summarise_page(&result, &html, query)),
                Err(err) => {
                    tracing::warn!(url = %result.url, error = %err, "skipping page");
                }
            }
        }

        tracing::debug!(count = summaries.len(), "pages summarised");
        Ok(summaries)
    }

    /// [`summarize`](Self::summarize) with `config.default_top_n` pages.
    pub async fn summarize_default(&self, query: &str) -> Result<Vec<PageSummary>, SearchError> {
        self.summarize(query, self.config.default_top_n).await
    }

    fn summarise_page(&self, result: &SearchResult, html: &str, query: &str) -> PageSummary {
        let page = content::extract_page(html, &result.url, self.config.max_page_chars);
        let sentences = self
            .summariser
            .summarise(&page.text, query, self.config.sentences_per_page);
        if sentences.is_empty() {
            tracing::debug!(url = %result.url, "no extractable sentences");
        }

        PageSummary {
            url: result.url.clone(),
            rank: result.rank,
            title: page.title,
            sentences,
        }
    }
}
