//! # insight-search
//!
//! Web search, page scraping and extractive summarisation.
//!
//! Given a query, the crate asks a search provider for ranked result URLs,
//! fetches each page, strips markup, and keeps the sentences most relevant
//! to the query as that page's summary.
//!
//! ## Design
//!
//! - [`SearchProvider`] abstracts the search engine; [`DuckDuckGoEngine`]
//!   scrapes DuckDuckGo's HTML endpoint with CSS selectors
//! - [`PageFetcher`] abstracts page downloads; [`HttpFetcher`] uses a shared
//!   `reqwest` client with a bounded timeout
//! - [`Summariser`] scores sentences; [`CosineSummariser`] uses TF-IDF
//!   cosine similarity
//! - [`TextInsight`] wires the three together. Pages that fail to fetch are
//!   skipped with a warning; a failed search fails the whole call
//! - No retries, no cache, no persisted state
//!
//! Search queries are logged only at trace level.

pub mod config;
pub mod content;
pub mod engine;
pub mod engines;
pub mod error;
pub mod fetch;
pub mod http;
pub mod pipeline;
pub mod summariser;
pub mod types;

pub use config::{SearchConfig, SummaryConfig};
pub use engine::SearchProvider;
pub use engines::DuckDuckGoEngine;
pub use error::{Result, SearchError};
pub use fetch::{HttpFetcher, PageFetcher};
pub use pipeline::TextInsight;
pub use summariser::{CosineSummariser, RelevanceTarget, Summariser, WindowSummariser};
pub use types::{PageContent, PageSummary, ScoredSentence, SearchEngine, SearchResult};

/// Search the web with DuckDuckGo and default configuration.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] for an empty query or
/// `num_results == 0`, and [`SearchError::SearchUnavailable`] if the
/// engine fails or finds nothing.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> insight_search::Result<()> {
/// let results = insight_search::search("rust programming", 5).await?;
/// for result in &results {
///     println!("{}. {}", result.rank, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, num_results: usize) -> Result<Vec<SearchResult>> {
    DuckDuckGoEngine::default().search(query, num_results).await
}

/// Summarise the top `top_n` web results for `query` with default settings.
///
/// Uses [`DuckDuckGoEngine`], [`HttpFetcher`] and [`CosineSummariser`].
///
/// # Errors
///
/// Same as [`TextInsight::summarize`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> insight_search::Result<()> {
/// let summaries = insight_search::summarize("rust ownership", 5).await?;
/// for summary in &summaries {
///     println!("{}: {}", summary.url, summary.text());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn summarize(query: &str, top_n: usize) -> Result<Vec<PageSummary>> {
    let config = SearchConfig::default();
    let insight = TextInsight::new(
        DuckDuckGoEngine::new(config.clone()),
        HttpFetcher::new(&config)?,
        CosineSummariser::default(),
    );
    insight.summarize(query, top_n).await
}

/// Fetch a page and extract its readable text.
///
/// # Errors
///
/// Returns [`SearchError::Fetch`] if the page cannot be downloaded.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> insight_search::Result<()> {
/// let page = insight_search::fetch_page_content("https://example.com").await?;
/// println!("Title: {}", page.title);
/// println!("Words: {}", page.word_count);
/// # Ok(())
/// # }
/// ```
pub async fn fetch_page_content(url: &str) -> Result<PageContent> {
    let fetcher = HttpFetcher::new(&SearchConfig::default())?;
    let html = fetcher.fetch(url).await?;
    Ok(content::extract_page(&html, url, content::DEFAULT_MAX_CHARS))
}
