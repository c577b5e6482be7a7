//! Page fetching boundary.
//!
//! The pipeline downloads pages through a [`PageFetcher`] so tests and
//! alternative transports can be injected. [`HttpFetcher`] is the
//! production implementation on top of the shared [`crate::http`] client.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;

/// Downloads the HTML body of a page.
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Fetch`] if the request fails, the server
    /// answers with a non-success status, or the body cannot be read.
    fn fetch(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, SearchError>> + Send;
}

/// Fetches pages over HTTP(S) with a single reused client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from `config` (timeout, User-Agent, redirects).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] or [`SearchError::Http`] if the
    /// client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(config)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, SearchError> {
        tracing::trace!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|e| SearchError::Fetch(format!("{url}: request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Fetch(format!("{url}: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Fetch(format!("{url}: body read failed: {e}")))?;

        tracing::trace!(url, bytes = body.len(), "page fetched");
        Ok(body)
    }
}
