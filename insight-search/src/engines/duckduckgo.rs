//! DuckDuckGo HTML search engine.
//!
//! Posts the query to the JavaScript-free endpoint at
//! `https://html.duckduckgo.com/html/` and scrapes the organic results.

use crate::config::SearchConfig;
use crate::engine::{validate_request, SearchProvider};
use crate::error::SearchError;
use crate::http;
use crate::types::{SearchEngine, SearchResult};
use scraper::{ElementRef, Html, Selector};
use url::Url;

const ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Organic result blocks; sponsored blocks carry `result--ad`.
const RESULT_SELECTOR: &str =
    ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)";
const LINK_SELECTOR: &str = ".result__a";
const SNIPPET_SELECTOR: &str = ".result__snippet";

/// General web search backed by DuckDuckGo.
///
/// Transport failures, unparseable pages and empty result pages are all
/// reported as [`SearchError::SearchUnavailable`].
#[derive(Debug, Clone)]
pub struct DuckDuckGoEngine {
    config: SearchConfig,
    endpoint: String,
}

impl Default for DuckDuckGoEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl DuckDuckGoEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            endpoint: ENDPOINT.to_owned(),
        }
    }

    #[cfg(test)]
    fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    async fn post_query(&self, query: &str) -> Result<String, SearchError> {
        let client = http::build_client(&self.config)?;

        let mut form = vec![("q", query)];
        if self.config.safe_search {
            form.push(("kp", "1"));
        }

        let response = client
            .post(&self.endpoint)
            .form(&form)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| SearchError::Http(format!("DuckDuckGo request failed: {e}")))?;

        response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("DuckDuckGo body unreadable: {e}")))
    }
}

impl SearchProvider for DuckDuckGoEngine {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        validate_request(query, num_results)?;
        tracing::trace!(query, num_results, "querying DuckDuckGo");

        let unavailable = |e: SearchError| SearchError::SearchUnavailable(e.to_string());
        let html = self.post_query(query).await.map_err(unavailable)?;
        let results = parse_results(&html, num_results).map_err(unavailable)?;

        if results.is_empty() {
            return Err(SearchError::SearchUnavailable(
                "DuckDuckGo returned no results".into(),
            ));
        }
        Ok(results)
    }

    fn engine_type(&self) -> SearchEngine {
        SearchEngine::DuckDuckGo
    }
}

/// Resolve a result link to the target URL.
///
/// Links of the form `//duckduckgo.com/l/?uddg=<encoded>&rut=...` are
/// redirects; the target is the decoded `uddg` parameter.
fn resolve_link(href: &str) -> Option<String> {
    let absolute = match href.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => href.to_owned(),
    };
    let parsed = Url::parse(&absolute).ok()?;

    let is_redirect =
        parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/");
    if !is_redirect {
        return Some(absolute);
    }
    parsed
        .query_pairs()
        .find_map(|(key, value)| (key == "uddg").then(|| value.into_owned()))
}

struct Selectors {
    result: Selector,
    link: Selector,
    snippet: Selector,
}

impl Selectors {
    fn new() -> Result<Self, SearchError> {
        let parse = |css: &str| {
            Selector::parse(css)
                .map_err(|e| SearchError::Parse(format!("bad selector {css:?}: {e:?}")))
        };
        Ok(Self {
            result: parse(RESULT_SELECTOR)?,
            link: parse(LINK_SELECTOR)?,
            snippet: parse(SNIPPET_SELECTOR)?,
        })
    }
}

fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Parse a results page into at most `limit` results ranked from 1.
///
/// Blocks without a usable link are skipped and do not consume a rank.
pub(crate) fn parse_results(html: &str, limit: usize) -> Result<Vec<SearchResult>, SearchError> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);

    let results: Vec<SearchResult> = document
        .select(&selectors.result)
        .filter_map(|block| {
            let link = block.select(&selectors.link).next()?;
            let url = link.value().attr("href").and_then(resolve_link)?;
            let snippet = block
                .select(&selectors.snippet)
                .next()
                .map(inner_text)
                .unwrap_or_default();
            Some((url, inner_text(link), snippet))
        })
        .take(limit)
        .enumerate()
        .map(|(index, (url, title, snippet))| SearchResult {
            url,
            rank: index + 1,
            title,
            snippet,
            engine: SearchEngine::DuckDuckGo,
        })
        .collect();

    tracing::debug!(count = results.len(), "parsed DuckDuckGo results");
    Ok(results)
}
