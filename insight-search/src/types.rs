//! Core types for search results, fetched pages and summaries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ranked result returned by a search provider.
///
/// Lives only for the duration of one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The URL of the result page.
    pub url: String,
    /// 1-based position in the provider's ranking.
    pub rank: usize,
    /// Title of the result, empty when the provider has none.
    pub title: String,
    /// Snippet shown by the provider, empty when absent.
    pub snippet: String,
    /// Which search engine returned this result.
    pub engine: SearchEngine,
}

/// Search engines registered with insight-search.
///
/// New providers are added as further variants implementing
/// [`crate::engine::SearchProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchEngine {
    /// DuckDuckGo HTML endpoint, general web search.
    DuckDuckGo,
}

impl SearchEngine {
    /// Returns the human-readable name of this engine.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// Returns all available engine variants.
    pub fn all() -> &'static [SearchEngine] {
        &[Self::DuckDuckGo]
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extracted readable content from a fetched web page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    /// The URL that was fetched.
    pub url: String,
    /// The page title extracted from HTML.
    pub title: String,
    /// Visible text with markup and boilerplate removed.
    pub text: String,
    /// Number of words in the extracted text.
    pub word_count: usize,
}

/// A sentence (or sentence fragment) with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Verbatim text taken from the page.
    pub text: String,
    /// Relevance score, higher is better.
    pub score: f64,
    /// Index of the sentence within the page, in document order.
    pub position: usize,
}

/// The summary of one fetched page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    /// URL of the summarised page.
    pub url: String,
    /// Rank of the page in the search results.
    pub rank: usize,
    /// Page title, empty when the page has none.
    pub title: String,
    /// Top sentences, highest score first. Empty when the page had no
    /// extractable sentences.
    pub sentences: Vec<ScoredSentence>,
}

impl PageSummary {
    /// Returns `true` if no sentences were extracted from the page.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The selected sentences joined with a single space.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str, score: f64, position: usize) -> ScoredSentence {
        ScoredSentence {
            text: text.into(),
            score,
            position,
        }
    }

    #[test]
    fn search_result_serde_round_trip() {
        let result = SearchResult {
            url: "https://test.com".into(),
            rank: 1,
            title: "Test".into(),
            snippet: "snippet".into(),
            engine: SearchEngine::DuckDuckGo,
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: SearchResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, result);
    }

    #[test]
    fn search_engine_display() {
        assert_eq!(SearchEngine::DuckDuckGo.to_string(), "DuckDuckGo");
    }

    #[test]
    fn search_engine_all() {
        let all = SearchEngine::all();
        assert_eq!(all.len(), 1);
        assert!(all.contains(&SearchEngine::DuckDuckGo));
    }

    #[test]
    fn page_summary_text_joins_sentences() {
        let summary = PageSummary {
            url: "https://example.com".into(),
            rank: 1,
            title: String::new(),
            sentences: vec![sentence("First one.", 0.9, 2), sentence("Second.", 0.4, 0)],
        };
        assert!(!summary.is_empty());
        assert_eq!(summary.text(), "First one. Second.");
    }

    #[test]
    fn empty_page_summary() {
        let summary = PageSummary {
            url: "https://example.com".into(),
            rank: 3,
            title: String::new(),
            sentences: vec![],
        };
        assert!(summary.is_empty());
        assert_eq!(summary.text(), "");
    }

    #[test]
    fn page_summary_serialises_sentences() {
        let summary = PageSummary {
            url: "https://example.com".into(),
            rank: 1,
            title: "Example".into(),
            sentences: vec![sentence("Hello there.", 1.0, 0)],
        };
        let json = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(json["sentences"][0]["text"], "Hello there.");
        assert_eq!(json["rank"], 1);
    }
}
