//! Extractive summarisation of page text.
//!
//! A [`Summariser`] scores the sentences of one page against the user's
//! query; the highest-scoring ones become that page's summary. Two
//! implementations are provided: [`CosineSummariser`] (TF-IDF cosine
//! similarity, the default) and [`WindowSummariser`] (context windows
//! around query terms).

pub mod cosine;
pub mod text;
pub mod tfidf;
pub mod window;

pub use cosine::{CosineSummariser, RelevanceTarget};
pub use window::WindowSummariser;

use crate::types::ScoredSentence;

/// Scores page text against a query.
pub trait Summariser: Send + Sync {
    /// Score every sentence (or fragment) of `text`, in document order.
    ///
    /// Returned texts must be verbatim slices of `text`.
    fn score_sentences(&self, text: &str, query: &str) -> Vec<ScoredSentence>;

    /// The `max_sentences` highest-scoring sentences, best first.
    fn summarise(&self, text: &str, query: &str, max_sentences: usize) -> Vec<ScoredSentence> {
        top_sentences(self.score_sentences(text, query), max_sentences)
    }
}

/// Keep the `k` best sentences, ordered by descending score and then by
/// document position.
pub fn top_sentences(mut scored: Vec<ScoredSentence>, k: usize) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.position.cmp(&b.position))
    });
    scored.truncate(k);
    scored
}
