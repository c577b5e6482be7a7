//! TF-IDF cosine summariser.

use super::text::split_sentences;
use super::tfidf::TfIdfVectorizer;
use super::Summariser;
use crate::types::ScoredSentence;

/// What each sentence is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelevanceTarget {
    /// The user's query: sentences sharing its terms rank highest.
    #[default]
    Query,
    /// The whole page: sentences most representative of the page rank highest.
    Document,
}

/// Scores every sentence by the cosine similarity of its TF-IDF vector to
/// the query (or the whole page), with the page's sentences as the corpus.
#[derive(Debug, Clone)]
pub struct CosineSummariser {
    target: RelevanceTarget,
    use_idf: bool,
}

impl Default for CosineSummariser {
    fn default() -> Self {
        Self {
            target: RelevanceTarget::Query,
            use_idf: true,
        }
    }
}

impl CosineSummariser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set what sentences are compared against.
    pub fn with_target(mut self, target: RelevanceTarget) -> Self {
        self.target = target;
        self
    }

    /// Enable or disable IDF weighting.
    pub fn with_idf(mut self, use_idf: bool) -> Self {
        self.use_idf = use_idf;
        self
    }
}

impl Summariser for CosineSummariser {
    fn score_sentences(&self, text: &str, query: &str) -> Vec<ScoredSentence> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Vec::new();
        }

        let mut vectorizer = TfIdfVectorizer::new(self.use_idf);
        let vectors = vectorizer.fit_transform(&sentences);
        let reference = match self.target {
            RelevanceTarget::Query => vectorizer.transform(query),
            RelevanceTarget::Document => vectorizer.transform(text),
        };

        sentences
            .iter()
            .zip(&vectors)
            .enumerate()
            .map(|(position, (sentence, vector))| ScoredSentence {
                text: (*sentence).to_owned(),
                score: vector.cosine_similarity(&reference),
                position,
            })
            .collect()
    }
}
