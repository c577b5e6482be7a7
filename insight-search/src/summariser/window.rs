//! Context-window summariser.
//!
//! A naive alternative to [`super::CosineSummariser`]: every query-term hit
//! opens a window of `pre` words before it and `post` words after it. A hit
//! inside an open window extends it to `(remaining + post) * 2` words, so
//! clusters of query terms produce longer fragments. Each window becomes
//! one verbatim fragment scored by its number of hits.

use super::text::{normalise_word, split_sentences, word_spans};
use super::Summariser;
use crate::types::ScoredSentence;
use std::collections::HashSet;

/// Summariser that returns the text surrounding query-term hits.
#[derive(Debug, Clone)]
pub struct WindowSummariser {
    pre: usize,
    post: usize,
}

impl Default for WindowSummariser {
    fn default() -> Self {
        Self { pre: 5, post: 5 }
    }
}

impl WindowSummariser {
    /// Create a summariser keeping `pre` words before and `post` words
    /// after each hit.
    pub fn new(pre: usize, post: usize) -> Self {
        Self { pre, post }
    }
}

/// An open window over word indices of one sentence.
struct Window {
    first: usize,
    last: usize,
    hits: usize,
}

impl Summariser for WindowSummariser {
    fn score_sentences(&self, text: &str, query: &str) -> Vec<ScoredSentence> {
        let terms: HashSet<String> = query
            .split(|c: char| !c.is_alphanumeric())
            .map(normalise_word)
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut fragments = Vec::new();
        for sentence in split_sentences(text) {
            let spans = word_spans(sentence);
            let mut emit = |window: Window| {
                let position = fragments.len();
                fragments.push(ScoredSentence {
                    text: sentence[spans[window.first].0..spans[window.last].1].to_owned(),
                    score: window.hits as f64,
                    position,
                });
            };

            let mut open: Option<Window> = None;
            let mut remaining = 0usize;
            let mut next_free = 0usize;

            for (index, &(start, end)) in spans.iter().enumerate() {
                let hit = terms.contains(&normalise_word(&sentence[start..end]));
                match open.as_mut() {
                    Some(window) if hit => {
                        window.last = index;
                        window.hits += 1;
                        remaining = remaining.saturating_add(self.post).saturating_mul(2);
                    }
                    Some(window) => {
                        window.last = index;
                        remaining -= 1;
                    }
                    None if hit => {
                        open = Some(Window {
                            first: index.saturating_sub(self.pre).max(next_free),
                            last: index,
                            hits: 1,
                        });
                        remaining = self.post;
                    }
                    None => {}
                }

                if remaining == 0 {
                    if let Some(window) = open.take() {
                        next_free = window.last + 1;
                        emit(window);
                    }
                }
            }

            if let Some(window) = open.take() {
                emit(window);
            }
        }
        fragments
    }
}
