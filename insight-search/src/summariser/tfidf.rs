//! TF-IDF vectorisation over a small corpus of sentences.
//!
//! Term frequencies are raw counts. With IDF enabled each term is weighted
//! by the smoothed inverse document frequency `ln((1 + n) / (1 + df)) + 1`.
//! Every vector is L2-normalised, so cosine similarity is a dot product.

use super::text::tokenize;
use std::collections::{BTreeMap, HashMap};

/// A sparse, L2-normalised term vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    weights: BTreeMap<usize, f64>,
}

impl SparseVector {
    fn normalised(mut weights: BTreeMap<usize, f64>) -> Self {
        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in weights.values_mut() {
                *w /= norm;
            }
        }
        Self { weights }
    }

    /// Cosine similarity with `other`; `0.0` if either vector is empty.
    pub fn cosine_similarity(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (&self.weights, &other.weights)
        } else {
            (&other.weights, &self.weights)
        };
        small
            .iter()
            .filter_map(|(term, w)| large.get(term).map(|o| w * o))
            .sum()
    }

    /// Returns `true` if no known term occurs in the vector.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Learns a vocabulary from a corpus and turns text into [`SparseVector`]s.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    use_idf: bool,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TfIdfVectorizer {
    /// Create an unfitted vectoriser. With `use_idf == false` only term
    /// frequencies are used.
    pub fn new(use_idf: bool) -> Self {
        Self {
            use_idf,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    /// Learn the vocabulary and document frequencies of `documents`,
    /// replacing anything learnt before.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        self.vocabulary.clear();
        let mut document_frequency: Vec<usize> = Vec::new();

        for document in documents {
            let mut seen: Vec<usize> = tokenize(document.as_ref())
                .into_iter()
                .map(|term| {
                    let next = self.vocabulary.len();
                    *self.vocabulary.entry(term).or_insert(next)
                })
                .collect();
            seen.sort_unstable();
            seen.dedup();

            document_frequency.resize(self.vocabulary.len(), 0);
            for index in seen {
                document_frequency[index] += 1;
            }
        }

        let n = documents.len() as f64;
        self.idf = document_frequency
            .into_iter()
            .map(|df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
    }

    /// Vectorise `text` against the learnt vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut weights: BTreeMap<usize, f64> = BTreeMap::new();
        for term in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *weights.entry(index).or_insert(0.0) += 1.0;
            }
        }
        if self.use_idf {
            for (index, weight) in weights.iter_mut() {
                *weight *= self.idf[*index];
            }
        }
        SparseVector::normalised(weights)
    }

    /// Fit on `documents` and return their vectors in input order.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<SparseVector> {
        self.fit(documents);
        documents.iter().map(|d| self.transform(d.as_ref())).collect()
    }

    /// Number of distinct terms learnt by the last [`fit`](Self::fit).
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn identical_texts_have_similarity_one() {
        let mut vectorizer = TfIdfVectorizer::default();
        let vectors = vectorizer.fit_transform(&["rust is fast", "rust is fast"]);
        assert!((vectors[0].cosine_similarity(&vectors[1]) - 1.0).abs() < EPS);
    }

    #[test]
    fn disjoint_texts_have_similarity_zero() {
        let mut vectorizer = TfIdfVectorizer::default();
        let vectors = vectorizer.fit_transform(&["rust language", "green apples"]);
        assert!(vectors[0].cosine_similarity(&vectors[1]).abs() < EPS);
    }

    #[test]
    fn unknown_terms_are_ignored() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&["rust language"]);
        assert!(vectorizer.transform("python snakes").is_empty());
        assert_eq!(vectorizer.vocabulary_len(), 2);
    }

    #[test]
    fn vectors_are_unit_length() {
        let mut vectorizer = TfIdfVectorizer::default();
        let vectors = vectorizer.fit_transform(&["one two two three", "three four"]);
        for v in &vectors {
            assert!((v.cosine_similarity(v) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn idf_downweights_common_terms() {
        let corpus = ["the cat sat", "the dog ran", "the bird flew"];
        let mut with_idf = TfIdfVectorizer::new(true);
        with_idf.fit(&corpus);
        let mut without_idf = TfIdfVectorizer::new(false);
        without_idf.fit(&corpus);

        let query = "the cat";
        let common = with_idf
            .transform(query)
            .cosine_similarity(&with_idf.transform("the"));
        let common_tf = without_idf
            .transform(query)
            .cosine_similarity(&without_idf.transform("the"));
        assert!(common < common_tf);
    }

    #[test]
    fn refit_replaces_vocabulary() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&["alpha beta"]);
        vectorizer.fit(&["gamma"]);
        assert_eq!(vectorizer.vocabulary_len(), 1);
        assert!(vectorizer.transform("alpha").is_empty());
    }

    #[test]
    fn empty_corpus_is_harmless() {
        let mut vectorizer = TfIdfVectorizer::default();
        let vectors = vectorizer.fit_transform::<&str>(&[]);
        assert!(vectors.is_empty());
        assert!(vectorizer.transform("anything").is_empty());
    }
}
