//! TF-IDF vectorization over a small in-memory corpus
//!
//! The vocabulary is fitted per call across every document handed in, the
//! target article included. Nothing is cached between calls.

use std::collections::{HashMap, HashSet};

use ndarray::{Array2, ArrayView1, Axis};
use tracing::debug;

use crate::stop_words::is_stop_word;

/// Default vocabulary cap
pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// Fitted TF-IDF representation, one L2-normalized row per input document
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    weights: Array2<f64>,
}

impl TfidfMatrix {
    /// Terms of the fitted vocabulary, in column order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of documents (rows)
    pub fn len(&self) -> usize {
        self.weights.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.nrows() == 0
    }

    /// Vector of the document at `index`
    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.weights.row(index)
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.weights.axis_iter(Axis(0))
    }

    /// Weight of `term` in document `index`, 0.0 if the term is not in the vocabulary
    pub fn weight(&self, index: usize, term: &str) -> f64 {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .map(|col| self.weights[[index, col]])
            .unwrap_or(0.0)
    }
}

/// TF-IDF vectorizer with English stop words and a bounded vocabulary
#[derive(Debug, Clone, Copy)]
pub struct TextVectorizer {
    max_features: usize,
}

impl Default for TextVectorizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

impl TextVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// Lowercase, split into runs of word characters of length >= 2 and drop stop words
    pub fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for c in lowered.chars().chain(std::iter::once(' ')) {
            if c.is_alphanumeric() || c == '_' {
                current.push(c);
                current_len += 1;
                continue;
            }
            if current_len >= 2 && !is_stop_word(&current) {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            current_len = 0;
        }

        tokens
    }

    /// Fit the vocabulary jointly over `documents` and weight each of them
    ///
    /// A document with no surviving terms becomes the zero vector. Never fails.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> TfidfMatrix {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| Self::tokenize(d.as_ref()))
            .collect();

        // Corpus-wide count and document frequency per term
        let mut corpus_counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for tokens in &tokenized {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in tokens {
                let entry = corpus_counts.entry(token.as_str()).or_insert((0, 0));
                entry.0 += 1;
                if seen.insert(token.as_str()) {
                    entry.1 += 1;
                }
            }
        }

        let mut terms: Vec<(&str, usize, usize)> = corpus_counts
            .into_iter()
            .map(|(term, (count, df))| (term, count, df))
            .collect();

        if terms.len() > self.max_features {
            terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            terms.truncate(self.max_features);
        }
        terms.sort_by(|a, b| a.0.cmp(b.0));

        let n_docs = documents.len() as f64;
        let column: HashMap<&str, usize> = terms
            .iter()
            .enumerate()
            .map(|(col, (term, _, _))| (*term, col))
            .collect();
        let idf: Vec<f64> = terms
            .iter()
            .map(|(_, _, df)| ((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let mut weights = Array2::<f64>::zeros((documents.len(), terms.len()));
        for (row, tokens) in tokenized.iter().enumerate() {
            for token in tokens {
                if let Some(&col) = column.get(token.as_str()) {
                    weights[[row, col]] += 1.0;
                }
            }
        }
        for mut row in weights.axis_iter_mut(Axis(0)) {
            row *= &ArrayView1::from(idf.as_slice());
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row /= norm;
            }
        }

        debug!(
            "Fitted TF-IDF: {} documents, {} terms",
            documents.len(),
            terms.len()
        );

        TfidfMatrix {
            vocabulary: terms.into_iter().map(|(term, _, _)| term.to_string()).collect(),
            weights,
        }
    }
}
