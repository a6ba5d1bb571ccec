//! Cosine similarity calculations

use ndarray::ArrayView1;
use tracing::debug;

use crate::vectorizer::TfidfMatrix;

/// Calculate cosine similarity between two TF-IDF vectors
///
/// Formula: cos(θ) = (A · B) / (||A|| ||B||)
///
/// A zero vector on either side yields 0.0. The result is clamped to
/// [0.0, 1.0], which is exact for the non-negative weights TF-IDF produces.
pub fn cosine_similarity(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must share the same vocabulary");

    let dot_product = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    // Avoid division by zero
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Scores one target vector against every candidate vector
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    /// `(index, similarity)` for every candidate, in candidate order, unfiltered
    pub fn score<'a>(
        &self,
        target: ArrayView1<'_, f64>,
        candidates: impl IntoIterator<Item = ArrayView1<'a, f64>>,
    ) -> Vec<(usize, f64)> {
        candidates
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| (index, cosine_similarity(target, candidate)))
            .collect()
    }

    /// Score row 0 of a fitted matrix against the remaining rows
    ///
    /// Candidate indices are relative to row 1.
    pub fn score_against_first(&self, matrix: &TfidfMatrix) -> Vec<(usize, f64)> {
        if matrix.is_empty() {
            return Vec::new();
        }

        let scores = self.score(matrix.row(0), matrix.rows().skip(1));
        debug!("Scored {} candidates against target", scores.len());
        scores
    }
}
