//! Transient scoring wrapper shared by the matchers and the engine

use std::cmp::Ordering;

use syncview_core::{Article, RecommendationReason, RecommendedArticle};

/// An article with the score and provenance it was selected under
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub article: &'a Article,
    pub score: f64,
    pub reason: RecommendationReason,
}

impl<'a> ScoredCandidate<'a> {
    pub fn new(article: &'a Article, score: f64, reason: RecommendationReason) -> Self {
        Self {
            article,
            score,
            reason,
        }
    }

    pub fn into_recommended(self) -> RecommendedArticle {
        RecommendedArticle::new(self.article.clone(), self.reason)
    }
}

/// Sort by score descending; ties keep input order
pub(crate) fn rank_by_score(candidates: &mut [ScoredCandidate<'_>]) {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
