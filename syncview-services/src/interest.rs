//! Interest matching against the topic keyword table

use std::sync::Arc;

use syncview_core::{Article, RecommendationReason, TopicKeywordTable};
use tracing::debug;

use crate::candidate::{rank_by_score, ScoredCandidate};

/// Scores articles by how many of a topic's keywords they mention
#[derive(Debug, Clone)]
pub struct InterestMatcher {
    topics: Arc<TopicKeywordTable>,
}

impl InterestMatcher {
    pub fn new(topics: Arc<TopicKeywordTable>) -> Self {
        Self { topics }
    }

    pub fn topics(&self) -> &TopicKeywordTable {
        &self.topics
    }

    /// Fraction of `keywords` found as case-insensitive substrings of title + summary
    pub fn score(keywords: &[String], article: &Article) -> f64 {
        if keywords.is_empty() {
            return 0.0;
        }
        let content = article.content_text().to_lowercase();
        let matched = keywords
            .iter()
            .filter(|keyword| content.contains(keyword.as_str()))
            .count();
        matched as f64 / keywords.len() as f64
    }

    /// Pick up to `slots` articles for the interest section
    ///
    /// Articles that match none of the topic's keywords are skipped; the rest
    /// are ranked by score with ties in input order. When the topic is absent,
    /// unknown, or nothing matches, the first `slots` articles are returned
    /// as-is so the section is never empty for a non-empty batch. That
    /// fallback is a presentation policy, not a relevance judgement, and its
    /// entries carry a score of 0.0.
    pub fn select<'a>(
        &self,
        topic: Option<&str>,
        articles: &'a [Article],
        slots: usize,
    ) -> Vec<ScoredCandidate<'a>> {
        if let Some(keywords) = topic.and_then(|t| self.topics.keywords(t)) {
            let mut matched: Vec<ScoredCandidate<'a>> = articles
                .iter()
                .map(|article| {
                    ScoredCandidate::new(
                        article,
                        Self::score(keywords, article),
                        RecommendationReason::Interest,
                    )
                })
                .filter(|candidate| candidate.score > 0.0)
                .collect();

            if !matched.is_empty() {
                rank_by_score(&mut matched);
                matched.truncate(slots);
                debug!("{} interest matches for topic {:?}", matched.len(), topic);
                return matched;
            }
        }

        debug!("No interest matches for topic {:?}, using leading articles", topic);
        articles
            .iter()
            .take(slots)
            .map(|article| ScoredCandidate::new(article, 0.0, RecommendationReason::Interest))
            .collect()
    }
}
