//! Popularity scoring by recency and sentiment

use chrono::{DateTime, Local};
use syncview_core::{Article, RecommendationReason, Sentiment};
use tracing::debug;

use crate::candidate::{rank_by_score, ScoredCandidate};
use crate::published::PublishedAt;

/// Recency bonus for articles newer than 24 hours
pub const FRESH_BONUS: f64 = 10.0;
/// Recency bonus for articles newer than 48 hours
pub const RECENT_BONUS: f64 = 5.0;
/// Recency bonus for articles newer than 72 hours
pub const AGING_BONUS: f64 = 2.0;
/// Recency bonus for older or undated articles
pub const STALE_BONUS: f64 = 1.0;

/// Ranks articles by recency tier plus sentiment weight
#[derive(Debug, Clone, Copy, Default)]
pub struct PopularityScorer;

impl PopularityScorer {
    /// Recency sub-score of a raw `published` value
    pub fn recency_score(published: Option<&str>, now: &DateTime<Local>) -> f64 {
        let Some(published_at) = published.and_then(PublishedAt::parse) else {
            return STALE_BONUS;
        };

        let hours = published_at.hours_before(now);
        if hours < 24.0 {
            FRESH_BONUS
        } else if hours < 48.0 {
            RECENT_BONUS
        } else if hours < 72.0 {
            AGING_BONUS
        } else {
            STALE_BONUS
        }
    }

    /// Sentiment sub-score; an article without a label weighs as neutral
    pub fn sentiment_score(sentiment: Option<&Sentiment>) -> f64 {
        match sentiment {
            Some(Sentiment::Positive) => 5.0,
            Some(Sentiment::Neutral) | None => 2.0,
            Some(Sentiment::Negative) | Some(Sentiment::Other(_)) => 0.0,
        }
    }

    pub fn score(&self, article: &Article, now: &DateTime<Local>) -> f64 {
        Self::recency_score(article.published.as_deref(), now)
            + Self::sentiment_score(article.sentiment.as_ref())
    }

    /// Pick up to `slots` trending articles, ties in input order
    pub fn select<'a>(
        &self,
        articles: impl IntoIterator<Item = &'a Article>,
        slots: usize,
        now: &DateTime<Local>,
    ) -> Vec<ScoredCandidate<'a>> {
        let mut scored: Vec<ScoredCandidate<'a>> = articles
            .into_iter()
            .map(|article| {
                ScoredCandidate::new(
                    article,
                    self.score(article, now),
                    RecommendationReason::Trending,
                )
            })
            .collect();

        debug!("Scored {} trending candidates", scored.len());
        rank_by_score(&mut scored);
        scored.truncate(slots);
        scored
    }
}
