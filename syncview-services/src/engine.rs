//! Recommendation engine
//!
//! Combines interest matching and popularity scoring into one bounded,
//! de-duplicated list. Each call works only on its arguments, the shared
//! read-only topic table, and the supplied clock, so it is safe to run
//! concurrently without locking.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Local};
use syncview_core::{Article, RecommendRequest, RecommendResponse, RecommendedArticle, TopicKeywordTable};
use tracing::{debug, info, instrument};

use crate::candidate::ScoredCandidate;
use crate::interest::InterestMatcher;
use crate::popularity::PopularityScorer;

/// Slot sizes of the recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub interest_slots: usize,
    pub trending_slots: usize,
    pub max_recommendations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            interest_slots: 2,
            trending_slots: 3,
            max_recommendations: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    interest: InterestMatcher,
    popularity: PopularityScorer,
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(topics: Arc<TopicKeywordTable>) -> Self {
        Self::with_config(topics, EngineConfig::default())
    }

    pub fn with_config(topics: Arc<TopicKeywordTable>, config: EngineConfig) -> Self {
        Self {
            interest: InterestMatcher::new(topics),
            popularity: PopularityScorer,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn topics(&self) -> &TopicKeywordTable {
        self.interest.topics()
    }

    /// Handle a `POST /recommend` body using the current wall clock
    pub fn recommend(&self, request: &RecommendRequest) -> RecommendResponse {
        self.recommend_at(request, &Local::now())
    }

    /// Handle a `POST /recommend` body against a fixed "now"
    #[instrument(skip_all, fields(user_id = request.user_id, topic = ?request.topic))]
    pub fn recommend_at(&self, request: &RecommendRequest, now: &DateTime<Local>) -> RecommendResponse {
        let recommended = self.rank_at(request.topic.as_deref(), &request.articles, now);
        info!(
            "Generated {} recommendations (user_id={}, topic={:?})",
            recommended.len(),
            request.user_id,
            request.topic
        );
        RecommendResponse::new(recommended)
    }

    /// Build the ranked list for one batch of articles
    pub fn rank_at(
        &self,
        topic: Option<&str>,
        articles: &[Article],
        now: &DateTime<Local>,
    ) -> Vec<RecommendedArticle> {
        if articles.is_empty() {
            return Vec::new();
        }

        let interest_set = self
            .interest
            .select(topic, articles, self.config.interest_slots);

        let selected: HashSet<Option<&str>> = interest_set
            .iter()
            .map(|candidate| candidate.article.identity())
            .collect();
        let remaining = articles
            .iter()
            .filter(|article| !selected.contains(&article.identity()));

        let trending_set = self
            .popularity
            .select(remaining, self.config.trending_slots, now);

        debug!(
            "Interest: {}, trending: {}",
            interest_set.len(),
            trending_set.len()
        );

        let mut seen: HashSet<Option<&str>> = HashSet::new();
        interest_set
            .into_iter()
            .chain(trending_set)
            .filter(|candidate| seen.insert(candidate.article.identity()))
            .take(self.config.max_recommendations)
            .map(ScoredCandidate::into_recommended)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use syncview_core::{RecommendationReason, Sentiment};

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(TopicKeywordTable::default()))
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap()
    }

    fn request(topic: Option<&str>, articles: Vec<Article>) -> RecommendRequest {
        RecommendRequest {
            user_id: 1,
            topic: topic.map(str::to_string),
            articles,
        }
    }

    fn batch(n: usize) -> Vec<Article> {
        (0..n)
            .map(|i| Article::new(format!("Headline {}", i), "", format!("https://news/{}", i)))
            .collect()
    }

    fn urls(response: &RecommendResponse) -> Vec<&str> {
        response
            .recommended
            .iter()
            .filter_map(|r| r.article.identity())
            .collect()
    }

    #[test]
    fn test_empty_batch() {
        let response = engine().recommend_at(&request(Some("기술"), vec![]), &now());
        assert!(response.recommended.is_empty());
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_fallback_then_trending() {
        let response = engine().recommend_at(&request(None, batch(10)), &now());

        assert_eq!(response.total, 5);
        assert_eq!(
            urls(&response),
            vec!["https://news/0", "https://news/1", "https://news/2", "https://news/3", "https://news/4"]
        );
        let reasons: Vec<RecommendationReason> = response
            .recommended
            .iter()
            .map(|r| r.recommendation_reason)
            .collect();
        assert_eq!(
            reasons,
            vec![
                RecommendationReason::Interest,
                RecommendationReason::Interest,
                RecommendationReason::Trending,
                RecommendationReason::Trending,
                RecommendationReason::Trending,
            ]
        );
    }

    #[test]
    fn test_interest_match_is_excluded_from_trending() {
        let mut articles = batch(4);
        articles[3] = Article::new("AI chip shortage", "", "https://news/ai")
            .with_published((now() - Duration::hours(1)).to_rfc3339())
            .with_sentiment(Sentiment::Positive);

        let response = engine().recommend_at(&request(Some("기술"), articles), &now());

        assert_eq!(response.recommended[0].article.identity(), Some("https://news/ai"));
        assert_eq!(
            response.recommended[0].recommendation_reason,
            RecommendationReason::Interest
        );
        let ai_count = urls(&response)
            .into_iter()
            .filter(|u| *u == "https://news/ai")
            .count();
        assert_eq!(ai_count, 1);
        assert_eq!(response.total, 4);
    }

    #[test]
    fn test_duplicate_urls_collapse() {
        let articles = vec![
            Article::new("a", "", "same"),
            Article::new("b", "", "same"),
            Article::new("c", "", "other"),
            Article::new("d", "", "other"),
        ];
        let response = engine().recommend_at(&request(None, articles), &now());

        let mut seen = HashSet::new();
        assert!(urls(&response).into_iter().all(|u| seen.insert(u)));
        assert_eq!(urls(&response), vec!["same", "other"]);
    }

    #[test]
    fn test_trending_prefers_fresh_positive() {
        let now = now();
        let mut articles = batch(6);
        articles[5] = articles[5]
            .clone()
            .with_published((now - Duration::hours(1)).to_rfc3339())
            .with_sentiment(Sentiment::Positive);
        articles[4] = articles[4].clone().with_sentiment(Sentiment::Negative);

        let response = engine().recommend_at(&request(None, articles), &now);
        assert_eq!(response.recommended[2].article.identity(), Some("https://news/5"));
        assert!(!urls(&response).contains(&"https://news/4"));
    }

    #[test]
    fn test_idempotent_with_frozen_clock() {
        let articles = vec![
            Article::new("Election results", "", "p1").with_published("2025-10-20T08:00:00+00:00"),
            Article::new("Football final", "", "s1").with_sentiment(Sentiment::Positive),
            Article::new("Market slump", "", "e1").with_published("garbage"),
            Article::new("Film festival", "", "c1"),
        ];
        let req = request(Some("정치"), articles);
        let first = engine().recommend_at(&req, &now());
        let second = engine().recommend_at(&req, &now());
        assert_eq!(first.recommended, second.recommended);
        assert_eq!(first.total, second.total);
    }

    #[test]
    fn test_bounded_by_config() {
        let engine = RecommendationEngine::with_config(
            Arc::new(TopicKeywordTable::default()),
            EngineConfig {
                interest_slots: 2,
                trending_slots: 10,
                max_recommendations: 3,
            },
        );
        let response = engine.recommend_at(&request(None, batch(20)), &now());
        assert_eq!(response.total, 3);
    }
}
