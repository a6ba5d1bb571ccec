//! Related-article search behind `POST /similarity`

use syncview_core::{CandidateArticle, SimilarityRequest, SimilarityResult, TargetArticle};
use tracing::{debug, instrument};

use crate::similarity::SimilarityScorer;
use crate::vectorizer::{TextVectorizer, DEFAULT_MAX_FEATURES};

/// Thresholds for related-article search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelatednessConfig {
    /// Candidates below this raw similarity are dropped
    pub min_similarity: f64,
    /// Maximum number of results returned
    pub max_results: usize,
    /// Vocabulary cap of the per-request TF-IDF fit
    pub max_features: usize,
}

impl Default for RelatednessConfig {
    fn default() -> Self {
        Self {
            min_similarity: 0.30,
            max_results: 5,
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

/// Find the articles most similar to `target`
///
/// The TF-IDF vocabulary is fitted over the target and all candidates
/// together, so scores depend on which candidates share the batch.
/// An empty/blank target or an empty candidate list returns no results
/// without vectorizing anything.
#[instrument(skip_all, fields(candidates = candidates.len()))]
pub fn find_related_articles(
    target: &TargetArticle,
    candidates: &[CandidateArticle],
    config: &RelatednessConfig,
) -> Vec<SimilarityResult> {
    let target_text = target.content_text();
    if target_text.trim().is_empty() || candidates.is_empty() {
        return Vec::new();
    }

    let corpus: Vec<String> = std::iter::once(target_text)
        .chain(candidates.iter().map(CandidateArticle::content_text))
        .collect();

    let matrix = TextVectorizer::new(config.max_features).fit_transform(&corpus);
    let scores = SimilarityScorer.score_against_first(&matrix);

    let mut results: Vec<SimilarityResult> = scores
        .into_iter()
        .filter(|(_, similarity)| *similarity >= config.min_similarity)
        .map(|(index, similarity)| {
            let candidate = &candidates[index];
            SimilarityResult {
                index,
                similarity: round2(similarity),
                title: candidate.title.clone(),
                url: candidate.url.clone(),
            }
        })
        .collect();

    // Stable: equal rounded scores keep candidate order
    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(config.max_results);

    debug!("Found {} related articles", results.len());
    results
}

/// Resolve a `POST /similarity` body; a missing target yields no results
pub fn related_for_request(
    request: &SimilarityRequest,
    config: &RelatednessConfig,
) -> Vec<SimilarityResult> {
    match &request.target_article {
        Some(target) => find_related_articles(target, &request.articles, config),
        None => Vec::new(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(title: &str, summary: &str, url: &str) -> CandidateArticle {
        CandidateArticle {
            title: title.to_string(),
            summary: summary.to_string(),
            url: url.to_string(),
        }
    }

    fn target(title: &str, summary: &str) -> TargetArticle {
        TargetArticle {
            title: title.to_string(),
            summary: summary.to_string(),
        }
    }

    #[test]
    fn test_empty_target_returns_nothing() {
        let candidates = vec![candidate("Fed raises rates", "", "u1")];
        let results =
            find_related_articles(&target("  ", ""), &candidates, &RelatednessConfig::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_candidates_return_nothing() {
        let results = find_related_articles(
            &target("Fed raises rates", ""),
            &[],
            &RelatednessConfig::default(),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_request_without_target_or_with_empty_object() {
        let config = RelatednessConfig::default();

        let missing: SimilarityRequest = serde_json::from_value(json!({
            "articles": [{"title": "Fed raises rates", "url": "u1"}]
        }))
        .unwrap();
        assert!(related_for_request(&missing, &config).is_empty());

        let empty: SimilarityRequest = serde_json::from_value(json!({
            "target_article": {},
            "articles": [{"title": "Fed raises rates", "url": "u1"}]
        }))
        .unwrap();
        assert!(related_for_request(&empty, &config).is_empty());
    }

    #[test]
    fn test_threshold_order_and_bound() {
        let candidates = vec![
            candidate("Local bakery opens", "fresh bread daily", "bakery"),
            candidate("Central bank raises interest rates", "inflation fight", "rates-1"),
            candidate("Central bank raises rates again", "inflation persists", "rates-2"),
            candidate("Football final tonight", "", "football"),
        ];

        let results = find_related_articles(
            &target("Central bank raises rates", "inflation"),
            &candidates,
            &RelatednessConfig::default(),
        );

        assert!(!results.is_empty());
        assert!(results.len() <= 5);
        assert!(results
            .iter()
            .all(|r| r.similarity >= 0.30 && r.similarity <= 1.0));
        assert!(results.windows(2).all(|w| w[0].similarity >= w[1].similarity));

        let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
        assert!(urls.contains(&"rates-1"));
        assert!(urls.contains(&"rates-2"));
        assert!(!urls.contains(&"bakery"));
        assert!(!urls.contains(&"football"));
    }

    #[test]
    fn test_identical_candidates_keep_input_order() {
        let candidates: Vec<CandidateArticle> = (0..7)
            .map(|i| candidate("Rocket launch delayed", "weather", &format!("u{}", i)))
            .collect();

        let results = find_related_articles(
            &target("Rocket launch delayed", "weather"),
            &candidates,
            &RelatednessConfig::default(),
        );

        let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert!(results.iter().all(|r| (r.similarity - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_stop_word_only_corpus_is_empty_not_error() {
        let candidates = vec![candidate("the and", "of it", "u1")];
        let results =
            find_related_articles(&target("the", "is"), &candidates, &RelatednessConfig::default());
        assert!(results.is_empty());
    }
}
