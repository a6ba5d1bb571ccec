//! Request and response payloads of the HTTP surface
//!
//! Every field carries an explicit default so partially filled bodies from
//! the frontend decode instead of being rejected.

use serde::{Deserialize, Serialize};

use crate::article::{lenient_string, lenient_vec, Article, RecommendedArticle};

/// Article whose related articles are requested
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetArticle {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,
}

impl TargetArticle {
    pub fn content_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// Candidate article for related-article search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateArticle {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

impl CandidateArticle {
    pub fn content_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// Body of `POST /similarity`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimilarityRequest {
    #[serde(default)]
    pub target_article: Option<TargetArticle>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub articles: Vec<CandidateArticle>,
}

/// Body of `POST /recommend`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub user_id: i64,
    /// Declared interest (정치, 경제, 기술, 스포츠, 문화)
    #[serde(default)]
    pub topic: Option<String>,
    /// One page of aggregated headlines
    #[serde(default, deserialize_with = "lenient_vec")]
    pub articles: Vec<Article>,
}

/// Response of `POST /recommend`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommended: Vec<RecommendedArticle>,
    pub total: usize,
}

impl RecommendResponse {
    pub fn new(recommended: Vec<RecommendedArticle>) -> Self {
        let total = recommended.len();
        Self { recommended, total }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResponse {
    /// positive | negative | neutral
    pub sentiment: String,
    /// Display label (긍정, 부정, 중립)
    pub label: String,
    /// Confidence (0.0 - 1.0), two decimals
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_min_length")]
    pub min_length: u32,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_length: default_max_length(),
            min_length: default_min_length(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

fn default_max_length() -> u32 {
    130
}

fn default_min_length() -> u32 {
    30
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "ko".to_string()
}
