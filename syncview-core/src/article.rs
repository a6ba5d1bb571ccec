//! Article data structures consumed and produced by the relevance engine

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Sentiment label attached by the upstream enrichment step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    /// Any label outside the closed set, kept verbatim so it round-trips
    Other(String),
}

impl Sentiment {
    pub fn as_str(&self) -> &str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Other(label) => label,
        }
    }

    /// Korean display label used by the frontend badges
    pub fn display_label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "긍정",
            Sentiment::Negative => "부정",
            Sentiment::Neutral | Sentiment::Other(_) => "중립",
        }
    }
}

impl From<&str> for Sentiment {
    fn from(label: &str) -> Self {
        match label {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            "neutral" => Sentiment::Neutral,
            other => Sentiment::Other(other.to_string()),
        }
    }
}

impl Serialize for Sentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Scraped payloads occasionally carry numbers or objects here
        Ok(match Value::deserialize(deserializer)? {
            Value::String(label) => Sentiment::from(label.as_str()),
            other => Sentiment::Other(other.to_string()),
        })
    }
}

/// Why an article ended up in a recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationReason {
    /// Selected by the user's declared interest
    Interest,
    /// Selected by recency and sentiment popularity
    Trending,
}

/// A news article as delivered by the feed layer
///
/// Missing or malformed text fields decode to empty strings rather than
/// failing the request. Fields the engine does not know about are kept in
/// `extra` and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article headline
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Brief summary/excerpt
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,
    /// Article URL, the identity key within one batch
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    /// Free-form publication timestamp
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub published: Option<String>,
    /// Enrichment label, absent when the sentiment service was not consulted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    /// Passthrough fields (source, image, category, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = Some(published.into());
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    /// Identity key used for dedup and exclusion
    pub fn identity(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Title and summary joined the way every text signal reads them
    pub fn content_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// An article tagged with the reason it was recommended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub recommendation_reason: RecommendationReason,
}

impl RecommendedArticle {
    pub fn new(mut article: Article, reason: RecommendationReason) -> Self {
        // The engine's tag wins over anything the caller sent
        article.extra.remove("recommendation_reason");
        Self {
            article,
            recommendation_reason: reason,
        }
    }
}

/// A related article found by text similarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Position of the candidate in the request's `articles` list
    pub index: usize,
    /// Cosine similarity (0.0 - 1.0), rounded to two decimals
    pub similarity: f64,
    pub title: String,
    pub url: String,
}

pub(crate) fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

/// A `null` list decodes as empty
pub(crate) fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
