//! Topic → keyword configuration for interest matching
//!
//! Loaded once at startup and shared read-only for the life of the process.

use std::path::Path;

use indexmap::IndexMap;
use tracing::info;

use crate::error::{SyncviewError, SyncviewResult};

/// Keyword lists of the deployed service, one entry per selectable interest
const DEFAULT_TOPICS: &[(&str, &[&str])] = &[
    (
        "정치",
        &[
            "election", "government", "politics", "minister", "president", "policy", "vote",
            "parliament", "congress",
        ],
    ),
    (
        "경제",
        &[
            "economy", "market", "finance", "stock", "trade", "business", "investment",
            "inflation", "GDP", "bank",
        ],
    ),
    (
        "기술",
        &[
            "technology", "AI", "software", "digital", "innovation", "tech", "smartphone",
            "computer", "cyber", "robot", "space",
        ],
    ),
    (
        "스포츠",
        &[
            "sports", "football", "soccer", "basketball", "olympic", "game", "player", "team",
            "match", "tournament",
        ],
    ),
    (
        "문화",
        &[
            "culture", "movie", "music", "art", "entertainment", "film", "celebrity", "festival",
            "book", "theater",
        ],
    ),
];

/// Immutable mapping of topic labels to lowercase keyword lists
#[derive(Debug, Clone, PartialEq)]
pub struct TopicKeywordTable {
    topics: IndexMap<String, Vec<String>>,
}

impl TopicKeywordTable {
    /// Build a table, lowercasing and de-duplicating keywords
    ///
    /// Fails if the table is empty or any topic ends up without keywords.
    pub fn from_map(raw: IndexMap<String, Vec<String>>) -> SyncviewResult<Self> {
        if raw.is_empty() {
            return Err(SyncviewError::config("topic keyword table is empty"));
        }

        let mut topics = IndexMap::with_capacity(raw.len());
        for (topic, keywords) in raw {
            let mut normalized: Vec<String> = Vec::with_capacity(keywords.len());
            for keyword in keywords {
                let keyword = keyword.trim().to_lowercase();
                if !keyword.is_empty() && !normalized.contains(&keyword) {
                    normalized.push(keyword);
                }
            }

            if normalized.is_empty() {
                return Err(SyncviewError::config(format!(
                    "topic '{}' has no keywords",
                    topic
                )));
            }
            topics.insert(topic, normalized);
        }

        Ok(Self { topics })
    }

    /// Parse a `{ "<topic>": ["kw", ...] }` JSON document
    pub fn from_json_str(json: &str) -> SyncviewResult<Self> {
        let raw: IndexMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| SyncviewError::parse(format!("invalid topic keyword JSON: {}", e)))?;
        Self::from_map(raw)
    }

    /// Load the table from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> SyncviewResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SyncviewError::config(format!(
                "failed to read topic keywords from {}: {}",
                path.display(),
                e
            ))
        })?;
        let table = Self::from_json_str(&json)?;
        info!(
            "Loaded {} topics from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Keywords for a topic, `None` for labels outside the table
    pub fn keywords(&self, topic: &str) -> Option<&[String]> {
        self.topics.get(topic).map(Vec::as_slice)
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for TopicKeywordTable {
    fn default() -> Self {
        let topics = DEFAULT_TOPICS
            .iter()
            .map(|(topic, keywords)| {
                (
                    topic.to_string(),
                    keywords.iter().map(|k| k.to_lowercase()).collect(),
                )
            })
            .collect();
        Self { topics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_lowercase() {
        let table = TopicKeywordTable::default();
        assert_eq!(table.len(), 5);

        let tech = table.keywords("기술").unwrap();
        assert_eq!(tech.len(), 11);
        assert!(tech.contains(&"ai".to_string()));
        assert!(table.keywords("경제").unwrap().contains(&"gdp".to_string()));
        assert!(table.keywords("weather").is_none());
    }

    #[test]
    fn test_topics_keep_declaration_order() {
        let table = TopicKeywordTable::default();
        let topics: Vec<&str> = table.topics().collect();
        assert_eq!(topics, vec!["정치", "경제", "기술", "스포츠", "문화"]);
    }

    #[test]
    fn test_from_json_normalizes_keywords() {
        let table =
            TopicKeywordTable::from_json_str(r#"{"science": ["NASA", "nasa", " Physics "]}"#)
                .unwrap();
        assert_eq!(
            table.keywords("science").unwrap(),
            &["nasa".to_string(), "physics".to_string()]
        );
    }

    #[test]
    fn test_rejects_empty_topic() {
        let err = TopicKeywordTable::from_json_str(r#"{"science": ["  "]}"#).unwrap_err();
        assert!(matches!(err, SyncviewError::Config(_)));

        let err = TopicKeywordTable::from_json_str("{}").unwrap_err();
        assert!(matches!(err, SyncviewError::Config(_)));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = TopicKeywordTable::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, SyncviewError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TopicKeywordTable::from_path("/nonexistent/topics.json").unwrap_err();
        assert!(matches!(err, SyncviewError::Config(_)));
    }
}
