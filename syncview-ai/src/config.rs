//! AI service connection settings

use std::time::Duration;

/// Where the AI service lives and how long each operation may take
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiServiceConfig {
    pub base_url: String,
    pub sentiment_timeout: Duration,
    pub summarize_timeout: Duration,
    pub translate_timeout: Duration,
}

impl AiServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sentiment_timeout: Duration::from_secs(30),
            summarize_timeout: Duration::from_secs(120),
            translate_timeout: Duration::from_secs(120),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_trailing_slash() {
        let config = AiServiceConfig::new("http://ai.local/");
        assert_eq!(config.base_url, "http://ai.local");
        assert_eq!(config.sentiment_timeout, Duration::from_secs(30));
        assert_eq!(config.summarize_timeout, Duration::from_secs(120));
        assert_eq!(config.translate_timeout, Duration::from_secs(120));
    }
}
