//! Server configuration read from the environment

use std::path::PathBuf;
use std::time::Duration;

use syncview_ai::AiServiceConfig;
use syncview_core::{SyncviewError, SyncviewResult};

/// Runtime configuration of the API server
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Absent when `AI_SERVICE_URL` is unset; enrichments then run locally
    pub ai: Option<AiServiceConfig>,
    /// Optional JSON override of the built-in topic keyword table
    pub topic_keywords_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> SyncviewResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> SyncviewResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = parse_or(get("SERVER_PORT"), "SERVER_PORT", 8000u16)?;
        let host = get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let ai = match get("AI_SERVICE_URL") {
            Some(url) => {
                let mut ai = AiServiceConfig::new(url);
                ai.sentiment_timeout = Duration::from_secs(parse_or(
                    get("AI_SENTIMENT_TIMEOUT_SECS"),
                    "AI_SENTIMENT_TIMEOUT_SECS",
                    30u64,
                )?);
                ai.summarize_timeout = Duration::from_secs(parse_or(
                    get("AI_SUMMARIZE_TIMEOUT_SECS"),
                    "AI_SUMMARIZE_TIMEOUT_SECS",
                    120u64,
                )?);
                ai.translate_timeout = Duration::from_secs(parse_or(
                    get("AI_TRANSLATE_TIMEOUT_SECS"),
                    "AI_TRANSLATE_TIMEOUT_SECS",
                    120u64,
                )?);
                Some(ai)
            }
            None => None,
        };

        Ok(Self {
            host,
            port,
            ai,
            topic_keywords_path: get("TOPIC_KEYWORDS_PATH").map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, key: &str, default: T) -> SyncviewResult<T> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| SyncviewError::config(format!("{} has invalid value '{}'", key, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.ai.is_none());
        assert!(config.topic_keywords_path.is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_ai_service_settings() {
        let config = AppConfig::from_lookup(lookup(&[
            ("AI_SERVICE_URL", "http://ai:8080/"),
            ("AI_SENTIMENT_TIMEOUT_SECS", "5"),
            ("TOPIC_KEYWORDS_PATH", "/etc/syncview/topics.json"),
        ]))
        .unwrap();

        let ai = config.ai.unwrap();
        assert_eq!(ai.base_url, "http://ai:8080");
        assert_eq!(ai.sentiment_timeout, Duration::from_secs(5));
        assert_eq!(ai.summarize_timeout, Duration::from_secs(120));
        assert_eq!(
            config.topic_keywords_path,
            Some(PathBuf::from("/etc/syncview/topics.json"))
        );
    }

    #[test]
    fn test_invalid_numbers_are_config_errors() {
        let err = AppConfig::from_lookup(lookup(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, SyncviewError::Config(_)));

        let err = AppConfig::from_lookup(lookup(&[
            ("AI_SERVICE_URL", "http://ai"),
            ("AI_TRANSLATE_TIMEOUT_SECS", "-1"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SyncviewError::Config(_)));
    }
}
