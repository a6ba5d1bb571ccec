//! HTTP client for the AI enrichment service

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use syncview_core::{SentimentResponse, SummarizeResponse};
use tracing::{debug, instrument};

use crate::config::AiServiceConfig;
use crate::error::{AiError, Result};

#[derive(Debug, Serialize)]
struct TextPayload<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SummarizePayload<'a> {
    text: &'a str,
    max_length: u32,
    min_length: u32,
}

#[derive(Debug, Serialize)]
struct TranslatePayload<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
}

/// Translation answer; the field may be missing on partial failures
#[derive(Debug, Deserialize)]
pub struct UpstreamTranslation {
    #[serde(default)]
    pub translated_text: Option<String>,
}

/// AI service client
#[derive(Debug, Clone)]
pub struct AiServiceClient {
    client: Client,
    config: AiServiceConfig,
}

impl AiServiceClient {
    /// Create a new client for `config.base_url`
    pub fn new(config: AiServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AiError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AiServiceConfig {
        &self.config
    }

    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn sentiment(&self, text: &str) -> Result<SentimentResponse> {
        self.post(
            "/sentiment",
            &TextPayload { text },
            self.config.sentiment_timeout,
        )
        .await
    }

    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn summarize(
        &self,
        text: &str,
        max_length: u32,
        min_length: u32,
    ) -> Result<SummarizeResponse> {
        self.post(
            "/summarize",
            &SummarizePayload {
                text,
                max_length,
                min_length,
            },
            self.config.summarize_timeout,
        )
        .await
    }

    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<UpstreamTranslation> {
        self.post(
            "/translate",
            &TranslatePayload {
                text,
                source_lang,
                target_lang,
            },
            self.config.translate_timeout,
        )
        .await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("Calling AI service: {}", url);

        let response = self
            .client
            .post(&url)
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(AiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Upstream {
                status: status.as_u16(),
                detail: upstream_detail(status.as_u16(), &body),
            });
        }

        let bytes = response.bytes().await.map_err(AiError::from_transport)?;
        serde_json::from_slice(&bytes).map_err(|e| AiError::Decode(e.to_string()))
    }
}

/// `detail` field of a JSON error body, else the raw body, else a generic message
fn upstream_detail(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned())
        .map(|d| match d {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });

    match detail {
        Some(detail) => detail,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => format!("AI service error (HTTP {})", status),
    }
}
