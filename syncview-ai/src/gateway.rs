//! Injected handle to the AI enrichment service
//!
//! The client is created lazily on first use and then shared; handlers
//! receive the gateway through application state rather than a global.

use syncview_core::{
    SentimentResponse, SummarizeRequest, SummarizeResponse, TranslateRequest, TranslateResponse,
};
use tokio::sync::OnceCell;
use tracing::{info, instrument, warn};

use crate::client::AiServiceClient;
use crate::config::AiServiceConfig;
use crate::error::{AiError, Result};
use crate::local::{extractive_summary, keyword_sentiment, neutral_sentiment, truncate_chars};

const MIN_SENTIMENT_CHARS: usize = 10;
const MAX_SENTIMENT_CHARS: usize = 512;
const MIN_SUMMARY_CHARS: usize = 200;
const MAX_SUMMARY_INPUT_CHARS: usize = 2048;

const EMPTY_TEXT_SUMMARY: &str = "본문을 요약할 수 없습니다.";
const BLANK_UPSTREAM_SUMMARY: &str = "요약을 생성할 수 없습니다.";

/// Enrichment entry point with upstream-or-local behaviour
#[derive(Debug, Default)]
pub struct AiGateway {
    config: Option<AiServiceConfig>,
    client: OnceCell<AiServiceClient>,
}

impl AiGateway {
    /// Gateway for an optional AI service; `None` uses local fallbacks only
    pub fn new(config: Option<AiServiceConfig>) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    pub fn client_initialized(&self) -> bool {
        self.client.initialized()
    }

    /// Get-or-create accessor for the shared client
    pub async fn client(&self) -> Result<Option<&AiServiceClient>> {
        let Some(config) = &self.config else {
            return Ok(None);
        };
        let client = self
            .client
            .get_or_try_init(|| async {
                info!("Initializing AI service client for {}", config.base_url);
                AiServiceClient::new(config.clone())
            })
            .await?;
        Ok(Some(client))
    }

    /// Sentiment of `text`; never fails, degrading to neutral
    #[instrument(skip_all)]
    pub async fn sentiment(&self, text: &str) -> SentimentResponse {
        if text.trim().chars().count() < MIN_SENTIMENT_CHARS {
            return neutral_sentiment();
        }

        match self.client().await {
            Ok(Some(client)) => {
                match client
                    .sentiment(truncate_chars(text, MAX_SENTIMENT_CHARS))
                    .await
                {
                    Ok(result) => result,
                    Err(e) => {
                        warn!("Sentiment analysis failed, answering neutral: {}", e);
                        neutral_sentiment()
                    }
                }
            }
            Ok(None) => keyword_sentiment(text),
            Err(e) => {
                warn!("AI client unavailable, answering neutral: {}", e);
                neutral_sentiment()
            }
        }
    }

    /// Summary of `request.text`; upstream failures are returned to the caller
    #[instrument(skip_all)]
    pub async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse> {
        let text = request.text.trim();
        if text.is_empty() {
            return Ok(summary(EMPTY_TEXT_SUMMARY));
        }
        if text.chars().count() < MIN_SUMMARY_CHARS {
            return Ok(summary(text));
        }

        match self.client().await? {
            Some(client) => {
                let result = client
                    .summarize(
                        truncate_chars(text, MAX_SUMMARY_INPUT_CHARS),
                        request.max_length,
                        request.min_length,
                    )
                    .await?;
                if result.summary.trim().is_empty() {
                    Ok(summary(BLANK_UPSTREAM_SUMMARY))
                } else {
                    Ok(result)
                }
            }
            None => Ok(summary(&extractive_summary(text))),
        }
    }

    /// Korean translation of `request.text`; upstream failures echo the input
    #[instrument(skip_all, fields(source = %request.source_lang, target = %request.target_lang))]
    pub async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse> {
        if request.target_lang != "ko" {
            return Err(AiError::Validation(
                "only translation into Korean (target_lang=ko) is supported".to_string(),
            ));
        }
        if request.text.trim().is_empty() {
            return Err(AiError::Validation("text must not be empty".to_string()));
        }

        let echo = || TranslateResponse {
            translated_text: request.text.clone(),
        };

        let client = match self.client().await {
            Ok(Some(client)) => client,
            Ok(None) => return Ok(echo()),
            Err(e) => {
                warn!("AI client unavailable, echoing original text: {}", e);
                return Ok(echo());
            }
        };

        match client
            .translate(&request.text, &request.source_lang, &request.target_lang)
            .await
        {
            Ok(result) => Ok(TranslateResponse {
                translated_text: result
                    .translated_text
                    .unwrap_or_else(|| request.text.clone()),
            }),
            Err(e) => {
                warn!("Translation failed, echoing original text: {}", e);
                Ok(echo())
            }
        }
    }
}

fn summary(text: &str) -> SummarizeResponse {
    SummarizeResponse {
        summary: text.to_string(),
    }
}
