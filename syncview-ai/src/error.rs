//! Error types for the AI enrichment gateway

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AiError>;

/// Errors surfaced by the AI service client and gateway
#[derive(Debug, Error)]
pub enum AiError {
    /// Request did not complete within its timeout
    #[error("AI service timed out")]
    Timeout,

    /// Connection refused, DNS failure or other transport problem
    #[error("AI service unavailable: {0}")]
    Unavailable(String),

    /// Service answered with a non-success status
    #[error("{detail}")]
    Upstream { status: u16, detail: String },

    /// Response body could not be decoded
    #[error("Failed to decode AI service response: {0}")]
    Decode(String),

    /// Caller input rejected before contacting the service
    #[error("{0}")]
    Validation(String),

    /// The HTTP client could not be built
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AiError {
    /// HTTP status the API layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            AiError::Timeout => 504,
            AiError::Unavailable(_) => 503,
            AiError::Upstream { .. } | AiError::Decode(_) => 502,
            AiError::Validation(_) => 400,
            AiError::Config(_) => 500,
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AiError::Timeout
        } else if err.is_decode() {
            AiError::Decode(err.to_string())
        } else {
            AiError::Unavailable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AiError::Timeout.status_code(), 504);
        assert_eq!(AiError::Unavailable("refused".into()).status_code(), 503);
        assert_eq!(
            AiError::Upstream {
                status: 500,
                detail: "boom".into()
            }
            .status_code(),
            502
        );
        assert_eq!(AiError::Validation("bad".into()).status_code(), 400);
    }

    #[test]
    fn test_upstream_displays_detail() {
        let err = AiError::Upstream {
            status: 422,
            detail: "text too long".into(),
        };
        assert_eq!(err.to_string(), "text too long");
    }
}
