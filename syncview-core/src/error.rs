//! Error types shared across the workspace

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum SyncviewError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SyncviewError {
    pub fn config(msg: impl Into<String>) -> Self {
        SyncviewError::Config(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        SyncviewError::Parse(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        SyncviewError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        SyncviewError::Internal(msg.into())
    }
}

/// Result type alias for workspace operations
pub type SyncviewResult<T> = Result<T, SyncviewError>;
