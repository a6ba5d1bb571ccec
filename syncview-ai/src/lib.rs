//! AI enrichment gateway
//!
//! Thin client for the external service that labels sentiment, summarizes
//! and translates articles, plus the local fallbacks used when the service
//! is not configured or fails. Model inference itself lives elsewhere.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod local;

pub use client::AiServiceClient;
pub use config::AiServiceConfig;
pub use error::{AiError, Result};
pub use gateway::AiGateway;
