//! Core types for the SyncView news service
//!
//! This crate defines the shared data structures used across the workspace,
//! including article records, enrichment labels, request/response payloads
//! and the static topic-keyword configuration.

pub mod article;
pub mod error;
pub mod payload;
pub mod topics;

pub use article::{Article, RecommendationReason, RecommendedArticle, Sentiment, SimilarityResult};
pub use error::{SyncviewError, SyncviewResult};
pub use payload::{
    CandidateArticle, RecommendRequest, RecommendResponse, SentimentRequest, SentimentResponse,
    SimilarityRequest, SummarizeRequest, SummarizeResponse, TargetArticle, TranslateRequest,
    TranslateResponse,
};
pub use topics::TopicKeywordTable;
