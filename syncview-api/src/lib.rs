//! SyncView API
//!
//! HTTP surface of the recommendation engine, related-article search and
//! the AI enrichment proxy. Every route is served both at the root and
//! under `/api`.

pub mod config;
pub mod error;
mod routes;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use syncview_ai::AiGateway;
use syncview_core::TopicKeywordTable;
use syncview_relevance::RelatednessConfig;
use syncview_services::RecommendationEngine;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
    pub relatedness: RelatednessConfig,
    pub ai: Arc<AiGateway>,
}

impl AppState {
    pub fn new(topics: Arc<TopicKeywordTable>, ai: AiGateway) -> Self {
        Self {
            engine: Arc::new(RecommendationEngine::new(topics)),
            relatedness: RelatednessConfig::default(),
            ai: Arc::new(ai),
        }
    }
}

/// Build the full router with CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(routes::api_routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
