//! Health check endpoints

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use crate::AppState;

/// AI gateway state reported by the health check
#[derive(Debug, Serialize)]
struct AiServiceHealth {
    configured: bool,
    client_initialized: bool,
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    ai_service: AiServiceHealth,
    topics: usize,
}

/// Health check handler
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        ai_service: AiServiceHealth {
            configured: state.ai.is_configured(),
            client_initialized: state.ai.client_initialized(),
        },
        topics: state.engine.topics().len(),
    })
}

/// Simple liveness check (always returns OK if server is running)
async fn liveness() -> &'static str {
    "OK"
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
}
