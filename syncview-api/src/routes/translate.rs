//! Translation endpoints

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde_json::{json, Value};
use syncview_core::{TranslateRequest, TranslateResponse};

use crate::error::ApiError;
use crate::AppState;

/// Create translation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(translate))
        .route("/translate/health", get(translate_health))
}

/// POST /translate - Translate text into Korean
async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let result = state.ai.translate(&request).await?;
    Ok(Json(result))
}

/// GET /translate/health - Whether translations are proxied to the AI service
async fn translate_health(State(state): State<AppState>) -> Json<Value> {
    if state.ai.is_configured() {
        Json(json!({"status": "ok", "mode": "ai_service_proxy"}))
    } else {
        Json(json!({"status": "unhealthy", "error": "AI_SERVICE_URL not configured"}))
    }
}
