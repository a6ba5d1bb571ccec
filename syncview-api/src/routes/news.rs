//! Recommendation, related-article and enrichment endpoints

use axum::{extract::State, routing::post, Json, Router};
use syncview_core::{
    RecommendRequest, RecommendResponse, SentimentRequest, SentimentResponse, SimilarityRequest,
    SimilarityResult, SummarizeRequest, SummarizeResponse,
};
use syncview_relevance::related_for_request;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::AppState;

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/similarity", post(find_similar_articles))
        .route("/recommend", post(recommend))
        .route("/sentiment", post(analyze_sentiment))
        .route("/summarize", post(summarize))
}

/// POST /similarity - Related articles for a target, by TF-IDF cosine similarity
async fn find_similar_articles(
    State(state): State<AppState>,
    Json(request): Json<SimilarityRequest>,
) -> Json<Vec<SimilarityResult>> {
    let results = related_for_request(&request, &state.relatedness);
    debug!(
        "Related articles: {} of {} candidates",
        results.len(),
        request.articles.len()
    );
    Json(results)
}

/// POST /recommend - Interest and trending picks from one page of headlines
async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    Json(state.engine.recommend(&request))
}

/// POST /sentiment - Sentiment label for a block of text
async fn analyze_sentiment(
    State(state): State<AppState>,
    Json(request): Json<SentimentRequest>,
) -> Json<SentimentResponse> {
    let result = state.ai.sentiment(&request.text).await;
    info!("Sentiment: {} ({})", result.sentiment, result.score);
    Json(result)
}

/// POST /summarize - Summary of article text
async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let result = state.ai.summarize(&request).await?;
    Ok(Json(result))
}
