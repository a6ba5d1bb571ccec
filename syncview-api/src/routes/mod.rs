//! API route definitions

mod health;
mod news;
mod translate;

use axum::Router;

use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(news::routes())
        .merge(translate::routes())
        .merge(health::routes())
}
