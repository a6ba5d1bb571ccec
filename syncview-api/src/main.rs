//! SyncView API Server

use std::sync::Arc;

use syncview_ai::AiGateway;
use syncview_api::{build_router, AppConfig, AppState};
use syncview_core::TopicKeywordTable;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,syncview_api=debug")),
        )
        .init();

    info!("Starting SyncView API");

    let config = AppConfig::from_env()?;

    let topics = match &config.topic_keywords_path {
        Some(path) => TopicKeywordTable::from_path(path)?,
        None => TopicKeywordTable::default(),
    };
    info!("Topic keyword table ready with {} topics", topics.len());

    match &config.ai {
        Some(ai) => info!("AI service configured at {}", ai.base_url),
        None => info!("AI_SERVICE_URL not set - enrichments use local fallbacks"),
    }
    let ai = AiGateway::new(config.ai.clone());

    let app = build_router(AppState::new(Arc::new(topics), ai));

    let addr = config.bind_addr();
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
