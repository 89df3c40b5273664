mod config;
mod errors;
mod matching;
mod models;
mod resume_text;
mod routes;
mod skills_db;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::matching::ranking::RankingEngine;
use crate::matching::similarity::{TextSimilarity, TfidfCosine};
use crate::routes::build_router;
use crate::skills_db::load_skill_catalog;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireSense API v{}", env!("CARGO_PKG_VERSION"));

    // Skills catalog is loaded once and shared read-only across requests
    let catalog = Arc::new(load_skill_catalog(&config.skills_db_path)?);

    let similarity: Arc<dyn TextSimilarity> = Arc::new(TfidfCosine);
    info!(
        "Similarity backend: {} | skill weights: required={} preferred={}",
        similarity.backend(),
        config.skill_weights.required,
        config.skill_weights.preferred
    );

    let engine = RankingEngine::new(Arc::clone(&catalog), similarity, config.skill_weights);

    let state = AppState {
        config: config.clone(),
        catalog,
        engine,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
