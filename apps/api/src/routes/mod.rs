pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills", get(handlers::handle_get_skills))
        .route("/api/v1/rankings", post(handlers::handle_rank_text))
        .route(
            "/api/v1/rankings/upload",
            post(handlers::handle_rank_upload),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
