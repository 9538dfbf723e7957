pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API — pure, deterministic text passes
        .route(
            "/api/v1/analysis/keywords",
            post(handlers::handle_extract_keywords),
        )
        .route(
            "/api/v1/analysis/skills",
            post(handlers::handle_extract_skills),
        )
        .route(
            "/api/v1/analysis/score",
            post(handlers::handle_coverage_score),
        )
        .route("/api/v1/analysis/reorder", post(handlers::handle_reorder))
        .route("/api/v1/analysis/diff", post(handlers::handle_diff))
        // Tailoring API — the one endpoint that spends an LLM call
        .route("/api/v1/resumes/tailor", post(handlers::handle_tailor))
        .with_state(state)
}
