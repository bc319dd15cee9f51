//! HTTP routes for analysis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze, health, AnalysisAppState};

/// Creates the analysis router with all routes.
pub fn analysis_routes(state: AnalysisAppState) -> Router {
    Router::new()
        // POST /api/analyze
        .route("/api/analyze", post(analyze))
        // GET /health
        .route("/health", get(health))
        .with_state(state)
}
