use crate::api::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the main API router
///
/// Anything outside `/api` falls through to static assets served from
/// `static_dir` (the frontend bundle).
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Prediction API
        .route("/api/predict", post(handlers::predict))
        .route("/api/health", get(handlers::health))
        // Add state
        .with_state(state)
        // Static frontend at /
        .fallback_service(ServeDir::new(static_dir))
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(CorsLayer::permissive())
}
