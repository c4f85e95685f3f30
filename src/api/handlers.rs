use crate::api::AppState;
use crate::error::Result;
use crate::ml::PredictionOutcome;
use crate::models::PredictionRequest;
use axum::{extract::State, Json};
use serde::Serialize;

/// Classify an incident into ranked crime categories
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionOutcome>> {
    let outcome = state.predictor.predict(&request)?;
    Ok(Json(outcome))
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: state.predictor.model_loaded(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}
