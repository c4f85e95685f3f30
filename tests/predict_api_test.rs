/// Integration tests for the prediction API
///
/// These tests drive the real router end to end:
/// - Health reporting with and without a loaded model
/// - Prediction ranking and response shape
/// - Error contract (400 inference failures, 500 model unavailable)
/// - Static asset fallback at /

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use crime_predictor::{
    api::{build_router, AppState},
    error::{AppError, Result},
    ml::{CrimePredictor, ProbabilityModel, SoftmaxClassifier, FEATURE_COLUMNS},
};
use ndarray::{Array1, Array2};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

/// Model stub returning a fixed probability vector
struct StubModel {
    probabilities: Vec<f64>,
}

impl ProbabilityModel for StubModel {
    fn predict_proba(&self, _features: &Array1<f64>) -> Result<Vec<f64>> {
        Ok(self.probabilities.clone())
    }

    fn n_classes(&self) -> usize {
        self.probabilities.len()
    }

    fn n_features(&self) -> usize {
        FEATURE_COLUMNS.len()
    }
}

/// Model stub that always fails
struct FailingModel;

impl ProbabilityModel for FailingModel {
    fn predict_proba(&self, _features: &Array1<f64>) -> Result<Vec<f64>> {
        Err(AppError::Inference("inference exploded".to_string()))
    }

    fn n_classes(&self) -> usize {
        4
    }

    fn n_features(&self) -> usize {
        FEATURE_COLUMNS.len()
    }
}

fn app_with_model(model: Option<Arc<dyn ProbabilityModel>>) -> Router {
    let predictor = Arc::new(CrimePredictor::new(model));
    build_router(AppState::new(predictor), Path::new("./frontend"))
}

fn request_body() -> Value {
    json!({
        "date": "2023-06-15",
        "hour": 14,
        "latitude": 40.7128,
        "longitude": -74.0060,
        "place": "In park",
        "age": 30,
        "race": "WHITE",
        "gender": "Female",
        "precinct": 14,
        "borough": "Manhattan"
    })
}

async fn post_predict(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/predict")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_without_model() {
    let app = app_with_model(None);

    let (status, body) = get_json(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn test_health_with_model() {
    let app = app_with_model(Some(Arc::new(StubModel {
        probabilities: vec![0.25; 4],
    })));

    let (status, body) = get_json(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_loaded"], true);
}

#[tokio::test]
async fn test_predict_without_model_returns_500() {
    let app = app_with_model(None);

    let (status, body) = post_predict(app, request_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Model not loaded");
}

#[tokio::test]
async fn test_predict_ranks_categories() {
    let app = app_with_model(Some(Arc::new(StubModel {
        probabilities: vec![0.1, 0.6, 0.2, 0.1],
    })));

    let (status, body) = post_predict(app, request_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["top_prediction"]["category"], "PERSONAL");
    assert_eq!(body["top_prediction"]["id"], 1);
    assert_eq!(body["top_prediction"]["confidence"], 0.6);

    let all = body["all_predictions"].as_array().unwrap();
    assert_eq!(all.len(), 4);
    for pair in all.windows(2) {
        assert!(pair[0]["confidence"].as_f64() >= pair[1]["confidence"].as_f64());
    }
}

#[tokio::test]
async fn test_predict_unknown_class_fallback() {
    let app = app_with_model(Some(Arc::new(StubModel {
        probabilities: vec![0.1, 0.2, 0.3, 0.2, 0.2],
    })));

    let (status, body) = post_predict(app, request_body()).await;

    assert_eq!(status, StatusCode::OK);

    let all = body["all_predictions"].as_array().unwrap();
    assert_eq!(all.len(), 5);

    let extra = all.iter().find(|p| p["id"] == 4).unwrap();
    assert_eq!(extra["category"], "UNKNOWN");
    assert_eq!(extra["subcategories"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_predict_inference_failure_returns_400() {
    let app = app_with_model(Some(Arc::new(FailingModel)));

    let (status, body) = post_predict(app, request_body()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "inference exploded");
}

#[tokio::test]
async fn test_predict_with_linear_model_end_to_end() {
    // Zero weights make every class equally likely, which pins down the
    // full response shape without depending on learned parameters
    let weights = Array2::zeros((4, FEATURE_COLUMNS.len()));
    let intercepts = Array1::zeros(4);
    let model = SoftmaxClassifier::new(weights, intercepts).unwrap();

    let app = app_with_model(Some(Arc::new(model)));

    let (status, body) = post_predict(app, request_body()).await;

    assert_eq!(status, StatusCode::OK);

    let all = body["all_predictions"].as_array().unwrap();
    assert_eq!(all.len(), 4);

    // Equal confidences keep class-index order (stable sort)
    let ids: Vec<u64> = all.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, [0, 1, 2, 3]);

    for prediction in all {
        let confidence = prediction["confidence"].as_f64().unwrap();
        assert!((confidence - 0.25).abs() < 1e-9);
    }

    assert_eq!(body["top_prediction"]["category"], "DRUGS/ALCOHOL");
}

#[tokio::test]
async fn test_unrecognized_categoricals_still_predict() {
    let app = app_with_model(Some(Arc::new(StubModel {
        probabilities: vec![0.25; 4],
    })));

    let body = json!({
        "date": "never",
        "hour": 99,
        "latitude": 0.0,
        "longitude": 0.0,
        "place": "Somewhere",
        "age": -1,
        "race": "martian",
        "gender": "X",
        "precinct": 0,
        "borough": "Atlantis"
    });

    let (status, response) = post_predict(app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["all_predictions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_static_assets_served_at_root() {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("index.html"), "<html>map</html>").unwrap();

    let predictor = Arc::new(CrimePredictor::new(None));
    let app = build_router(AppState::new(predictor), static_dir.path());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<html>map</html>");
}
