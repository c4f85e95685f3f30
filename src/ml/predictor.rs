use crate::error::{AppError, Result};
use crate::ml::encoder::FeatureEncoder;
use crate::ml::model::ProbabilityModel;
use crate::ml::taxonomy;
use crate::models::PredictionRequest;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Crime category prediction service.
///
/// Owns the feature encoder and a read-only handle to the loaded model. The
/// model is injected at construction and never mutated, so one predictor is
/// safely shared across concurrent requests without synchronization.
pub struct CrimePredictor {
    /// Loaded model, if any. `None` means every predict call fails with the
    /// model-unavailable condition while health checks keep working.
    model: Option<Arc<dyn ProbabilityModel>>,

    /// Feature encoder
    encoder: FeatureEncoder,
}

impl CrimePredictor {
    /// Create a new predictor around an optional loaded model
    pub fn new(model: Option<Arc<dyn ProbabilityModel>>) -> Self {
        Self {
            model,
            encoder: FeatureEncoder::new(),
        }
    }

    /// Whether a model is currently loaded
    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Classify a request into ranked crime categories.
    ///
    /// Fails fast with the model-unavailable condition before any encoding
    /// or inference work happens.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionOutcome> {
        let model = self.model.as_ref().ok_or(AppError::ModelUnavailable)?;

        let features = self.encoder.encode(request);
        let probabilities = model.predict_proba(&features)?;

        Self::rank(probabilities)
    }

    /// Attach taxonomy labels to raw class probabilities and sort by
    /// confidence, highest first. Indices beyond the taxonomy map to an
    /// UNKNOWN category with no subcategories rather than failing.
    fn rank(probabilities: Vec<f64>) -> Result<PredictionOutcome> {
        if probabilities.is_empty() {
            return Err(AppError::Inference(
                "model returned no class probabilities".to_string(),
            ));
        }

        let mut all_predictions: Vec<ClassPrediction> = probabilities
            .into_iter()
            .enumerate()
            .map(|(id, confidence)| {
                let (category, subcategories) = match taxonomy::category_for(id) {
                    Some(info) => (
                        info.name.to_string(),
                        info.subcategories.iter().map(|s| s.to_string()).collect(),
                    ),
                    None => ("UNKNOWN".to_string(), Vec::new()),
                };

                ClassPrediction {
                    id,
                    category,
                    subcategories,
                    confidence,
                }
            })
            .collect();

        // sort_by is stable: equal confidences keep class-index order
        all_predictions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        let top_prediction = all_predictions[0].clone();

        Ok(PredictionOutcome {
            top_prediction,
            all_predictions,
        })
    }
}

/// One labeled class probability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassPrediction {
    /// Model class index
    pub id: usize,

    /// Category name from the taxonomy, or "UNKNOWN"
    pub category: String,

    /// Offense subcategories aggregated under this class
    pub subcategories: Vec<String>,

    /// Class probability in [0, 1]
    pub confidence: f64,
}

/// Full ranked prediction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// Highest-confidence prediction (first element of `all_predictions`)
    pub top_prediction: ClassPrediction,

    /// All class predictions, sorted by confidence descending
    pub all_predictions: Vec<ClassPrediction>,
}
