use crate::error::{AppError, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A model that produces per-class probabilities for one encoded row.
///
/// The concrete artifact is loaded once at startup and shared read-only
/// across requests; implementations must therefore be `Send + Sync`.
pub trait ProbabilityModel: Send + Sync {
    /// Predict class probabilities for a single feature vector
    fn predict_proba(&self, features: &Array1<f64>) -> Result<Vec<f64>>;

    /// Number of output classes
    fn n_classes(&self) -> usize;

    /// Expected feature vector width
    fn n_features(&self) -> usize;
}

/// Multinomial linear classifier (weights + intercepts, softmax over
/// logits), deserialized from a JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxClassifier {
    /// Class weights (n_classes x n_features)
    weights: Array2<f64>,

    /// Per-class intercepts (n_classes)
    intercepts: Array1<f64>,
}

impl SoftmaxClassifier {
    /// Create a classifier from weights and intercepts, validating shapes
    pub fn new(weights: Array2<f64>, intercepts: Array1<f64>) -> Result<Self> {
        let classifier = Self {
            weights,
            intercepts,
        };
        classifier.validate()?;
        Ok(classifier)
    }

    /// Load a serialized model artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let classifier: Self = serde_json::from_str(&raw)?;
        classifier.validate()?;
        Ok(classifier)
    }

    fn validate(&self) -> Result<()> {
        let (n_classes, _) = self.weights.dim();

        if n_classes == 0 {
            return Err(AppError::Configuration(
                "model artifact has no output classes".to_string(),
            ));
        }

        if self.intercepts.len() != n_classes {
            return Err(AppError::Configuration(format!(
                "model artifact has {} intercepts for {} classes",
                self.intercepts.len(),
                n_classes
            )));
        }

        Ok(())
    }
}

impl ProbabilityModel for SoftmaxClassifier {
    fn predict_proba(&self, features: &Array1<f64>) -> Result<Vec<f64>> {
        let (_, n_features) = self.weights.dim();

        if features.len() != n_features {
            return Err(AppError::Inference(format!(
                "feature vector length {} does not match model input width {}",
                features.len(),
                n_features
            )));
        }

        let logits = self.weights.dot(features) + &self.intercepts;

        // Softmax with max subtraction to avoid overflow
        let max_logit = logits.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        let exp: Array1<f64> = logits.mapv(|v| (v - max_logit).exp());
        let sum = exp.sum();

        Ok(exp.mapv(|v| v / sum).to_vec())
    }

    fn n_classes(&self) -> usize {
        self.weights.dim().0
    }

    fn n_features(&self) -> usize {
        self.weights.dim().1
    }
}
