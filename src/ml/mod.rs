/// Machine learning module for crime category prediction
///
/// This module provides the inference pipeline:
/// - Feature encoding from request attributes into the training schema
/// - The probability model seam (trait + loadable linear classifier)
/// - The static class-index -> category taxonomy
/// - The predictor that ranks labeled class probabilities

pub mod encoder;
pub mod model;
pub mod predictor;
pub mod taxonomy;

pub use encoder::{FeatureEncoder, FEATURE_COLUMNS};
pub use model::{ProbabilityModel, SoftmaxClassifier};
pub use predictor::{ClassPrediction, CrimePredictor, PredictionOutcome};
pub use taxonomy::{category_for, CategoryInfo, CATEGORIES};
