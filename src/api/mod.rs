pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::ml::CrimePredictor;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<CrimePredictor>,
}

impl AppState {
    pub fn new(predictor: Arc<CrimePredictor>) -> Self {
        Self { predictor }
    }
}
