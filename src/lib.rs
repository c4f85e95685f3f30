//! HTTP inference service for NYC crime category prediction.
//!
//! A pre-trained classifier is loaded once at startup; requests carrying
//! incident attributes are encoded into the model's training schema, run
//! through one row of inference, and answered with a confidence-ranked list
//! of labeled crime categories.

pub mod api;
pub mod config;
pub mod error;
pub mod ml;
pub mod models;

pub use error::{AppError, Result};
