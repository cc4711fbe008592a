//! Regressor port
//!
//! Defines the `predict` contract of a fitted regression model.

use predictor_domain::FeatureMatrix;
use thiserror::Error;

/// Errors raised while predicting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressorError {
    #[error("Model expects {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("Feature index {index} out of range for {n_features} features")]
    FeatureIndex { index: usize, n_features: usize },

    #[error("Prediction failed: {0}")]
    Other(String),
}

/// A pre-fitted regression model
///
/// Returns one scalar per matrix row, in row order.
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<f64>, RegressorError>;
}
