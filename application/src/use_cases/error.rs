//! Errors shared by the prediction use cases

use crate::ports::preprocessor::PreprocessorError;
use crate::ports::regressor::RegressorError;
use crate::ports::table_codec::TableCodecError;
use predictor_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while serving a prediction
///
/// None of these are recoverable; callers report them as a failed request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Field '{field}' is not a number: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Uploaded table has no data rows")]
    EmptyBatch,

    #[error("Model returned {actual} predictions for {expected} rows")]
    PredictionCount { expected: usize, actual: usize },

    #[error("Preprocessing failed: {0}")]
    Preprocess(#[from] PreprocessorError),

    #[error("Model failed: {0}")]
    Model(#[from] RegressorError),

    #[error("Table codec error: {0}")]
    Codec(#[from] TableCodecError),

    #[error("Table error: {0}")]
    Table(#[from] DomainError),
}
