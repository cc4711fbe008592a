//! Preprocessor port
//!
//! Defines the `transform` contract of a fitted feature preprocessor.

use predictor_domain::{DomainError, FeatureMatrix, Table};
use thiserror::Error;

/// Errors raised while transforming a table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreprocessorError {
    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Column '{column}' expects numbers, got '{value}'")]
    NonNumeric { column: String, value: String },

    #[error("Column '{column}' has unknown category '{value}'")]
    UnknownCategory { column: String, value: String },

    #[error("Malformed output: {0}")]
    Shape(#[from] DomainError),
}

/// A pre-fitted transformation from raw records to a numeric matrix
///
/// Implementations are deterministic and side-effect free. They are shared
/// read-only across concurrent requests, hence `Send + Sync`.
pub trait Preprocessor: Send + Sync {
    /// Map every row of `table` to one matrix row, preserving order
    fn transform(&self, table: &Table) -> Result<FeatureMatrix, PreprocessorError>;
}
