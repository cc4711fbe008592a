//! Application layer for price-predictor
//!
//! This crate contains use cases, port definitions, and the read-only
//! prediction context shared by every request.
//! It depends only on the domain layer.

pub mod context;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use context::PredictionContext;
pub use ports::{
    preprocessor::{Preprocessor, PreprocessorError},
    regressor::{Regressor, RegressorError},
    table_codec::{TableCodec, TableCodecError},
};
pub use use_cases::error::PredictionError;
pub use use_cases::predict_batch::{
    BatchPredictionOutput, DEFAULT_PREDICTION_COLUMN, PredictBatchUseCase,
};
pub use use_cases::predict_single::{PredictSingleInput, PredictSingleUseCase};
