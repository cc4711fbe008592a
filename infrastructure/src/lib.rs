//! Infrastructure layer for price-predictor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the JSON artifact formats for the fitted
//! preprocessor and model, the CSV table codec, and configuration file
//! loading.

pub mod artifacts;
pub mod config;
pub mod tabular;

// Re-export commonly used types
pub use artifacts::{
    ArtifactError, ArtifactLoader, ArtifactPaths, ColumnTransformer, LinearRegressor,
    LoadedArtifacts, ModelArtifact, TreeEnsembleRegressor,
};
pub use config::{
    ConfigLoader, ConfigValidationError, FileArtifactsConfig, FileConfig, FileOutputConfig,
    FileServerConfig,
};
pub use tabular::{CsvTableCodec, ReferenceTableError, scan_categorical_domains};
