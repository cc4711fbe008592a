//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 5000
//! max_upload_bytes = 16777216
//!
//! [artifacts]
//! root = "/srv/price-predictor"
//! model = "prediction/models/models/current_model.json"
//!
//! [output]
//! prediction_column = "Predicted_Price_INR"
//! download_name = "batch_predictions.csv"
//! ```

use crate::artifacts::{
    ArtifactPaths, DEFAULT_FEATURE_LIST_PATH, DEFAULT_MODEL_PATH, DEFAULT_PREPROCESSOR_PATH,
    DEFAULT_REFERENCE_TABLE_PATH,
};
use predictor_application::DEFAULT_PREDICTION_COLUMN;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("server.max_upload_bytes cannot be 0")]
    InvalidUploadLimit,

    #[error("output.prediction_column cannot be empty")]
    EmptyPredictionColumn,

    #[error("output.download_name cannot be empty")]
    EmptyDownloadName,
}

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port
    pub port: u16,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

/// Raw artifact locations from TOML
///
/// Relative paths are resolved against `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileArtifactsConfig {
    /// Application root
    pub root: PathBuf,
    pub preprocessor: PathBuf,
    pub model: PathBuf,
    pub feature_list: PathBuf,
    /// Training table used to enumerate categorical values
    pub reference_table: PathBuf,
}

impl Default for FileArtifactsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            preprocessor: PathBuf::from(DEFAULT_PREPROCESSOR_PATH),
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            feature_list: PathBuf::from(DEFAULT_FEATURE_LIST_PATH),
            reference_table: PathBuf::from(DEFAULT_REFERENCE_TABLE_PATH),
        }
    }
}

impl FileArtifactsConfig {
    /// Resolve every artifact path against `root`
    pub fn paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            preprocessor: self.root.join(&self.preprocessor),
            model: self.root.join(&self.model),
            feature_list: self.root.join(&self.feature_list),
            reference_table: self.root.join(&self.reference_table),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Name of the column appended to batch results
    pub prediction_column: String,
    /// Filename suggested for batch downloads
    pub download_name: String,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            prediction_column: DEFAULT_PREDICTION_COLUMN.to_string(),
            download_name: "batch_predictions.csv".to_string(),
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub artifacts: FileArtifactsConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }
        if self.server.max_upload_bytes == 0 {
            return Err(ConfigValidationError::InvalidUploadLimit);
        }
        if self.output.prediction_column.trim().is_empty() {
            return Err(ConfigValidationError::EmptyPredictionColumn);
        }
        if self.output.download_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDownloadName);
        }
        Ok(())
    }

    /// `host:port` string for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
