//! Startup artifact loader

use super::column_transformer::ColumnTransformer;
use super::error::ArtifactError;
use super::regressor::ModelArtifact;
use crate::tabular::scan_categorical_domains;
use predictor_application::PredictionContext;
use predictor_domain::{CategoricalDomains, FeatureSchema};
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Default locations, relative to the application root
pub const DEFAULT_PREPROCESSOR_PATH: &str = "artifacts/transformed/preprocessor.json";
pub const DEFAULT_MODEL_PATH: &str = "prediction/models/models/current_model.json";
pub const DEFAULT_FEATURE_LIST_PATH: &str = "artifacts/transformed/feature_list.json";
pub const DEFAULT_REFERENCE_TABLE_PATH: &str = "artifacts/transformed/train.csv";

/// Filesystem locations of every startup artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub preprocessor: PathBuf,
    pub model: PathBuf,
    pub feature_list: PathBuf,
    pub reference_table: PathBuf,
}

impl ArtifactPaths {
    /// Default layout under `root`
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            preprocessor: root.join(DEFAULT_PREPROCESSOR_PATH),
            model: root.join(DEFAULT_MODEL_PATH),
            feature_list: root.join(DEFAULT_FEATURE_LIST_PATH),
            reference_table: root.join(DEFAULT_REFERENCE_TABLE_PATH),
        }
    }
}

/// Everything loaded at startup
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    pub schema: FeatureSchema,
    pub domains: CategoricalDomains,
    pub preprocessor: ColumnTransformer,
    pub model: ModelArtifact,
}

impl LoadedArtifacts {
    /// Wrap the artifacts into the read-only context shared by request handlers
    pub fn into_context(self) -> PredictionContext {
        PredictionContext::new(
            self.schema,
            self.domains,
            Arc::new(self.preprocessor),
            Arc::new(self.model),
        )
    }
}

/// Loads the preprocessor, model, feature list and categorical domains
pub struct ArtifactLoader;

impl ArtifactLoader {
    /// Load every artifact, failing on the first missing or malformed file
    pub fn load(paths: &ArtifactPaths) -> Result<LoadedArtifacts, ArtifactError> {
        let preprocessor: ColumnTransformer = Self::read_json(&paths.preprocessor)?;
        preprocessor
            .validate()
            .map_err(|reason| ArtifactError::Invalid {
                path: paths.preprocessor.clone(),
                reason,
            })?;
        info!(
            "Loaded preprocessor from {} ({} inputs, {} outputs)",
            paths.preprocessor.display(),
            preprocessor.input_columns().count(),
            preprocessor.n_features_out()
        );

        let model: ModelArtifact = Self::read_json(&paths.model)?;
        model.validate().map_err(|reason| ArtifactError::Invalid {
            path: paths.model.clone(),
            reason,
        })?;
        info!("Loaded {} model from {}", model.kind(), paths.model.display());

        let schema: FeatureSchema = Self::read_json(&paths.feature_list)?;
        schema.validate().map_err(|source| ArtifactError::Schema {
            path: paths.feature_list.clone(),
            source,
        })?;
        info!(
            "Feature schema: {} numeric, {} categorical",
            schema.numeric().len(),
            schema.categorical().len()
        );

        if !schema.columns().eq(preprocessor.input_columns()) {
            warn!("Feature list columns differ from the preprocessor's fitted columns");
        }

        let domains = Self::load_domains(&paths.reference_table, &schema)?;

        Ok(LoadedArtifacts {
            schema,
            domains,
            preprocessor,
            model,
        })
    }

    fn load_domains(
        path: &Path,
        schema: &FeatureSchema,
    ) -> Result<CategoricalDomains, ArtifactError> {
        let file = File::open(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let domains = scan_categorical_domains(file, schema.categorical()).map_err(|source| {
            ArtifactError::Reference {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(
            "Scanned {} categorical domains from {}",
            domains.len(),
            path.display()
        );
        Ok(domains)
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
        let content = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
