//! Error types for artifact loading

use crate::tabular::ReferenceTableError;
use predictor_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent the artifacts from loading
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid artifact {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("Invalid feature list {}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("Failed to scan reference table {}: {source}", .path.display())]
    Reference {
        path: PathBuf,
        #[source]
        source: ReferenceTableError,
    },
}

impl ArtifactError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            ArtifactError::Read { path, .. }
            | ArtifactError::Parse { path, .. }
            | ArtifactError::Invalid { path, .. }
            | ArtifactError::Schema { path, .. }
            | ArtifactError::Reference { path, .. } => path,
        }
    }
}
