//! Fitted artifacts and the startup loader
//!
//! The preprocessor and the model are stored as JSON documents:
//!
//! - [`ColumnTransformer`]: imputation + standard scaling for numeric
//!   columns, one-hot encoding for categorical columns
//! - [`ModelArtifact`]: a linear model or a tree ensemble, tagged by `kind`
//!
//! [`ArtifactLoader`] reads both together with the feature list and the
//! reference table, and fails on the first missing or malformed file.

mod column_transformer;
mod error;
mod loader;
mod regressor;

pub use column_transformer::{CategoricalBlock, ColumnTransformer, HandleUnknown, NumericBlock};
pub use error::ArtifactError;
pub use loader::{
    ArtifactLoader, ArtifactPaths, DEFAULT_FEATURE_LIST_PATH, DEFAULT_MODEL_PATH,
    DEFAULT_PREPROCESSOR_PATH, DEFAULT_REFERENCE_TABLE_PATH, LoadedArtifacts,
};
pub use regressor::{
    Aggregation, LinearRegressor, ModelArtifact, RegressionTree, TreeEnsembleRegressor, TreeNode,
};
