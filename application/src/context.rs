//! Read-only prediction context.
//!
//! Everything loaded at startup lives here: the feature schema, the
//! categorical domains for the form, and the two fitted artifacts. The
//! context is built once, wrapped in an `Arc`, and handed to every request
//! handler. Nothing in it is mutated after construction.

use crate::ports::preprocessor::Preprocessor;
use crate::ports::regressor::Regressor;
use crate::use_cases::error::PredictionError;
use predictor_domain::{CategoricalDomains, FeatureSchema, Table};
use std::sync::Arc;
use tracing::debug;

/// Process-wide artifacts shared by all requests
#[derive(Clone)]
pub struct PredictionContext {
    schema: FeatureSchema,
    domains: CategoricalDomains,
    preprocessor: Arc<dyn Preprocessor>,
    regressor: Arc<dyn Regressor>,
}

impl PredictionContext {
    pub fn new(
        schema: FeatureSchema,
        domains: CategoricalDomains,
        preprocessor: Arc<dyn Preprocessor>,
        regressor: Arc<dyn Regressor>,
    ) -> Self {
        Self {
            schema,
            domains,
            preprocessor,
            regressor,
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn domains(&self) -> &CategoricalDomains {
        &self.domains
    }

    /// Run `table` through the preprocessor and the model.
    ///
    /// Cells are typed by their schema role first: numeric columns are
    /// parsed, categorical columns keep their text as written. Returns
    /// exactly one prediction per table row.
    pub fn predict_table(&self, table: &Table) -> Result<Vec<f64>, PredictionError> {
        let typed = table.typed(self.schema.numeric(), self.schema.categorical());
        let features = self.preprocessor.transform(&typed)?;
        debug!(
            "Transformed {} rows into {} features",
            features.n_rows(),
            features.n_cols()
        );

        let predictions = self.regressor.predict(&features)?;
        if predictions.len() != table.n_rows() {
            return Err(PredictionError::PredictionCount {
                expected: table.n_rows(),
                actual: predictions.len(),
            });
        }
        Ok(predictions)
    }
}

impl std::fmt::Debug for PredictionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionContext")
            .field("schema", &self.schema)
            .field("domains", &self.domains)
            .finish_non_exhaustive()
    }
}
