//! Predict Batch use case
//!
//! Decodes an uploaded table, predicts every row and returns the table with
//! a prediction column appended.

use crate::context::PredictionContext;
use crate::ports::table_codec::TableCodec;
use crate::use_cases::error::PredictionError;
use predictor_domain::Cell;
use std::sync::Arc;
use tracing::debug;

/// Column name used when none is configured
pub const DEFAULT_PREDICTION_COLUMN: &str = "Predicted_Price_INR";

/// Result of a batch prediction
#[derive(Debug, Clone)]
pub struct BatchPredictionOutput {
    /// Encoded table including the prediction column
    pub content: Vec<u8>,
    /// MIME type of `content`
    pub content_type: &'static str,
    /// Number of data rows predicted
    pub rows: usize,
}

/// Use case for predicting every row of an uploaded table
pub struct PredictBatchUseCase<C: TableCodec + ?Sized> {
    context: Arc<PredictionContext>,
    codec: Arc<C>,
    prediction_column: String,
}

impl<C: TableCodec + ?Sized> PredictBatchUseCase<C> {
    pub fn new(context: Arc<PredictionContext>, codec: Arc<C>) -> Self {
        Self {
            context,
            codec,
            prediction_column: DEFAULT_PREDICTION_COLUMN.to_string(),
        }
    }

    pub fn with_prediction_column(mut self, name: impl Into<String>) -> Self {
        self.prediction_column = name.into();
        self
    }

    pub fn prediction_column(&self) -> &str {
        &self.prediction_column
    }

    /// Execute the use case
    ///
    /// Any failure (malformed upload, column mismatch, model error) fails
    /// the whole batch; no partial output is produced.
    pub fn execute(&self, upload: &[u8]) -> Result<BatchPredictionOutput, PredictionError> {
        let mut table = self.codec.decode(upload)?;
        if table.is_empty() {
            return Err(PredictionError::EmptyBatch);
        }
        debug!(
            "Decoded batch of {} rows x {} columns",
            table.n_rows(),
            table.n_columns()
        );

        let predictions = self.context.predict_table(&table)?;
        let rows = predictions.len();
        table.set_column(
            &self.prediction_column,
            predictions.into_iter().map(Cell::Number).collect(),
        )?;

        Ok(BatchPredictionOutput {
            content: self.codec.encode(&table)?,
            content_type: self.codec.content_type(),
            rows,
        })
    }
}
