//! Shared router state

use predictor_application::{
    DEFAULT_PREDICTION_COLUMN, PredictBatchUseCase, PredictSingleUseCase, PredictionContext,
    TableCodec,
};
use std::sync::Arc;

/// Settings for the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSettings {
    /// Column appended to batch results
    pub prediction_column: String,
    /// Filename suggested for batch downloads
    pub download_name: String,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            prediction_column: DEFAULT_PREDICTION_COLUMN.to_string(),
            download_name: "batch_predictions.csv".to_string(),
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

/// State cloned into every handler
///
/// Holds only `Arc`s to read-only data, so cloning is cheap and no
/// request can observe another's effects.
#[derive(Clone)]
pub struct AppState {
    pub(crate) context: Arc<PredictionContext>,
    pub(crate) single: Arc<PredictSingleUseCase>,
    pub(crate) batch: Arc<PredictBatchUseCase<dyn TableCodec>>,
    pub(crate) settings: Arc<WebSettings>,
}

impl AppState {
    pub fn new(
        context: Arc<PredictionContext>,
        codec: Arc<dyn TableCodec>,
        settings: WebSettings,
    ) -> Self {
        let single = PredictSingleUseCase::new(Arc::clone(&context));
        let batch = PredictBatchUseCase::new(Arc::clone(&context), codec)
            .with_prediction_column(settings.prediction_column.clone());
        Self {
            context,
            single: Arc::new(single),
            batch: Arc::new(batch),
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &WebSettings {
        &self.settings
    }
}
