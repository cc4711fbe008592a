//! HTTP error mapping

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use predictor_application::PredictionError;
use thiserror::Error;
use tracing::error;

/// Errors a request handler can fail with
///
/// Prediction failures are not explained to the caller: they are logged and
/// answered with a bare 500.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("Prediction failed: {0}")]
    Prediction(#[from] PredictionError),

    #[error("No file uploaded under field 'file'")]
    MissingUpload,

    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Prediction worker failed: {0}")]
    Worker(String),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::MissingUpload | WebError::Multipart(_) => StatusCode::BAD_REQUEST,
            WebError::Prediction(_) | WebError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!("Request failed ({}): {}", status.as_u16(), self);
        let reason = status.canonical_reason().unwrap_or("Error");
        (status, reason).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_errors_are_500() {
        let err = WebError::from(PredictionError::MissingField("city".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_upload_is_400() {
        assert_eq!(WebError::MissingUpload.status(), StatusCode::BAD_REQUEST);
    }
}
