//! HTTP request handlers

use super::error::WebError;
use super::state::AppState;
use crate::output::html::IndexPage;
use axum::{
    Form,
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use predictor_application::PredictSingleInput;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Multipart field carrying the batch upload
const UPLOAD_FIELD: &str = "file";

/// `GET /`: the empty prediction form
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let context = &state.context;
    Html(IndexPage::new(context.schema(), context.domains()).render())
}

/// `POST /predict`: predict one form-encoded record and re-render the page
pub async fn predict(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>, WebError> {
    debug!("Single prediction with {} fields", fields.len());
    let prediction = state.single.execute(&PredictSingleInput::new(fields))?;

    let context = &state.context;
    Ok(Html(
        IndexPage::new(context.schema(), context.domains())
            .with_prediction(prediction)
            .render(),
    ))
}

/// `POST /batch_predict`: predict every row of the uploaded CSV
pub async fn batch_predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, WebError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let data = field.bytes().await?;
            debug!("Received upload {} ({} bytes)", file_name, data.len());
            upload = Some(data);
            break;
        }
    }
    let data = upload.ok_or(WebError::MissingUpload)?;

    let batch = Arc::clone(&state.batch);
    let output = tokio::task::spawn_blocking(move || batch.execute(&data))
        .await
        .map_err(|e| WebError::Worker(e.to_string()))??;
    info!("Batch prediction completed for {} rows", output.rows);

    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.settings.download_name.replace('"', "")
    );
    Ok((
        [
            (header::CONTENT_TYPE, output.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        output.content,
    )
        .into_response())
}
