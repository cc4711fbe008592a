//! HTTP front end
//!
//! - `GET /` renders the prediction form
//! - `POST /predict` predicts one form-encoded record
//! - `POST /batch_predict` predicts an uploaded CSV and returns it as a download

pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
