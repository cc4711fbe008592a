//! Presentation layer for price-predictor
//!
//! This crate contains the CLI definition, the HTTP server and its HTML
//! page, and console output formatting.

pub mod cli;
pub mod output;
pub mod web;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::{console::ConsoleFormatter, html::IndexPage};
pub use web::{
    error::WebError,
    server::{router, serve},
    state::{AppState, WebSettings},
};
