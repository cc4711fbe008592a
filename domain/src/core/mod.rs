//! Core domain concepts shared across all subdomains.
//!
//! - [`prediction::Prediction`]: a single scalar estimate produced by a model
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod prediction;
