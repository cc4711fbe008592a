//! Domain layer for price-predictor
//!
//! This crate contains the core entities and value objects shared by every
//! other layer. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Feature Schema
//!
//! The ordered numeric and categorical column names a record must supply.
//! It is loaded once at startup and never changes afterwards.
//!
//! ## Table and Feature Matrix
//!
//! - **Table**: raw tabular records (named columns, typed cells) as they
//!   arrive from a form submission or an uploaded file
//! - **Feature Matrix**: the dense numeric matrix a preprocessor produces
//!   and a regressor consumes

pub mod core;
pub mod schema;
pub mod table;

// Re-export commonly used types
pub use core::{error::DomainError, prediction::Prediction};
pub use schema::{categorical::CategoricalDomains, feature_schema::FeatureSchema};
pub use table::{
    cell::{Cell, MISSING_VALUE_TOKENS},
    frame::Table,
    matrix::FeatureMatrix,
};
