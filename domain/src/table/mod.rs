//! Tabular records and numeric feature matrices.
//!
//! - [`frame::Table`]: named columns of typed cells (raw model input)
//! - [`matrix::FeatureMatrix`]: dense row-major matrix (preprocessor output)

pub mod cell;
pub mod frame;
pub mod matrix;
