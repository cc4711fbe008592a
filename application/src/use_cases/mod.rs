//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod error;
pub mod predict_batch;
pub mod predict_single;

#[cfg(test)]
pub(crate) mod fakes;
