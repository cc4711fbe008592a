//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod preprocessor;
pub mod regressor;
pub mod table_codec;
