//! Table codec port
//!
//! Converts uploaded bytes to a [`Table`] and back.

use predictor_domain::{DomainError, Table};
use thiserror::Error;

/// Errors that can occur while decoding or encoding tabular data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableCodecError {
    #[error("Input contains no header row")]
    Empty,

    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Invalid table: {0}")]
    Table(#[from] DomainError),
}

/// Serialization format for tables
pub trait TableCodec: Send + Sync {
    /// Parse a header row plus data rows
    fn decode(&self, bytes: &[u8]) -> Result<Table, TableCodecError>;

    /// Write the header row followed by every data row
    fn encode(&self, table: &Table) -> Result<Vec<u8>, TableCodecError>;

    /// MIME type of the encoded form
    fn content_type(&self) -> &'static str;
}
