//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Feature schema declares no columns")]
    EmptySchema,

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Row has {actual} values but the table has {expected} columns")]
    RowWidthMismatch { expected: usize, actual: usize },

    #[error("Column has {actual} values but the table has {expected} rows")]
    ColumnLengthMismatch { expected: usize, actual: usize },

    #[error("Matrix of {rows}x{cols} cannot hold {len} values")]
    MatrixShape { rows: usize, cols: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_column_display() {
        let error = DomainError::DuplicateColumn("city".to_string());
        assert_eq!(error.to_string(), "Duplicate column name: city");
    }
}
