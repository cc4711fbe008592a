//! Tabular record container

use super::cell::Cell;
use crate::core::error::DomainError;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy)]
enum ColumnKind {
    Numeric,
    Categorical,
}

/// Named columns holding rows of [`Cell`]s
///
/// Column names are unique. Every row has exactly one cell per column, and
/// row order is preserved through every operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given header
    pub fn new<I, S>(columns: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(DomainError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Build a table from delimited-text fields.
    ///
    /// Every field is kept verbatim as [`Cell::Text`] so the table can be
    /// written back unchanged. Use [`Table::typed`] to get the cells a
    /// preprocessor expects.
    pub fn from_text_rows<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: Vec<Vec<String>>,
    ) -> Result<Self, DomainError> {
        let mut table = Self::new(columns)?;
        let width = table.columns.len();

        if let Some(bad) = rows.iter().find(|row| row.len() != width) {
            return Err(DomainError::RowWidthMismatch {
                expected: width,
                actual: bad.len(),
            });
        }

        table.rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Cell::Text).collect())
            .collect();
        Ok(table)
    }

    /// Copy of the table with `numeric` columns parsed as numbers and
    /// missing-value tokens in `numeric` and `categorical` columns replaced
    /// by [`Cell::Missing`].
    ///
    /// Categorical text is never reinterpreted, so `"2.0"` stays `"2.0"`.
    /// Unparseable numeric fields stay text; other columns are copied as-is.
    pub fn typed(&self, numeric: &[String], categorical: &[String]) -> Table {
        let kinds: Vec<Option<ColumnKind>> = self
            .columns
            .iter()
            .map(|name| {
                if numeric.contains(name) {
                    Some(ColumnKind::Numeric)
                } else if categorical.contains(name) {
                    Some(ColumnKind::Categorical)
                } else {
                    None
                }
            })
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&kinds)
                    .map(|(cell, kind)| match kind {
                        Some(ColumnKind::Numeric) => cell.to_numeric(),
                        Some(ColumnKind::Categorical) => cell.to_categorical(),
                        None => cell.clone(),
                    })
                    .collect()
            })
            .collect();

        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Append one row; its width must match the header
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), DomainError> {
        if row.len() != self.columns.len() {
            return Err(DomainError::RowWidthMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Cell>, DomainError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| DomainError::UnknownColumn(name.to_string()))?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Overwrite the column called `name`, or append it on the right when absent
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) -> Result<(), DomainError> {
        if values.len() != self.rows.len() {
            return Err(DomainError::ColumnLengthMismatch {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }
}
