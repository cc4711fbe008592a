//! Categorical domain scan over a reference table

use predictor_domain::{CategoricalDomains, Cell};
use std::collections::BTreeSet;
use std::io::Read;
use thiserror::Error;

/// Errors that can occur while scanning the reference table
#[derive(Error, Debug)]
pub enum ReferenceTableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column not found: {0}")]
    MissingColumn(String),
}

/// Collect the distinct non-missing values of each column in `columns`.
///
/// Values are kept as their raw text and sorted in byte order.
pub fn scan_categorical_domains<R: Read>(
    reader: R,
    columns: &[String],
) -> Result<CategoricalDomains, ReferenceTableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let indices = columns
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ReferenceTableError::MissingColumn(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut observed: Vec<BTreeSet<String>> = vec![BTreeSet::new(); columns.len()];
    for record in reader.records() {
        let record = record?;
        for (seen, &idx) in observed.iter_mut().zip(&indices) {
            if let Some(field) = record.get(idx)
                && !Cell::is_missing_token(field)
                && !seen.contains(field)
            {
                seen.insert(field.to_string());
            }
        }
    }

    let mut domains = CategoricalDomains::new();
    for (name, values) in columns.iter().zip(observed) {
        domains.insert(name.clone(), values);
    }
    Ok(domains)
}
