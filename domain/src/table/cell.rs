//! Table cell value

use serde::{Deserialize, Serialize};

/// Field values read as missing when they appear in delimited text.
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Missing,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Whether `raw` denotes a missing value in delimited text
    pub fn is_missing_token(raw: &str) -> bool {
        MISSING_VALUE_TOKENS.contains(&raw)
    }

    /// Numeric reading of a cell: trimmed text is parsed, missing tokens
    /// become [`Cell::Missing`], and unparseable text is left as it is.
    pub fn to_numeric(&self) -> Cell {
        match self {
            Cell::Text(raw) => {
                let trimmed = raw.trim();
                if Cell::is_missing_token(trimmed) {
                    Cell::Missing
                } else {
                    trimmed
                        .parse()
                        .map(Cell::Number)
                        .unwrap_or_else(|_| self.clone())
                }
            }
            other => other.clone(),
        }
    }

    /// Categorical reading of a cell: missing tokens become
    /// [`Cell::Missing`], any other value is kept untouched.
    pub fn to_categorical(&self) -> Cell {
        match self {
            Cell::Text(raw) if Cell::is_missing_token(raw) => Cell::Missing,
            other => other.clone(),
        }
    }
}

impl std::fmt::Display for Cell {
    /// Text form used when writing delimited output; missing cells are empty
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}
