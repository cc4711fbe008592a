//! Fitted column transformer
//!
//! Produces one matrix row per table row: the standardized numeric block
//! first, then one one-hot block per categorical column.
//!
//! ```json
//! {
//!   "numeric": {
//!     "columns": ["area_sqft", "age_years"],
//!     "fill_values": [1100.0, 8.0],
//!     "means": [1180.5, 9.2],
//!     "scales": [410.3, 6.1]
//!   },
//!   "categorical": {
//!     "columns": ["city"],
//!     "categories": [["Delhi", "Mumbai", "Pune"]],
//!     "handle_unknown": "ignore"
//!   }
//! }
//! ```

use predictor_application::{Preprocessor, PreprocessorError};
use predictor_domain::{Cell, FeatureMatrix, Table};
use serde::{Deserialize, Serialize};

/// Imputation and standard scaling for numeric columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericBlock {
    pub columns: Vec<String>,
    /// Replacement for missing cells, applied before scaling
    pub fill_values: Vec<f64>,
    pub means: Vec<f64>,
    /// Standard deviations; zero is treated as one
    pub scales: Vec<f64>,
}

/// What to do with a category that was not seen during fitting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Encode as an all-zero block
    #[default]
    Ignore,
    /// Fail the transform
    Error,
}

/// One-hot encoding for categorical columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalBlock {
    pub columns: Vec<String>,
    /// Known categories per column, in output order
    pub categories: Vec<Vec<String>>,
    pub handle_unknown: HandleUnknown,
}

/// Fitted preprocessor mapping raw records to a numeric matrix
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnTransformer {
    pub numeric: NumericBlock,
    pub categorical: CategoricalBlock,
}

impl ColumnTransformer {
    /// Check that the per-column parameter lists line up
    pub fn validate(&self) -> Result<(), String> {
        let n = self.numeric.columns.len();
        for (name, len) in [
            ("fill_values", self.numeric.fill_values.len()),
            ("means", self.numeric.means.len()),
            ("scales", self.numeric.scales.len()),
        ] {
            if len != n {
                return Err(format!(
                    "numeric.{name} has {len} entries for {n} numeric columns"
                ));
            }
        }

        let c = self.categorical.columns.len();
        if self.categorical.categories.len() != c {
            return Err(format!(
                "categorical.categories has {} entries for {c} categorical columns",
                self.categorical.categories.len()
            ));
        }

        if n + c == 0 {
            return Err("no input columns".to_string());
        }
        Ok(())
    }

    /// Input column names, numeric first
    pub fn input_columns(&self) -> impl Iterator<Item = &str> {
        self.numeric
            .columns
            .iter()
            .chain(self.categorical.columns.iter())
            .map(String::as_str)
    }

    /// Width of the produced matrix
    pub fn n_features_out(&self) -> usize {
        self.numeric.columns.len()
            + self
                .categorical
                .categories
                .iter()
                .map(Vec::len)
                .sum::<usize>()
    }

    fn column_indices(table: &Table, columns: &[String]) -> Result<Vec<usize>, PreprocessorError> {
        columns
            .iter()
            .map(|name| {
                table
                    .column_index(name)
                    .ok_or_else(|| PreprocessorError::MissingColumn(name.clone()))
            })
            .collect()
    }

    fn scale_numeric(&self, i: usize, column: &str, cell: &Cell) -> Result<f64, PreprocessorError> {
        let raw = match cell {
            Cell::Number(n) if !n.is_nan() => *n,
            Cell::Number(_) | Cell::Missing => self.numeric.fill_values[i],
            Cell::Text(s) => {
                return Err(PreprocessorError::NonNumeric {
                    column: column.to_string(),
                    value: s.clone(),
                });
            }
        };
        let scale = match self.numeric.scales[i] {
            s if s == 0.0 => 1.0,
            s => s,
        };
        Ok((raw - self.numeric.means[i]) / scale)
    }

    fn encode_categorical(
        &self,
        i: usize,
        column: &str,
        cell: &Cell,
        out: &mut Vec<f64>,
    ) -> Result<(), PreprocessorError> {
        let categories = &self.categorical.categories[i];
        let start = out.len();
        out.resize(start + categories.len(), 0.0);

        let key = match cell {
            Cell::Missing => None,
            other => Some(other.to_string()),
        };
        let position = key
            .as_deref()
            .and_then(|k| categories.iter().position(|c| c == k));

        match (position, self.categorical.handle_unknown) {
            (Some(pos), _) => out[start + pos] = 1.0,
            (None, HandleUnknown::Ignore) => {}
            (None, HandleUnknown::Error) => {
                return Err(PreprocessorError::UnknownCategory {
                    column: column.to_string(),
                    value: key.unwrap_or_default(),
                });
            }
        }
        Ok(())
    }
}

impl Preprocessor for ColumnTransformer {
    fn transform(&self, table: &Table) -> Result<FeatureMatrix, PreprocessorError> {
        let numeric_idx = Self::column_indices(table, &self.numeric.columns)?;
        let categorical_idx = Self::column_indices(table, &self.categorical.columns)?;

        let width = self.n_features_out();
        let mut values = Vec::with_capacity(table.n_rows() * width);

        for row in table.rows() {
            for (i, &col) in numeric_idx.iter().enumerate() {
                values.push(self.scale_numeric(i, &self.numeric.columns[i], &row[col])?);
            }
            for (i, &col) in categorical_idx.iter().enumerate() {
                self.encode_categorical(i, &self.categorical.columns[i], &row[col], &mut values)?;
            }
        }

        Ok(FeatureMatrix::new(table.n_rows(), width, values)?)
    }
}
