//! Deterministic port implementations for use case tests

use crate::context::PredictionContext;
use crate::ports::preprocessor::{Preprocessor, PreprocessorError};
use crate::ports::regressor::{Regressor, RegressorError};
use crate::ports::table_codec::{TableCodec, TableCodecError};
use predictor_domain::{CategoricalDomains, Cell, FeatureMatrix, FeatureSchema, Table};
use std::sync::Arc;

/// Numeric columns pass through, categorical columns become their text length
pub(crate) struct FakePreprocessor {
    schema: FeatureSchema,
}

impl Preprocessor for FakePreprocessor {
    fn transform(&self, table: &Table) -> Result<FeatureMatrix, PreprocessorError> {
        let mut rows = vec![Vec::with_capacity(self.schema.len()); table.n_rows()];
        for name in self.schema.columns() {
            let column = table
                .column(name)
                .map_err(|_| PreprocessorError::MissingColumn(name.to_string()))?;
            for (row, cell) in rows.iter_mut().zip(column) {
                let value = match (self.schema.is_numeric(name), cell) {
                    (_, Cell::Missing) => 0.0,
                    (true, Cell::Number(n)) => *n,
                    (true, Cell::Text(s)) => {
                        return Err(PreprocessorError::NonNumeric {
                            column: name.to_string(),
                            value: s.clone(),
                        });
                    }
                    (false, other) => other.to_string().len() as f64,
                };
                row.push(value);
            }
        }
        Ok(FeatureMatrix::from_rows(self.schema.len(), rows)?)
    }
}

/// Sum of all features plus an offset
pub(crate) struct SumRegressor {
    pub offset: f64,
}

impl Regressor for SumRegressor {
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<f64>, RegressorError> {
        Ok(features
            .rows()
            .map(|row| row.iter().sum::<f64>() + self.offset)
            .collect())
    }
}

/// Always returns no predictions
pub(crate) struct SilentRegressor;

impl Regressor for SilentRegressor {
    fn predict(&self, _features: &FeatureMatrix) -> Result<Vec<f64>, RegressorError> {
        Ok(vec![])
    }
}

/// Comma-separated codec without quoting
pub(crate) struct PlainCsv;

impl TableCodec for PlainCsv {
    fn decode(&self, bytes: &[u8]) -> Result<Table, TableCodecError> {
        let text =
            std::str::from_utf8(bytes).map_err(|e| TableCodecError::Malformed(e.to_string()))?;
        let mut lines = text.lines();
        let header = lines.next().ok_or(TableCodecError::Empty)?;
        let rows = lines
            .map(|l| l.split(',').map(str::to_string).collect())
            .collect();
        Ok(Table::from_text_rows(header.split(','), rows)?)
    }

    fn encode(&self, table: &Table) -> Result<Vec<u8>, TableCodecError> {
        let mut out = table.columns().join(",");
        out.push('\n');
        for row in table.rows() {
            let fields: Vec<String> = row.iter().map(Cell::to_string).collect();
            out.push_str(&fields.join(","));
            out.push('\n');
        }
        Ok(out.into_bytes())
    }

    fn content_type(&self) -> &'static str {
        "text/csv"
    }
}

pub(crate) fn house_schema() -> FeatureSchema {
    FeatureSchema::new(
        vec!["area_sqft".to_string(), "age_years".to_string()],
        vec!["city".to_string()],
    )
    .unwrap()
}

pub(crate) fn context_with(regressor: Arc<dyn Regressor>) -> Arc<PredictionContext> {
    let schema = house_schema();
    let domains = CategoricalDomains::new().with_feature("city", ["Delhi", "Mumbai", "Pune"]);
    Arc::new(PredictionContext::new(
        schema.clone(),
        domains,
        Arc::new(FakePreprocessor { schema }),
        regressor,
    ))
}

pub(crate) fn house_context() -> Arc<PredictionContext> {
    context_with(Arc::new(SumRegressor { offset: 0.25 }))
}
