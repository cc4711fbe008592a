//! Predict Single use case
//!
//! Turns one submitted form into a one-row table and returns the model's
//! estimate for it.

use crate::context::PredictionContext;
use crate::use_cases::error::PredictionError;
use predictor_domain::{Cell, Prediction, Table};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Input for the PredictSingle use case
#[derive(Debug, Clone, Default)]
pub struct PredictSingleInput {
    /// Submitted field values keyed by feature name
    pub fields: HashMap<String, String>,
}

impl PredictSingleInput {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

impl FromIterator<(String, String)> for PredictSingleInput {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Use case for predicting a single record
pub struct PredictSingleUseCase {
    context: Arc<PredictionContext>,
}

impl PredictSingleUseCase {
    pub fn new(context: Arc<PredictionContext>) -> Self {
        Self { context }
    }

    /// Execute the use case
    ///
    /// Numeric features must parse as `f64`; categorical features are passed
    /// through verbatim, even when they fall outside the known domain.
    pub fn execute(&self, input: &PredictSingleInput) -> Result<Prediction, PredictionError> {
        let table = self.build_record(input)?;
        let predictions = self.context.predict_table(&table)?;

        let value = predictions
            .first()
            .copied()
            .ok_or(PredictionError::PredictionCount {
                expected: 1,
                actual: 0,
            })?;

        debug!("Single-record prediction: {}", value);
        Ok(Prediction::new(value))
    }

    /// Assemble the one-row table in schema order (numeric, then categorical)
    fn build_record(&self, input: &PredictSingleInput) -> Result<Table, PredictionError> {
        let schema = self.context.schema();
        let mut row = Vec::with_capacity(schema.len());

        for name in schema.numeric() {
            let raw = Self::field(input, name)?;
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| PredictionError::InvalidNumber {
                    field: name.clone(),
                    value: raw.to_string(),
                })?;
            row.push(Cell::Number(value));
        }

        for name in schema.categorical() {
            let raw = Self::field(input, name)?;
            row.push(Cell::Text(raw.to_string()));
        }

        let mut table = Table::new(schema.columns())?;
        table.push_row(row)?;
        Ok(table)
    }

    fn field<'a>(input: &'a PredictSingleInput, name: &str) -> Result<&'a str, PredictionError> {
        input
            .fields
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| PredictionError::MissingField(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::fakes::{SilentRegressor, context_with, house_context};

    fn pune_input() -> PredictSingleInput {
        PredictSingleInput::default()
            .with_field("area_sqft", "1000")
            .with_field("age_years", "5")
            .with_field("city", "Pune")
    }

    #[test]
    fn test_valid_record_predicts() {
        let use_case = PredictSingleUseCase::new(house_context());
        let prediction = use_case.execute(&pune_input()).unwrap();
        // 1000 + 5 + len("Pune") + 0.25
        assert_eq!(prediction.value(), 1009.25);
        assert_eq!(prediction.rounded(), 1009.25);
        assert_eq!(prediction.to_string(), "1009.25");
    }

    #[test]
    fn test_prediction_is_idempotent() {
        let use_case = PredictSingleUseCase::new(house_context());
        let first = use_case.execute(&pune_input()).unwrap();
        let second = use_case.execute(&pune_input()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_numeric_fields_are_trimmed() {
        let use_case = PredictSingleUseCase::new(house_context());
        let input = pune_input().with_field("area_sqft", " 1000 ");
        assert_eq!(use_case.execute(&input).unwrap().value(), 1009.25);
    }

    #[test]
    fn test_non_numeric_field_fails() {
        let use_case = PredictSingleUseCase::new(house_context());
        let input = pune_input().with_field("age_years", "five");
        let err = use_case.execute(&input).unwrap_err();
        assert_eq!(
            err,
            PredictionError::InvalidNumber {
                field: "age_years".to_string(),
                value: "five".to_string()
            }
        );
    }

    #[test]
    fn test_missing_field_fails() {
        let use_case = PredictSingleUseCase::new(house_context());
        let mut input = pune_input();
        input.fields.remove("city");
        let err = use_case.execute(&input).unwrap_err();
        assert_eq!(err, PredictionError::MissingField("city".to_string()));
    }

    #[test]
    fn test_unknown_category_passes_through() {
        let use_case = PredictSingleUseCase::new(house_context());
        let input = pune_input().with_field("city", "Atlantis");
        // Not in the domain table, still predicted: 1000 + 5 + 8 + 0.25
        assert_eq!(use_case.execute(&input).unwrap().value(), 1013.25);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let use_case = PredictSingleUseCase::new(house_context());
        let input = pune_input().with_field("submit", "Predict");
        assert!(use_case.execute(&input).is_ok());
    }

    #[test]
    fn test_empty_model_output_fails() {
        let use_case = PredictSingleUseCase::new(context_with(Arc::new(SilentRegressor)));
        let err = use_case.execute(&pune_input()).unwrap_err();
        assert!(matches!(err, PredictionError::PredictionCount { .. }));
    }
}
