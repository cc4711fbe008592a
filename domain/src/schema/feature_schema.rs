//! Feature schema value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered numeric and categorical feature names (Value Object)
///
/// Mirrors the `feature_list.json` descriptor written next to the fitted
/// preprocessor. Column order matters: records are assembled numeric
/// columns first, then categorical columns, each in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    #[serde(rename = "num_cols")]
    numeric: Vec<String>,
    #[serde(rename = "cat_cols")]
    categorical: Vec<String>,
}

impl FeatureSchema {
    /// Create a validated schema
    pub fn new(numeric: Vec<String>, categorical: Vec<String>) -> Result<Self, DomainError> {
        let schema = Self {
            numeric,
            categorical,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Check that the schema names at least one column and no name repeats
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.numeric.is_empty() && self.categorical.is_empty() {
            return Err(DomainError::EmptySchema);
        }
        let mut seen = HashSet::new();
        for name in self.columns() {
            if !seen.insert(name) {
                return Err(DomainError::DuplicateColumn(name.to_string()));
            }
        }
        Ok(())
    }

    pub fn numeric(&self) -> &[String] {
        &self.numeric
    }

    pub fn categorical(&self) -> &[String] {
        &self.categorical
    }

    /// All column names, numeric first
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.numeric
            .iter()
            .chain(self.categorical.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.numeric.len() + self.categorical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self, name: &str) -> bool {
        self.numeric.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_deserialize_descriptor() {
        let json = r#"{"num_cols": ["area_sqft", "age_years"], "cat_cols": ["city"]}"#;
        let schema: FeatureSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.numeric(), &names(&["area_sqft", "age_years"])[..]);
        assert_eq!(schema.categorical(), &names(&["city"])[..]);
        assert_eq!(
            schema.columns().collect::<Vec<_>>(),
            vec!["area_sqft", "age_years", "city"]
        );
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_empty_schema_rejected() {
        let err = FeatureSchema::new(vec![], vec![]).unwrap_err();
        assert_eq!(err, DomainError::EmptySchema);
    }

    #[test]
    fn test_duplicate_across_lists_rejected() {
        let err = FeatureSchema::new(names(&["city"]), names(&["city"])).unwrap_err();
        assert_eq!(err, DomainError::DuplicateColumn("city".to_string()));
    }

    #[test]
    fn test_is_numeric() {
        let schema = FeatureSchema::new(names(&["area_sqft"]), names(&["city"])).unwrap();
        assert!(schema.is_numeric("area_sqft"));
        assert!(!schema.is_numeric("city"));
    }
}
