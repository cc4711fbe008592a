//! Categorical domain table

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Known values of each categorical feature (Value Object)
///
/// Built once from a reference table. Each value list is de-duplicated and
/// sorted in byte order so option lists render deterministically. Used only
/// to populate selection widgets; submitted values are never checked
/// against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalDomains {
    domains: BTreeMap<String, Vec<String>>,
}

impl CategoricalDomains {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the observed values of one feature, replacing any earlier entry
    pub fn insert<I, S>(&mut self, feature: impl Into<String>, observed: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let distinct: BTreeSet<String> = observed.into_iter().map(Into::into).collect();
        self.domains
            .insert(feature.into(), distinct.into_iter().collect());
    }

    pub fn with_feature<I, S>(mut self, feature: impl Into<String>, observed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(feature, observed);
        self
    }

    /// Sorted distinct values of `feature`; empty when unknown
    pub fn values(&self, feature: &str) -> &[String] {
        self.domains
            .get(feature)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_sorted_and_unique() {
        let domains = CategoricalDomains::new()
            .with_feature("city", ["Pune", "Delhi", "Pune", "Mumbai", "Delhi"]);
        assert_eq!(domains.values("city"), &["Delhi", "Mumbai", "Pune"]);
    }

    #[test]
    fn test_byte_order_sorting() {
        let domains = CategoricalDomains::new().with_feature("k", ["b", "B", "a", "10", "9"]);
        assert_eq!(domains.values("k"), &["10", "9", "B", "a", "b"]);
    }

    #[test]
    fn test_unknown_feature_is_empty() {
        let domains = CategoricalDomains::new();
        assert!(domains.values("city").is_empty());
        assert!(domains.is_empty());
    }

    #[test]
    fn test_insert_replaces() {
        let mut domains = CategoricalDomains::new();
        domains.insert("city", ["Pune"]);
        domains.insert("city", ["Delhi"]);
        assert_eq!(domains.values("city"), &["Delhi"]);
        assert_eq!(domains.len(), 1);
    }
}
