//! Fitted regression models
//!
//! Two artifact kinds are supported, tagged by `kind`:
//!
//! ```json
//! {"kind": "linear", "coefficients": [0.5, -1.25, 3.0], "intercept": 10.0}
//! ```
//!
//! ```json
//! {
//!   "kind": "tree_ensemble",
//!   "aggregation": "sum",
//!   "base_score": 0.5,
//!   "trees": [
//!     {"nodes": [
//!       {"feature": 0, "threshold": 1.5, "left": 1, "right": 2, "default_left": true},
//!       {"value": -0.4},
//!       {"value": 0.7}
//!     ]}
//!   ]
//! }
//! ```
//!
//! Tree nodes are stored in a flat array with the root at index 0. A split
//! sends a row left when `x < threshold`; NaN follows `default_left`.
//! Children always have a larger index than their parent, so every walk
//! terminates.

use predictor_application::{Regressor, RegressorError};
use predictor_domain::FeatureMatrix;
use serde::{Deserialize, Serialize};

/// Linear model: `intercept + coefficients · x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl Regressor for LinearRegressor {
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<f64>, RegressorError> {
        check_width(self.coefficients.len(), features)?;
        Ok(features
            .rows()
            .map(|row| {
                self.intercept
                    + row
                        .iter()
                        .zip(&self.coefficients)
                        .map(|(x, w)| x * w)
                        .sum::<f64>()
            })
            .collect())
    }
}

/// A node of a regression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        #[serde(default)]
        default_left: bool,
    },
    Leaf {
        value: f64,
    },
}

/// A single regression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split { left, right, .. } = *node {
                for child in [left, right] {
                    if child <= idx || child >= self.nodes.len() {
                        return Err(format!(
                            "node {idx} points to invalid child {child} ({} nodes)",
                            self.nodes.len()
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, row: &[f64]) -> Result<f64, RegressorError> {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                TreeNode::Leaf { value } => return Ok(value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    default_left,
                } => {
                    let x = *row.get(feature).ok_or(RegressorError::FeatureIndex {
                        index: feature,
                        n_features: row.len(),
                    })?;
                    let go_left = if x.is_nan() {
                        default_left
                    } else {
                        x < threshold
                    };
                    idx = if go_left { left } else { right };
                }
            }
        }
    }
}

/// How per-tree outputs are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Boosted ensembles
    #[default]
    Sum,
    /// Bagged ensembles (random forests)
    Mean,
}

/// Tree ensemble: `base_score + aggregate(tree outputs)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsembleRegressor {
    #[serde(default)]
    pub aggregation: Aggregation,
    #[serde(default)]
    pub base_score: f64,
    /// Expected matrix width; unchecked when absent
    #[serde(default)]
    pub n_features: Option<usize>,
    pub trees: Vec<RegressionTree>,
}

impl TreeEnsembleRegressor {
    fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("ensemble has no trees".to_string());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate().map_err(|e| format!("tree {i}: {e}"))?;
        }
        Ok(())
    }
}

impl Regressor for TreeEnsembleRegressor {
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<f64>, RegressorError> {
        if let Some(expected) = self.n_features {
            check_width(expected, features)?;
        }
        features
            .rows()
            .map(|row| {
                let total = self
                    .trees
                    .iter()
                    .map(|tree| tree.evaluate(row))
                    .sum::<Result<f64, _>>()?;
                let combined = match self.aggregation {
                    Aggregation::Sum => total,
                    Aggregation::Mean => total / self.trees.len() as f64,
                };
                Ok(self.base_score + combined)
            })
            .collect()
    }
}

/// Model artifact as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearRegressor),
    TreeEnsemble(TreeEnsembleRegressor),
}

impl ModelArtifact {
    /// Check structural invariants that do not depend on the input
    pub fn validate(&self) -> Result<(), String> {
        match self {
            ModelArtifact::Linear(m) if m.coefficients.is_empty() => {
                Err("linear model has no coefficients".to_string())
            }
            ModelArtifact::Linear(_) => Ok(()),
            ModelArtifact::TreeEnsemble(m) => m.validate(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::Linear(_) => "linear",
            ModelArtifact::TreeEnsemble(_) => "tree_ensemble",
        }
    }
}

impl Regressor for ModelArtifact {
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<f64>, RegressorError> {
        match self {
            ModelArtifact::Linear(m) => m.predict(features),
            ModelArtifact::TreeEnsemble(m) => m.predict(features),
        }
    }
}

fn check_width(expected: usize, features: &FeatureMatrix) -> Result<(), RegressorError> {
    if features.n_cols() != expected {
        return Err(RegressorError::FeatureCount {
            expected,
            actual: features.n_cols(),
        });
    }
    Ok(())
}
