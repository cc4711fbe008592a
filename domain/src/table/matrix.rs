//! Dense numeric feature matrix

use crate::core::error::DomainError;

/// Row-major `f64` matrix produced by a preprocessor
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    n_rows: usize,
    n_cols: usize,
    values: Vec<f64>,
}

impl FeatureMatrix {
    /// Wrap a flat row-major buffer of `n_rows * n_cols` values
    pub fn new(n_rows: usize, n_cols: usize, values: Vec<f64>) -> Result<Self, DomainError> {
        if n_rows.checked_mul(n_cols) != Some(values.len()) {
            return Err(DomainError::MatrixShape {
                rows: n_rows,
                cols: n_cols,
                len: values.len(),
            });
        }
        Ok(Self {
            n_rows,
            n_cols,
            values,
        })
    }

    /// Build from per-row vectors that must all have `n_cols` entries
    pub fn from_rows(n_cols: usize, rows: Vec<Vec<f64>>) -> Result<Self, DomainError> {
        let n_rows = rows.len();
        let mut values = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(DomainError::RowWidthMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            values.extend(row);
        }
        Self::new(n_rows, n_cols, values)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn row(&self, idx: usize) -> &[f64] {
        let start = idx * self.n_cols;
        &self.values[start..start + self.n_cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.n_rows).map(move |idx| self.row(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_checked() {
        assert!(FeatureMatrix::new(2, 2, vec![1.0, 2.0, 3.0]).is_err());
        let m = FeatureMatrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_from_rows() {
        let m =
            FeatureMatrix::from_rows(3, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.rows().map(|r| r[2]).collect::<Vec<_>>(), vec![3.0, 6.0]);
        assert!(FeatureMatrix::from_rows(2, vec![vec![1.0]]).is_err());
    }

    #[test]
    fn test_zero_width_rows() {
        let m = FeatureMatrix::new(3, 0, vec![]).unwrap();
        assert_eq!(m.rows().count(), 3);
        assert!(m.row(0).is_empty());
    }
}
