//! Per-feature standardisation to zero mean and unit variance

use nalgebra::{DMatrix, DVector};

/// Fitted standard scaler
///
/// Stores the population mean and standard deviation of every column seen at
/// fit time. Constant columns get a unit scale so they map to zero instead of
/// dividing by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: DVector<f64>,
    scale: DVector<f64>,
}

impl StandardScaler {
    /// Fit column statistics on a feature matrix
    pub fn fit(features: &DMatrix<f64>) -> Self {
        let n_features = features.ncols();
        let mean = DVector::from_fn(n_features, |j, _| features.column(j).mean());
        let scale = DVector::from_fn(n_features, |j, _| {
            let std_dev = features.column(j).variance().sqrt();
            if std_dev > 0.0 { std_dev } else { 1.0 }
        });

        Self { mean, scale }
    }

    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Column means
    pub fn mean(&self) -> &DVector<f64> {
        &self.mean
    }

    /// Column standard deviations (1.0 for constant columns)
    pub fn scale(&self) -> &DVector<f64> {
        &self.scale
    }

    /// Standardise every row of a matrix
    ///
    /// # Panics
    /// Panics if the column count differs from the fitted feature count.
    pub fn transform(&self, features: &DMatrix<f64>) -> DMatrix<f64> {
        assert_eq!(
            features.ncols(),
            self.n_features(),
            "scaler fitted on {} features, got {}",
            self.n_features(),
            features.ncols()
        );
        DMatrix::from_fn(features.nrows(), features.ncols(), |i, j| {
            (features[(i, j)] - self.mean[j]) / self.scale[j]
        })
    }

    /// Standardise a single feature row
    ///
    /// # Panics
    /// Panics if the row width differs from the fitted feature count.
    pub fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        assert_eq!(
            row.len(),
            self.n_features(),
            "scaler fitted on {} features, got {}",
            self.n_features(),
            row.len()
        );
        row.iter()
            .enumerate()
            .map(|(j, value)| (value - self.mean[j]) / self.scale[j])
            .collect()
    }
}
