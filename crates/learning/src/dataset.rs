//! Labelled feature matrices
//!
//! Rows are samples, columns are features in the fixed order the owning
//! pipeline defines. Labels are class indices in `0..n_classes`.

use nalgebra::DMatrix;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::TrainingError;

/// A labelled feature matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: DMatrix<f64>,
    labels: Vec<usize>,
    n_classes: usize,
}

impl Dataset {
    /// Build a dataset from fixed-width feature rows
    ///
    /// # Arguments
    /// * `rows` - One feature array per sample
    /// * `labels` - Class index per sample
    /// * `n_classes` - Number of classes; every label must be below it
    pub fn from_rows<const N: usize>(
        rows: &[[f64; N]],
        labels: Vec<usize>,
        n_classes: usize,
    ) -> Result<Self, TrainingError> {
        let flat: Vec<f64> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let features = DMatrix::from_row_slice(rows.len(), N, &flat);
        Self::from_matrix(features, labels, n_classes)
    }

    /// Build a dataset from an existing matrix
    pub fn from_matrix(
        features: DMatrix<f64>,
        labels: Vec<usize>,
        n_classes: usize,
    ) -> Result<Self, TrainingError> {
        if features.nrows() == 0 || features.ncols() == 0 {
            return Err(TrainingError::EmptyDataset);
        }
        if features.nrows() != labels.len() {
            return Err(TrainingError::LabelCountMismatch {
                rows: features.nrows(),
                labels: labels.len(),
            });
        }
        if let Some(&label) = labels.iter().find(|&&label| label >= n_classes) {
            return Err(TrainingError::LabelOutOfRange { label, n_classes });
        }
        for row in 0..features.nrows() {
            for column in 0..features.ncols() {
                if !features[(row, column)].is_finite() {
                    return Err(TrainingError::NonFiniteFeature { row, column });
                }
            }
        }

        Ok(Self {
            features,
            labels,
            n_classes,
        })
    }

    /// Feature matrix (rows are samples)
    pub fn features(&self) -> &DMatrix<f64> {
        &self.features
    }

    /// Class label per row
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of declared classes
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Number of rows
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Feature values of one row
    pub fn row(&self, index: usize) -> Vec<f64> {
        self.features.row(index).iter().copied().collect()
    }

    /// Count of rows per class
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.n_classes];
        for &label in &self.labels {
            counts[label] += 1;
        }
        counts
    }

    /// Dataset with the same labels and a replaced feature matrix
    ///
    /// Used to carry scaled features alongside the original labels.
    pub fn with_features(&self, features: DMatrix<f64>) -> Result<Self, TrainingError> {
        Self::from_matrix(features, self.labels.clone(), self.n_classes)
    }

    /// Rows at the given indices, in that order
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select_rows(indices.iter()),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
            n_classes: self.n_classes,
        }
    }

    /// Shuffle and split into `(train, test)`
    ///
    /// The test side receives `ceil(n · test_fraction)` rows. Fails when
    /// either side would be empty.
    pub fn train_test_split(
        &self,
        test_fraction: f64,
        rng: &mut impl Rng,
    ) -> Result<(Self, Self), TrainingError> {
        let rows = self.n_samples();
        let n_test = (rows as f64 * test_fraction).ceil() as usize;
        if !(0.0..1.0).contains(&test_fraction) || n_test == 0 || n_test >= rows {
            return Err(TrainingError::DegenerateSplit {
                test_fraction,
                rows,
            });
        }

        let mut indices: Vec<usize> = (0..rows).collect();
        indices.shuffle(rng);
        let (test, train) = indices.split_at(n_test);

        Ok((self.select(train), self.select(test)))
    }
}
