use thiserror::Error;

/// Failure while building a training set or fitting a model
///
/// Training runs on fixed seeds, so any of these indicates a programming or
/// configuration error rather than a transient condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    /// The dataset has no rows
    #[error("training set is empty")]
    EmptyDataset,

    /// Row and label counts differ
    #[error("training set has {rows} rows but {labels} labels")]
    LabelCountMismatch { rows: usize, labels: usize },

    /// A label is outside the declared class range
    #[error("label {label} is out of range for {n_classes} classes")]
    LabelOutOfRange { label: usize, n_classes: usize },

    /// A feature value is NaN or infinite
    #[error("non-finite feature value in row {row}, column {column}")]
    NonFiniteFeature { row: usize, column: usize },

    /// Train/test split would leave one side empty
    #[error("test fraction {test_fraction} leaves an empty split of {rows} rows")]
    DegenerateSplit { test_fraction: f64, rows: usize },

    /// Forest configuration cannot produce a model
    #[error("invalid model configuration: {0}")]
    InvalidConfig(String),

    /// Synthetic data generation failed
    #[error("synthetic data generation failed: {0}")]
    Generation(String),
}
