//! Feature scaling and random-forest classification
//!
//! The pieces both characterization pipelines share: labelled datasets with a
//! seeded train/test split, a standard scaler, an arena-based CART tree, a
//! bagged forest, and [`TrainedClassifier`], which trains a scaler + forest
//! pair lazily and at most once.

pub mod classifier;
pub mod dataset;
pub mod error;
pub mod forest;
pub mod scaler;
pub mod tree;

#[cfg(test)]
mod dataset_test;
#[cfg(test)]
mod forest_test;

pub use classifier::{
    FittedClassifier, TrainedClassifier, TrainingData, TrainingRecipe, TrainingReport,
};
pub use dataset::Dataset;
pub use error::TrainingError;
pub use forest::{ForestConfig, RandomForest};
pub use scaler::StandardScaler;
pub use tree::{DecisionTree, MaxFeatures, TreeConfig};
