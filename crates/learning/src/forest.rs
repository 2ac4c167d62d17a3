//! Bagged ensemble of decision trees
//!
//! Every tree is grown on a bootstrap sample of the training rows with its own
//! RNG. Tree seeds are drawn from the forest seed before any tree is grown, so
//! the fitted forest is identical however rayon schedules the work.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::TrainingError;
use crate::tree::{DecisionTree, TreeConfig, argmax};

/// Random forest hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of trees
    #[serde(default = "default_n_estimators")]
    pub n_estimators: usize,
    /// Draw a bootstrap sample per tree; otherwise every tree sees all rows
    #[serde(default = "default_bootstrap")]
    pub bootstrap: bool,
    /// Per-tree growth limits
    #[serde(default)]
    pub tree: TreeConfig,
}

fn default_n_estimators() -> usize {
    100
}

fn default_bootstrap() -> bool {
    true
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: default_n_estimators(),
            bootstrap: default_bootstrap(),
            tree: TreeConfig::default(),
        }
    }
}

/// A fitted random forest classifier
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_classes: usize,
    n_features: usize,
}

impl RandomForest {
    /// Fit a forest on a dataset
    ///
    /// # Arguments
    /// * `data` - Training rows (already scaled, if scaling is used)
    /// * `config` - Forest hyperparameters
    /// * `seed` - Master seed for bootstrap draws and feature subsets
    pub fn fit(data: &Dataset, config: &ForestConfig, seed: u64) -> Result<Self, TrainingError> {
        if config.n_estimators == 0 {
            return Err(TrainingError::InvalidConfig(
                "n_estimators must be at least 1".to_string(),
            ));
        }
        if config.tree.min_samples_split < 2 {
            return Err(TrainingError::InvalidConfig(
                "min_samples_split must be at least 2".to_string(),
            ));
        }

        let mut rng = ChaChaRng::seed_from_u64(seed);
        let tree_seeds: Vec<u64> = (0..config.n_estimators).map(|_| rng.random()).collect();
        let n_samples = data.n_samples();

        let trees = tree_seeds
            .into_par_iter()
            .map(|tree_seed| {
                let mut tree_rng = ChaChaRng::seed_from_u64(tree_seed);
                let samples: Vec<usize> = if config.bootstrap {
                    (0..n_samples)
                        .map(|_| tree_rng.random_range(0..n_samples))
                        .collect()
                } else {
                    (0..n_samples).collect()
                };
                DecisionTree::fit(
                    data.features(),
                    data.labels(),
                    data.n_classes(),
                    &samples,
                    &config.tree,
                    &mut tree_rng,
                )
            })
            .collect();

        Ok(Self {
            trees,
            n_classes: data.n_classes(),
            n_features: data.n_features(),
        })
    }

    /// Mean class distribution across trees
    pub fn predict_proba(&self, row: &[f64]) -> Vec<f64> {
        let mut totals = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (total, p) in totals.iter_mut().zip(tree.predict_proba(row)) {
                *total += p;
            }
        }
        let n_trees = self.trees.len() as f64;
        totals.iter().map(|total| total / n_trees).collect()
    }

    /// Most probable class; the lowest index wins ties
    pub fn predict(&self, row: &[f64]) -> usize {
        argmax(&self.predict_proba(row))
    }

    /// Fraction of rows whose predicted class matches the label
    pub fn accuracy(&self, data: &Dataset) -> f64 {
        let correct = (0..data.n_samples())
            .filter(|&i| self.predict(&data.row(i)) == data.labels()[i])
            .count();
        correct as f64 / data.n_samples() as f64
    }

    /// Fitted trees
    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// Number of classes
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Number of feature columns expected by [`RandomForest::predict`]
    pub fn n_features(&self) -> usize {
        self.n_features
    }
}
