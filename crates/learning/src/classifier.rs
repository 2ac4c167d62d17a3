//! Lazily trained scaler + forest pair
//!
//! A [`TrainedClassifier`] owns a [`TrainingRecipe`] and trains from it at most
//! once. Training happens inside `OnceCell::get_or_try_init`: concurrent first
//! callers block on the cell instead of starting their own run, and a failed
//! run leaves the cell empty so the next call starts over.

use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::TrainingError;
use crate::forest::{ForestConfig, RandomForest};
use crate::scaler::StandardScaler;

/// Labelled data produced by a recipe
#[derive(Debug, Clone)]
pub struct TrainingData {
    /// Rows the scaler and forest are fitted on
    pub train: Dataset,
    /// Optional held-out rows, scored after fitting
    pub holdout: Option<Dataset>,
}

/// How a pipeline builds and fits its model
pub trait TrainingRecipe {
    /// Generate labelled training data
    fn training_data(&self) -> Result<TrainingData, TrainingError>;

    /// Forest hyperparameters
    fn forest_config(&self) -> ForestConfig;

    /// Seed for the forest's bootstrap and feature draws
    fn model_seed(&self) -> u64;

    /// Name used in log lines
    fn name(&self) -> &str;
}

/// Summary of a completed training run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    /// Rows used to fit the model
    pub rows: usize,
    /// Accuracy on the held-out rows, when a held-out set was produced
    pub holdout_accuracy: Option<f64>,
}

/// Fitted scaler and forest
#[derive(Debug, Clone)]
pub struct FittedClassifier {
    scaler: StandardScaler,
    forest: RandomForest,
    report: TrainingReport,
}

impl FittedClassifier {
    /// Fit the scaler on the training rows, then the forest on the scaled rows
    pub fn fit(
        data: &TrainingData,
        config: &ForestConfig,
        seed: u64,
    ) -> Result<Self, TrainingError> {
        let scaler = StandardScaler::fit(data.train.features());
        let scaled = data
            .train
            .with_features(scaler.transform(data.train.features()))?;
        let forest = RandomForest::fit(&scaled, config, seed)?;

        let holdout_accuracy = match &data.holdout {
            Some(holdout) => {
                let scaled_holdout = holdout.with_features(scaler.transform(holdout.features()))?;
                Some(forest.accuracy(&scaled_holdout))
            }
            None => None,
        };

        Ok(Self {
            scaler,
            forest,
            report: TrainingReport {
                rows: data.train.n_samples(),
                holdout_accuracy,
            },
        })
    }

    /// Class probabilities for one unscaled feature row
    ///
    /// The row is transformed with the scaler fitted at training time.
    pub fn predict_proba(&self, features: &[f64]) -> Vec<f64> {
        self.forest.predict_proba(&self.scaler.transform_row(features))
    }

    /// Hard class label and the full probability vector for one unscaled row
    pub fn predict(&self, features: &[f64]) -> (usize, Vec<f64>) {
        let probabilities = self.predict_proba(features);
        let label = crate::tree::argmax(&probabilities);
        (label, probabilities)
    }

    /// Training summary
    pub fn report(&self) -> &TrainingReport {
        &self.report
    }

    /// Fitted scaler
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Fitted forest
    pub fn forest(&self) -> &RandomForest {
        &self.forest
    }
}

/// A classifier trained lazily, at most once, from its recipe
pub struct TrainedClassifier<R: TrainingRecipe> {
    recipe: R,
    fitted: OnceCell<FittedClassifier>,
    training_runs: AtomicUsize,
}

impl<R: TrainingRecipe> TrainedClassifier<R> {
    /// Wrap a recipe; nothing is trained yet
    pub fn new(recipe: R) -> Self {
        Self {
            recipe,
            fitted: OnceCell::new(),
            training_runs: AtomicUsize::new(0),
        }
    }

    /// Whether a fitted model is available
    pub fn is_trained(&self) -> bool {
        self.fitted.get().is_some()
    }

    /// Number of training runs started, including failed ones
    pub fn training_runs(&self) -> usize {
        self.training_runs.load(Ordering::SeqCst)
    }

    /// The recipe this classifier trains from
    pub fn recipe(&self) -> &R {
        &self.recipe
    }

    /// Train if not yet trained and return the fitted model
    ///
    /// Later calls return the same fitted model without retraining.
    pub fn ensure_trained(&self) -> Result<&FittedClassifier, TrainingError> {
        self.fitted.get_or_try_init(|| {
            self.training_runs.fetch_add(1, Ordering::SeqCst);
            log::info!("Training {} classifier", self.recipe.name());

            let data = self.recipe.training_data()?;
            let fitted = FittedClassifier::fit(
                &data,
                &self.recipe.forest_config(),
                self.recipe.model_seed(),
            )?;

            let report = fitted.report();
            match report.holdout_accuracy {
                Some(accuracy) => log::info!(
                    "Trained {} classifier on {} rows (held-out accuracy {:.3})",
                    self.recipe.name(),
                    report.rows,
                    accuracy
                ),
                None => log::info!(
                    "Trained {} classifier on {} rows",
                    self.recipe.name(),
                    report.rows
                ),
            }
            Ok(fitted)
        })
    }

    /// Fitted model, if training has completed
    pub fn fitted(&self) -> Option<&FittedClassifier> {
        self.fitted.get()
    }
}
