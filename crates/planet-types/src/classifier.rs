//! Planet-type classifier

use serde::Serialize;
use thiserror::Error;

use learning::{
    ForestConfig, TrainedClassifier, TrainingData, TrainingError, TrainingRecipe, TrainingReport,
};
use physics::DomainError;

use crate::category::{CategoryProbabilities, PlanetCategory};
use crate::features::feature_vector;
use crate::sampling::{PlanetTypeConfig, generate_training_set};

/// Failure while classifying a planet
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassificationError {
    /// Invalid physical input
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The model could not be trained
    #[error("planet-type model training failed: {0}")]
    Training(#[from] TrainingError),
}

/// Predicted category with the full probability breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Most probable category
    pub planet_type: PlanetCategory,
    /// Probability of `planet_type`
    pub confidence: f64,
    /// Probability of every category, in class order
    pub probabilities: CategoryProbabilities,
}

/// Training recipe for the planet-type forest
///
/// The whole synthetic set is used for fitting; there is no held-out split.
#[derive(Debug, Clone)]
pub struct PlanetTypeRecipe {
    config: PlanetTypeConfig,
}

impl PlanetTypeRecipe {
    pub fn new(config: PlanetTypeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlanetTypeConfig {
        &self.config
    }
}

impl TrainingRecipe for PlanetTypeRecipe {
    fn training_data(&self) -> Result<TrainingData, TrainingError> {
        Ok(TrainingData {
            train: generate_training_set(&self.config)?,
            holdout: None,
        })
    }

    fn forest_config(&self) -> ForestConfig {
        self.config.forest
    }

    fn model_seed(&self) -> u64 {
        self.config.seed
    }

    fn name(&self) -> &str {
        "planet-type"
    }
}

/// Planet-type classifier owning its lazily trained model
pub struct PlanetTypeClassifier {
    classifier: TrainedClassifier<PlanetTypeRecipe>,
}

impl PlanetTypeClassifier {
    /// Create an untrained classifier
    pub fn new(config: PlanetTypeConfig) -> Self {
        Self {
            classifier: TrainedClassifier::new(PlanetTypeRecipe::new(config)),
        }
    }

    /// Train the model if it has not been trained yet
    pub fn ensure_trained(&self) -> Result<TrainingReport, ClassificationError> {
        Ok(*self.classifier.ensure_trained()?.report())
    }

    pub fn is_trained(&self) -> bool {
        self.classifier.is_trained()
    }

    pub fn training_runs(&self) -> usize {
        self.classifier.training_runs()
    }

    /// Classify a planet
    ///
    /// # Arguments
    /// * `radius` - Planet radius in Earth radii
    /// * `mass` - Planet mass in Earth masses
    /// * `orbit` - Orbital distance in AU
    ///
    /// # Returns
    /// The most probable category, its probability, and the probability of
    /// every category. Inputs are validated before the model is trained.
    pub fn classify(
        &self,
        radius: f64,
        mass: f64,
        orbit: f64,
    ) -> Result<ClassificationResult, ClassificationError> {
        let features = feature_vector(radius, mass, orbit)?;
        let fitted = self.classifier.ensure_trained()?;
        log::debug!("Planet-type features: {:?}", features);

        let (label, probabilities) = fitted.predict(&features);
        let planet_type = PlanetCategory::from_index(label).ok_or(TrainingError::LabelOutOfRange {
            label,
            n_classes: PlanetCategory::ALL.len(),
        })?;

        Ok(ClassificationResult {
            planet_type,
            confidence: probabilities[label],
            probabilities: CategoryProbabilities::from_slice(&probabilities),
        })
    }
}

impl Default for PlanetTypeClassifier {
    fn default() -> Self {
        Self::new(PlanetTypeConfig::default())
    }
}
