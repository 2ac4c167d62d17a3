//! Habitability scorer
//!
//! Combines the closed-form habitability indicators (ESI, equilibrium
//! temperature, habitable-zone membership) with a random forest trained on the
//! synthetic set from [`crate::sampling`].

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use learning::{
    ForestConfig, TrainedClassifier, TrainingData, TrainingError, TrainingRecipe, TrainingReport,
};
use physics::{DomainError, HostStar, PhysicalParameters, SOLAR_TEMPERATURE, SpectralClass};

use crate::features::{FeatureVector, feature_vector};
use crate::sampling::{HABITABLE, HabitabilityConfig, generate_training_set};

/// Default host star mass in solar masses
pub const DEFAULT_STAR_MASS: f64 = 1.0;

/// Default host star temperature in Kelvin
pub const DEFAULT_STAR_TEMP: f64 = SOLAR_TEMPERATURE;

/// Failure while scoring habitability
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HabitabilityError {
    /// Invalid physical input
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The model could not be trained
    #[error("habitability model training failed: {0}")]
    Training(#[from] TrainingError),
}

/// Verdict of the habitability model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HabitabilityCategory {
    #[serde(rename = "Likely Habitable")]
    LikelyHabitable,
    #[serde(rename = "Unlikely")]
    Unlikely,
}

impl HabitabilityCategory {
    /// Category for a hard model label
    pub fn from_label(label: usize) -> Self {
        if label == HABITABLE {
            Self::LikelyHabitable
        } else {
            Self::Unlikely
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::LikelyHabitable => "Likely Habitable",
            Self::Unlikely => "Unlikely",
        }
    }

    /// Whether the category counts as habitable
    pub fn is_habitable(&self) -> bool {
        matches!(self, Self::LikelyHabitable)
    }
}

impl fmt::Display for HabitabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Habitability assessment of one planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitabilityResult {
    /// Hard model verdict
    pub habitable: bool,
    /// Positive-class probability in [0, 1]
    pub score: f64,
    /// Verdict as a category label
    pub category: HabitabilityCategory,
    /// Earth Similarity Index in [0, 1]
    pub esi: f64,
    /// Equilibrium temperature in Kelvin
    pub equilibrium_temp: f64,
    /// Orbit lies within the host star's habitable zone
    pub in_habitable_zone: bool,
}

/// Training recipe for the habitability forest
#[derive(Debug, Clone)]
pub struct HabitabilityRecipe {
    config: HabitabilityConfig,
}

impl HabitabilityRecipe {
    pub fn new(config: HabitabilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HabitabilityConfig {
        &self.config
    }
}

impl TrainingRecipe for HabitabilityRecipe {
    fn training_data(&self) -> Result<TrainingData, TrainingError> {
        let data = generate_training_set(&self.config)?;
        let mut split_rng = ChaChaRng::seed_from_u64(self.config.seed);
        let (train, holdout) = data.train_test_split(self.config.test_fraction, &mut split_rng)?;
        Ok(TrainingData {
            train,
            holdout: Some(holdout),
        })
    }

    fn forest_config(&self) -> ForestConfig {
        self.config.forest
    }

    fn model_seed(&self) -> u64 {
        self.config.seed
    }

    fn name(&self) -> &str {
        "habitability"
    }
}

/// Habitability scorer owning its lazily trained classifier
pub struct HabitabilityScorer {
    classifier: TrainedClassifier<HabitabilityRecipe>,
}

impl HabitabilityScorer {
    /// Create an untrained scorer
    pub fn new(config: HabitabilityConfig) -> Self {
        Self {
            classifier: TrainedClassifier::new(HabitabilityRecipe::new(config)),
        }
    }

    /// Train the model if it has not been trained yet
    pub fn ensure_trained(&self) -> Result<TrainingReport, HabitabilityError> {
        Ok(*self.classifier.ensure_trained()?.report())
    }

    /// Whether the model has been trained
    pub fn is_trained(&self) -> bool {
        self.classifier.is_trained()
    }

    /// Number of training runs started so far
    pub fn training_runs(&self) -> usize {
        self.classifier.training_runs()
    }

    /// Score a planet from raw inputs
    ///
    /// # Arguments
    /// * `radius` - Planet radius in Earth radii
    /// * `orbit` - Orbital distance in AU
    /// * `star_type` - Spectral class label; only the first letter is read
    /// * `star_mass` - Stellar mass in M☉, defaults to 1.0
    /// * `star_temp` - Stellar temperature in K, defaults to 5778
    pub fn predict(
        &self,
        radius: f64,
        orbit: f64,
        star_type: &str,
        star_mass: Option<f64>,
        star_temp: Option<f64>,
    ) -> Result<HabitabilityResult, HabitabilityError> {
        let star = HostStar::new(
            SpectralClass::resolve(star_type),
            star_mass.unwrap_or(DEFAULT_STAR_MASS),
            star_temp.unwrap_or(DEFAULT_STAR_TEMP),
        )?;
        let params = PhysicalParameters::new(radius, orbit, star)?;
        self.predict_parameters(&params)
    }

    /// Score a planet description
    ///
    /// Every field is re-validated before the model is touched.
    pub fn predict_parameters(
        &self,
        params: &PhysicalParameters,
    ) -> Result<HabitabilityResult, HabitabilityError> {
        params.validate()?;
        let features: FeatureVector = feature_vector(params)?;
        let fitted = self.classifier.ensure_trained()?;
        log::debug!("Habitability features: {:?}", features);

        let (label, probabilities) = fitted.predict(&features);
        let category = HabitabilityCategory::from_label(label);

        Ok(HabitabilityResult {
            habitable: category.is_habitable(),
            score: probabilities[HABITABLE],
            category,
            esi: params.earth_similarity_index()?,
            equilibrium_temp: params.equilibrium_temperature()?,
            in_habitable_zone: params.in_habitable_zone(),
        })
    }
}

impl Default for HabitabilityScorer {
    fn default() -> Self {
        Self::new(HabitabilityConfig::default())
    }
}
