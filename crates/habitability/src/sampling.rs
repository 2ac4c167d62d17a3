//! Synthetic habitability training set
//!
//! Labelled rows are drawn from fixed parameter ranges. Positive rows are
//! Earth-like planets around Sun-like stars. Negative rows come from three
//! regimes: oversized planets anywhere, small planets too close in, and small
//! planets too far out.
//!
//! The generator is a pure function of its seed. Other RNG algorithms produce
//! different values from the same seed; the distributional shape is what
//! stays fixed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use learning::{Dataset, ForestConfig, TrainingError};
use physics::{SOLAR_TEMPERATURE, SpectralClass, earth_similarity_index, equilibrium_temperature};

use crate::features::{FeatureVector, assemble};

/// Label of habitable rows
pub const HABITABLE: usize = 1;
/// Label of uninhabitable rows
pub const UNINHABITABLE: usize = 0;

/// Orbit range (AU) treated as the habitable zone when labelling negative rows
///
/// Negative rows use this fixed solar-like window instead of their own star's
/// luminosity-derived zone.
pub const TRAINING_HZ_RANGE: (f64, f64) = (0.8, 1.5);

// =============================================================================
// Configuration
// =============================================================================

/// Habitability training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitabilityConfig {
    /// Seed for data generation, the train/test split and the forest
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of habitable rows
    #[serde(default = "default_positive_samples")]
    pub positive_samples: usize,
    /// Number of uninhabitable rows
    #[serde(default = "default_negative_samples")]
    pub negative_samples: usize,
    /// Fraction of rows held out for scoring
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    /// Forest hyperparameters
    #[serde(default)]
    pub forest: ForestConfig,
}

fn default_seed() -> u64 {
    42
}

fn default_positive_samples() -> usize {
    300
}

fn default_negative_samples() -> usize {
    700
}

fn default_test_fraction() -> f64 {
    0.2
}

impl Default for HabitabilityConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            positive_samples: default_positive_samples(),
            negative_samples: default_negative_samples(),
            test_fraction: default_test_fraction(),
            forest: ForestConfig::default(),
        }
    }
}

// =============================================================================
// Row Sampling
// =============================================================================

/// Stellar temperature scaled from mass: T = 5778 K · √M
fn scaled_star_temperature(star_mass: f64) -> f64 {
    SOLAR_TEMPERATURE * star_mass.sqrt()
}

/// Build a row from sampled planet and star values
fn derived_row(
    radius: f64,
    orbit: f64,
    star_type_code: u8,
    star_mass: f64,
    in_habitable_zone: bool,
) -> Result<FeatureVector, TrainingError> {
    let star_temp = scaled_star_temperature(star_mass);
    let temp = equilibrium_temperature(star_temp, star_mass, orbit)
        .map_err(|e| TrainingError::Generation(e.to_string()))?;
    let esi = earth_similarity_index(radius, orbit, temp);

    Ok(assemble(
        radius,
        orbit,
        star_type_code,
        star_mass,
        star_temp,
        in_habitable_zone,
        temp,
        esi,
    ))
}

/// Sample an Earth-like planet around a Sun-like G star
pub fn sample_habitable(rng: &mut ChaChaRng) -> Result<FeatureVector, TrainingError> {
    let radius = rng.random_range(0.5..2.0);
    let orbit = rng.random_range(0.8..1.5);
    let star_mass = rng.random_range(0.8..1.2);

    derived_row(radius, orbit, SpectralClass::G.code(), star_mass, true)
}

/// Sample a planet from one of the three uninhabitable regimes
pub fn sample_uninhabitable(rng: &mut ChaChaRng) -> Result<FeatureVector, TrainingError> {
    let (radius, orbit) = if rng.random::<f64>() < 0.33 {
        // Oversized: giants at any distance
        (rng.random_range(4.0..15.0), rng.random_range(0.1..5.0))
    } else if rng.random::<f64>() < 0.5 {
        // Too close: scorched
        (rng.random_range(0.5..3.0), rng.random_range(0.01..0.5))
    } else {
        // Too far: frozen
        (rng.random_range(0.5..3.0), rng.random_range(2.0..10.0))
    };
    let star_mass = rng.random_range(0.3..2.0);
    let star_type_code = rng.random_range(1..=7);
    let (hz_inner, hz_outer) = TRAINING_HZ_RANGE;
    let in_hz = (hz_inner..=hz_outer).contains(&orbit);

    derived_row(radius, orbit, star_type_code, star_mass, in_hz)
}

// =============================================================================
// Training Set
// =============================================================================

/// Generate the labelled habitability training set
///
/// Habitable rows come first, followed by uninhabitable rows.
pub fn generate_training_set(config: &HabitabilityConfig) -> Result<Dataset, TrainingError> {
    let mut rng = ChaChaRng::seed_from_u64(config.seed);
    let total = config.positive_samples + config.negative_samples;
    let mut rows = Vec::with_capacity(total);
    let mut labels = Vec::with_capacity(total);

    for _ in 0..config.positive_samples {
        rows.push(sample_habitable(&mut rng)?);
        labels.push(HABITABLE);
    }
    for _ in 0..config.negative_samples {
        rows.push(sample_uninhabitable(&mut rng)?);
        labels.push(UNINHABITABLE);
    }

    Dataset::from_rows(&rows, labels, 2)
}
