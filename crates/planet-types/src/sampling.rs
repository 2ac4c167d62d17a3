//! Synthetic planet-type training set
//!
//! Each category is an archetype with uniform ranges for radius (R⊕), mass
//! (M⊕) and orbit (AU). Rows are written category by category in class order;
//! density is derived from mass and radius.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use learning::{Dataset, ForestConfig, TrainingError};
use physics::density;

use crate::category::PlanetCategory;
use crate::features::{FeatureVector, assemble};

/// Sampling ranges for one planet category
#[derive(Debug, Clone, PartialEq)]
pub struct Archetype {
    pub category: PlanetCategory,
    pub count: usize,
    pub radius: Range<f64>,
    pub mass: Range<f64>,
    pub orbit: Range<f64>,
}

/// Training archetypes in class order
pub fn archetypes() -> [Archetype; 4] {
    [
        Archetype {
            category: PlanetCategory::Rocky,
            count: 300,
            radius: 0.3..2.0,
            mass: 0.1..3.0,
            orbit: 0.3..2.0,
        },
        Archetype {
            category: PlanetCategory::GasGiant,
            count: 250,
            radius: 8.0..15.0,
            mass: 50.0..400.0,
            orbit: 2.0..10.0,
        },
        Archetype {
            category: PlanetCategory::IceGiant,
            count: 250,
            radius: 3.0..5.0,
            mass: 10.0..20.0,
            orbit: 5.0..30.0,
        },
        Archetype {
            category: PlanetCategory::SuperEarth,
            count: 200,
            radius: 2.0..3.5,
            mass: 3.0..10.0,
            orbit: 0.5..3.0,
        },
    ]
}

/// Planet-type training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetTypeConfig {
    /// Seed for data generation and the forest
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Forest hyperparameters
    #[serde(default)]
    pub forest: ForestConfig,
}

fn default_seed() -> u64 {
    42
}

impl Default for PlanetTypeConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            forest: ForestConfig::default(),
        }
    }
}

impl Archetype {
    /// Draw one row from this archetype's ranges
    pub fn sample(&self, rng: &mut ChaChaRng) -> Result<FeatureVector, TrainingError> {
        let radius = rng.random_range(self.radius.clone());
        let mass = rng.random_range(self.mass.clone());
        let orbit = rng.random_range(self.orbit.clone());
        let density =
            density(mass, radius).map_err(|e| TrainingError::Generation(e.to_string()))?;

        Ok(assemble(radius, mass, orbit, density))
    }
}

/// Generate the labelled planet-type training set
pub fn generate_training_set(config: &PlanetTypeConfig) -> Result<Dataset, TrainingError> {
    let mut rng = ChaChaRng::seed_from_u64(config.seed);
    let archetypes = archetypes();
    let total: usize = archetypes.iter().map(|a| a.count).sum();
    let mut rows = Vec::with_capacity(total);
    let mut labels = Vec::with_capacity(total);

    for archetype in &archetypes {
        for _ in 0..archetype.count {
            rows.push(archetype.sample(&mut rng)?);
            labels.push(archetype.category.index());
        }
    }

    Dataset::from_rows(&rows, labels, PlanetCategory::ALL.len())
}
