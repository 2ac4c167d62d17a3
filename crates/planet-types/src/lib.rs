//! Planet-type classification
//!
//! Sorts planets into Rocky, Gas Giant, Ice Giant and Super-Earth from radius,
//! mass, orbit and bulk density, using a random forest trained on procedurally
//! generated archetypes.

pub mod category;
pub mod classifier;
pub mod features;
pub mod sampling;


pub use category::{CategoryProbabilities, PlanetCategory};
pub use classifier::{
    ClassificationError, ClassificationResult, PlanetTypeClassifier, PlanetTypeRecipe,
};
pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, feature_vector};
pub use sampling::{Archetype, PlanetTypeConfig, archetypes, generate_training_set};
