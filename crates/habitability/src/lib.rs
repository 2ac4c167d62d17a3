//! Habitability scoring
//!
//! Scores how Earth-like a candidate planet is. Closed-form indicators (ESI,
//! equilibrium temperature, habitable-zone membership) are reported directly;
//! the binary verdict and its probability come from a random forest trained
//! lazily on a seeded synthetic population.

pub mod features;
pub mod sampling;
pub mod scorer;


pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, feature_vector};
pub use sampling::{HabitabilityConfig, generate_training_set};
pub use scorer::{
    HabitabilityCategory, HabitabilityError, HabitabilityRecipe, HabitabilityResult,
    HabitabilityScorer,
};
