//! Planet-type feature vector: [radius, mass, orbit, density]

use physics::{DomainError, density, require_positive};

/// Number of engineered features
pub const FEATURE_COUNT: usize = 4;

/// Feature names in column order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["radius", "mass", "orbit", "density"];

/// One engineered planet-type row
pub type FeatureVector = [f64; FEATURE_COUNT];

pub fn assemble(radius: f64, mass: f64, orbit: f64, density: f64) -> FeatureVector {
    [radius, mass, orbit, density]
}

/// Validate raw inputs and build the feature row
pub fn feature_vector(radius: f64, mass: f64, orbit: f64) -> Result<FeatureVector, DomainError> {
    let radius = require_positive("radius", radius)?;
    let mass = require_positive("mass", mass)?;
    let orbit = require_positive("orbit", orbit)?;

    Ok(assemble(radius, mass, orbit, density(mass, radius)?))
}
