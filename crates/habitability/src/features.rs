//! Habitability feature vector
//!
//! Column order is fixed; the scaler and forest are fitted in this order and
//! the synthetic generator writes rows in this order.

use physics::{DomainError, PhysicalParameters};

/// Number of engineered features
pub const FEATURE_COUNT: usize = 8;

/// Feature names in column order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "radius",
    "orbit",
    "star_type_code",
    "star_mass",
    "star_temp",
    "in_habitable_zone",
    "equilibrium_temp",
    "esi",
];

/// One engineered habitability row
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Assemble a feature row from already-derived quantities
///
/// Shared by inference and the synthetic generator so both write columns in
/// the same order.
#[allow(clippy::too_many_arguments)]
pub fn assemble(
    radius: f64,
    orbit: f64,
    star_type_code: u8,
    star_mass: f64,
    star_temp: f64,
    in_habitable_zone: bool,
    equilibrium_temp: f64,
    esi: f64,
) -> FeatureVector {
    [
        radius,
        orbit,
        f64::from(star_type_code),
        star_mass,
        star_temp,
        if in_habitable_zone { 1.0 } else { 0.0 },
        equilibrium_temp,
        esi,
    ]
}

/// Engineered features for a validated planet description
///
/// The habitable-zone flag uses the host star's luminosity-derived bounds.
pub fn feature_vector(params: &PhysicalParameters) -> Result<FeatureVector, DomainError> {
    params.validate()?;
    let equilibrium_temp = params.equilibrium_temperature()?;
    let esi = params.earth_similarity_index()?;

    Ok(assemble(
        params.radius,
        params.orbit,
        params.star.spectral_class.code(),
        params.star.mass,
        params.star.temperature,
        params.in_habitable_zone(),
        equilibrium_temp,
        esi,
    ))
}
