//! Bulk density relative to Earth

use crate::error::{DomainError, require_positive};

/// Earth's mean density in g/cm³
pub const EARTH_DENSITY: f64 = 5.51;

/// Bulk density of a planet
///
/// `ρ = M / R³ × 5.51` with mass and radius in Earth units.
///
/// # Arguments
/// * `mass` - Planet mass in Earth masses (M⊕)
/// * `radius` - Planet radius in Earth radii (R⊕)
///
/// # Returns
/// Density in g/cm³, or a [`DomainError`] when the radius is not positive
pub fn density(mass: f64, radius: f64) -> Result<f64, DomainError> {
    let radius = require_positive("radius", radius)?;
    Ok(mass / radius.powi(3) * EARTH_DENSITY)
}
