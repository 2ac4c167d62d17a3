//! Planetary equilibrium temperature
//!
//! A simplified scaling, not a radiative balance: no albedo, no stellar radius.
//! The expression is what the classifiers were trained on, so it must stay
//! identical between training and inference.

use crate::error::{DomainError, require_positive};

/// Earth's mean surface temperature in Kelvin, the ESI temperature reference
pub const EARTH_TEMPERATURE: f64 = 288.0;

/// Equilibrium temperature of a planet
///
/// `T = T★ · √(M★ / (2·a))`
///
/// # Arguments
/// * `star_temp` - Stellar effective temperature in Kelvin
/// * `star_mass` - Stellar mass in solar masses (M☉)
/// * `orbit` - Orbital distance in AU
///
/// # Returns
/// Temperature in Kelvin, or a [`DomainError`] when the orbit is not positive
///
/// # Examples
/// ```
/// use physics::equilibrium_temperature;
///
/// let temp = equilibrium_temperature(5778.0, 1.0, 0.5).unwrap();
/// assert_eq!(temp, 5778.0);
/// ```
pub fn equilibrium_temperature(
    star_temp: f64,
    star_mass: f64,
    orbit: f64,
) -> Result<f64, DomainError> {
    let orbit = require_positive("orbit", orbit)?;
    Ok(star_temp * (star_mass / (2.0 * orbit)).sqrt())
}
