//! Earth Similarity Index
//!
//! Each dimension contributes `1 - |x - x⊕| / (x + x⊕)`, raised to its weight.
//! The index is the product of the weighted components.
//!
//! # References
//! - Schulze-Makuch et al. (2011) - "A Two-Tiered Approach to Assessing the
//!   Habitability of Exoplanets"

use crate::temperature::EARTH_TEMPERATURE;

/// Radius weight
pub const RADIUS_WEIGHT: f64 = 0.57;
/// Orbital distance weight
pub const ORBIT_WEIGHT: f64 = 0.29;
/// Temperature weight
pub const TEMPERATURE_WEIGHT: f64 = 0.14;

/// Earth reference radius in Earth radii
pub const EARTH_RADIUS: f64 = 1.0;
/// Earth reference orbit in AU
pub const EARTH_ORBIT: f64 = 1.0;

/// Similarity of one quantity to its Earth reference, in [0, 1] for positive inputs
pub fn similarity_component(value: f64, reference: f64) -> f64 {
    1.0 - ((value - reference) / (value + reference)).abs()
}

/// Earth Similarity Index from radius, orbit and temperature
///
/// # Arguments
/// * `radius` - Planet radius in Earth radii
/// * `orbit` - Orbital distance in AU
/// * `temp` - Equilibrium temperature in Kelvin
///
/// # Returns
/// ESI clamped to [0, 1]; exactly 1.0 for Earth's own values
///
/// # Examples
/// ```
/// use physics::earth_similarity_index;
///
/// assert_eq!(earth_similarity_index(1.0, 1.0, 288.0), 1.0);
/// assert!(earth_similarity_index(11.2, 5.2, 110.0) < 0.5);
/// ```
pub fn earth_similarity_index(radius: f64, orbit: f64, temp: f64) -> f64 {
    let radius_component = similarity_component(radius, EARTH_RADIUS);
    let orbit_component = similarity_component(orbit, EARTH_ORBIT);
    let temp_component = similarity_component(temp, EARTH_TEMPERATURE);

    let esi = radius_component.powf(RADIUS_WEIGHT)
        * orbit_component.powf(ORBIT_WEIGHT)
        * temp_component.powf(TEMPERATURE_WEIGHT);

    // NaN (from a zero-sum component) falls through to 0
    if esi.is_nan() { 0.0 } else { esi.clamp(0.0, 1.0) }
}
