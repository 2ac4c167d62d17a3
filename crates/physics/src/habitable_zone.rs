//! Conservative habitable-zone bounds
//!
//! The zone edges scale with the square root of stellar luminosity, so the
//! incident flux at each edge is the same for every star.

use serde::{Deserialize, Serialize};

/// Inner edge coefficient in AU per √L☉
pub const INNER_EDGE_COEFFICIENT: f64 = 0.95;

/// Outer edge coefficient in AU per √L☉
pub const OUTER_EDGE_COEFFICIENT: f64 = 1.37;

/// Habitable-zone boundaries around a star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    /// Inner edge in AU
    pub inner_edge: f64,
    /// Outer edge in AU
    pub outer_edge: f64,
}

impl HabitableZone {
    /// Habitable zone for a star of the given luminosity
    ///
    /// # Arguments
    /// * `luminosity` - Stellar luminosity in solar luminosities (L☉)
    ///
    /// # Examples
    /// ```
    /// use physics::HabitableZone;
    ///
    /// let hz = HabitableZone::from_luminosity(1.0);
    /// assert!(hz.contains(1.0));
    /// assert!(!hz.contains(1.5));
    /// ```
    pub fn from_luminosity(luminosity: f64) -> Self {
        let root = luminosity.sqrt();
        Self {
            inner_edge: INNER_EDGE_COEFFICIENT * root,
            outer_edge: OUTER_EDGE_COEFFICIENT * root,
        }
    }

    /// Whether an orbit lies within the zone, edges included
    pub fn contains(&self, orbit_au: f64) -> bool {
        (self.inner_edge..=self.outer_edge).contains(&orbit_au)
    }

    /// Zone width in AU
    pub fn width(&self) -> f64 {
        self.outer_edge - self.inner_edge
    }
}

/// Habitable-zone bounds `(inner, outer)` in AU for a luminosity in L☉
pub fn habitable_zone(luminosity: f64) -> (f64, f64) {
    let hz = HabitableZone::from_luminosity(luminosity);
    (hz.inner_edge, hz.outer_edge)
}
