//! Request and response records exchanged with engine callers

use serde::{Deserialize, Serialize};

use habitability::HabitabilityResult;
use planet_types::ClassificationResult;

/// One planet to analyse
///
/// Only `radius` and `orbit` are always required. `mass` is needed for
/// planet-type classification; the star fields default to a Sun-like G star.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Planet radius in Earth radii
    pub radius: f64,
    /// Orbital distance in AU
    pub orbit: f64,
    /// Planet mass in Earth masses
    #[serde(default)]
    pub mass: Option<f64>,
    /// Spectral class label (O, B, A, F, G, K, M)
    #[serde(default)]
    pub star_type: Option<String>,
    /// Stellar mass in solar masses
    #[serde(default)]
    pub star_mass: Option<f64>,
    /// Stellar effective temperature in Kelvin
    #[serde(default)]
    pub star_temp: Option<f64>,
    #[serde(default)]
    pub planet_name: Option<String>,
}

impl AnalysisRequest {
    pub fn new(radius: f64, orbit: f64) -> Self {
        Self {
            radius,
            orbit,
            ..Self::default()
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_star(mut self, star_type: &str, star_mass: f64, star_temp: f64) -> Self {
        self.star_type = Some(star_type.to_string());
        self.star_mass = Some(star_mass);
        self.star_temp = Some(star_temp);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.planet_name = Some(name.to_string());
        self
    }

    /// Spectral class label, `G` when unset
    pub fn star_type(&self) -> &str {
        self.star_type.as_deref().unwrap_or("G")
    }
}

/// Habitability and planet type for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_name: Option<String>,
    pub habitability: HabitabilityResult,
    pub classification: ClassificationResult,
}

/// Name, version and operations of the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub operations: Vec<&'static str>,
}
