//! Engine facade
//!
//! Owns one lazily trained model per classification pipeline and the transit
//! settings. The first habitability or planet-type call trains the matching
//! model; later calls reuse it. All operations take `&self`, so one engine can
//! be shared across threads.

use serde::Serialize;

use habitability::{HabitabilityResult, HabitabilityScorer};
use learning::TrainingReport;
use physics::require_positive;
use planet_types::{ClassificationResult, PlanetTypeClassifier};
use transit::{
    DEFAULT_PLANET_NAME, TransitParameters, TransitResult, demo_times, generate_sample_transit,
};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::request::{AnalysisReport, AnalysisRequest, ServiceInfo};

/// Display name reported by [`Engine::info`]
pub const SERVICE_NAME: &str = "Exoplanet Characterization Engine";

/// Operations the engine exposes
pub const OPERATIONS: [&str; 4] = ["habitability", "classify", "transit", "analyze"];

/// Training summaries for both classifiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSummary {
    pub habitability: TrainingReport,
    pub planet_types: TrainingReport,
}

pub struct Engine {
    config: EngineConfig,
    habitability: HabitabilityScorer,
    planet_types: PlanetTypeClassifier,
}

impl Engine {
    /// Create an engine; no model is trained yet
    pub fn new(config: EngineConfig) -> Self {
        Self {
            habitability: HabitabilityScorer::new(config.habitability.clone()),
            planet_types: PlanetTypeClassifier::new(config.planet_types.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Train both classifiers up front
    pub fn train(&self) -> Result<TrainingSummary, EngineError> {
        Ok(TrainingSummary {
            habitability: self.habitability.ensure_trained()?,
            planet_types: self.planet_types.ensure_trained()?,
        })
    }

    /// Whether both classifiers have been trained
    pub fn is_trained(&self) -> bool {
        self.habitability.is_trained() && self.planet_types.is_trained()
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Habitability of one planet
    ///
    /// # Arguments
    /// * `radius` - Planet radius in Earth radii
    /// * `orbit` - Orbital distance in AU
    /// * `star_type` - Spectral class label, unknown labels are read as G
    /// * `star_mass` - Stellar mass in M☉ (1.0 when `None`)
    /// * `star_temp` - Stellar temperature in K (5778 when `None`)
    pub fn habitability(
        &self,
        radius: f64,
        orbit: f64,
        star_type: &str,
        star_mass: Option<f64>,
        star_temp: Option<f64>,
    ) -> Result<HabitabilityResult, EngineError> {
        Ok(self
            .habitability
            .predict(radius, orbit, star_type, star_mass, star_temp)?)
    }

    /// Habitability for a request record
    pub fn assess(&self, request: &AnalysisRequest) -> Result<HabitabilityResult, EngineError> {
        self.habitability(
            request.radius,
            request.orbit,
            request.star_type(),
            request.star_mass,
            request.star_temp,
        )
    }

    /// Planet type from radius (R⊕), mass (M⊕) and orbit (AU)
    pub fn classify(
        &self,
        radius: f64,
        mass: f64,
        orbit: f64,
    ) -> Result<ClassificationResult, EngineError> {
        Ok(self.planet_types.classify(radius, mass, orbit)?)
    }

    /// Habitability and planet type together
    ///
    /// The request must carry a mass. Every input is validated before either
    /// model is trained, and nothing is returned unless both succeed.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, EngineError> {
        let mass = request.mass.ok_or(EngineError::MissingField("mass"))?;
        require_positive("mass", mass)?;
        require_positive("radius", request.radius)?;
        require_positive("orbit", request.orbit)?;

        let habitability = self.assess(request)?;
        let classification = self.classify(request.radius, mass, request.orbit)?;

        Ok(AnalysisReport {
            planet_name: request.planet_name.clone(),
            habitability,
            classification,
        })
    }

    // =========================================================================
    // Transits
    // =========================================================================

    /// Run the transit pipeline on the demonstration system
    pub fn transit_sample(&self, planet_name: Option<&str>) -> Result<TransitResult, EngineError> {
        Ok(generate_sample_transit(planet_name, &self.config.transit)?)
    }

    /// Run the transit pipeline on custom geometry over the demonstration window
    pub fn simulate_transit(
        &self,
        params: &TransitParameters,
        planet_name: Option<&str>,
    ) -> Result<TransitResult, EngineError> {
        Ok(transit::simulate_transit(
            &demo_times(),
            params,
            planet_name.unwrap_or(DEFAULT_PLANET_NAME),
            &self.config.transit,
        )?)
    }

    /// Service descriptor
    pub fn info(&self) -> ServiceInfo {
        ServiceInfo {
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            operations: OPERATIONS.to_vec(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
