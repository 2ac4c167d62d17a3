//! End-to-end transit pipeline: simulate, add noise, detect, measure
//!
//! [`generate_sample_transit`] runs the pipeline on a fixed demonstration
//! system (a Jupiter-sized planet on a 3.5 day orbit). [`simulate_transit`]
//! runs it on caller-supplied geometry.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::depth::calculate_transit_depth;
use crate::detection::{
    DEFAULT_MIN_DISTANCE, DEFAULT_THRESHOLD, DetectionSettings, detect_transits_with,
};
use crate::error::TransitError;
use crate::light_curve::{FluxSeries, TransitParameters, linspace};
use crate::noise::{DEFAULT_NOISE_LEVEL, add_noise};
use crate::plot::LightCurvePlot;

/// Planet name used when none is given
pub const DEFAULT_PLANET_NAME: &str = "Exoplanet-1";

/// Observation window of the demonstration system: 2000 samples over 10 days
pub fn demo_times() -> Vec<f64> {
    linspace(0.0, 10.0, 2000)
}

/// Pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitConfig {
    /// Noise standard deviation added to the simulated flux
    #[serde(default = "default_noise_level")]
    pub noise_level: f64,
    /// Detection flux threshold
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Minimum samples between detected transits
    #[serde(default = "default_min_distance")]
    pub min_distance: usize,
    /// Seed for the noise; fresh entropy per run when unset
    #[serde(default)]
    pub noise_seed: Option<u64>,
}

fn default_noise_level() -> f64 {
    DEFAULT_NOISE_LEVEL
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_min_distance() -> usize {
    DEFAULT_MIN_DISTANCE
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            noise_level: default_noise_level(),
            threshold: default_threshold(),
            min_distance: default_min_distance(),
            noise_seed: None,
        }
    }
}

impl TransitConfig {
    pub fn detection(&self) -> DetectionSettings {
        DetectionSettings {
            threshold: self.threshold,
            min_distance: self.min_distance,
        }
    }

    fn noise_rng(&self) -> ChaChaRng {
        match self.noise_seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed),
            None => ChaChaRng::from_os_rng(),
        }
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitResult {
    /// Plot of the observed curve
    pub image: LightCurvePlot,
    /// Measured depth in percent
    pub depth: f64,
    /// Number of detected transits
    pub transits_detected: usize,
}

/// Run the pipeline on the given times and geometry
pub fn simulate_transit(
    times: &[f64],
    params: &TransitParameters,
    planet_name: &str,
    config: &TransitConfig,
) -> Result<TransitResult, TransitError> {
    let clean = FluxSeries::simulate(times.to_vec(), params)?;
    let observed =
        clean.with_flux(add_noise(clean.flux(), config.noise_level, &mut config.noise_rng())?)?;

    let detected = detect_transits_with(observed.times(), observed.flux(), &config.detection())?;
    let depth = calculate_transit_depth(observed.flux())?;
    log::debug!(
        "{}: {} transits detected, depth {:.3}%",
        planet_name,
        detected.len(),
        depth
    );

    Ok(TransitResult {
        image: LightCurvePlot::new(planet_name, observed.times(), observed.flux(), &detected),
        depth,
        transits_detected: detected.len(),
    })
}

/// Run the pipeline on the demonstration system
///
/// # Arguments
/// * `planet_name` - Plot title name, [`DEFAULT_PLANET_NAME`] when `None`
/// * `config` - Noise and detection settings
pub fn generate_sample_transit(
    planet_name: Option<&str>,
    config: &TransitConfig,
) -> Result<TransitResult, TransitError> {
    simulate_transit(
        &demo_times(),
        &TransitParameters::default(),
        planet_name.unwrap_or(DEFAULT_PLANET_NAME),
        config,
    )
}
