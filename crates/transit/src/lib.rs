//! Transit light curves
//!
//! Simulates box-shaped planetary transits over a time series, adds Gaussian
//! photometric noise, detects the dips as peaks of the inverted flux and
//! measures their depth.

pub mod depth;
pub mod detection;
pub mod error;
pub mod light_curve;
pub mod noise;
pub mod plot;
pub mod sample;

#[cfg(test)]
mod depth_test;
#[cfg(test)]
mod light_curve_test;

pub use depth::{BASELINE_THRESHOLD, calculate_transit_depth};
pub use detection::{
    DEFAULT_MIN_DISTANCE, DEFAULT_THRESHOLD, DetectionSettings, detect_transits,
    detect_transits_with, find_peaks,
};
pub use error::TransitError;
pub use light_curve::{
    FluxSeries, JUPITER_RADIUS, LIMB_DARKENING, TransitEvent, TransitParameters,
    generate_light_curve, linspace, transit_events,
};
pub use noise::{DEFAULT_NOISE_LEVEL, add_noise};
pub use plot::{HighlightWindow, LightCurvePlot};
pub use sample::{
    DEFAULT_PLANET_NAME, TransitConfig, TransitResult, demo_times, generate_sample_transit,
    simulate_transit,
};
