//! Exoplanet characterization engine
//!
//! A single entry point over the three pipelines: habitability scoring,
//! planet-type classification and transit light-curve analysis.
//!
//! # Examples
//! ```no_run
//! use engine::{AnalysisRequest, Engine};
//!
//! let engine = Engine::default();
//! let request = AnalysisRequest::new(1.0, 1.0).with_mass(1.0);
//! let report = engine.analyze(&request).unwrap();
//! println!("{} / {}", report.habitability.category, report.classification.planet_type);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod request;

#[cfg(test)]
mod engine_test;

pub use config::{DEFAULT_CONFIG_PATHS, EngineConfig};
pub use engine::{Engine, OPERATIONS, SERVICE_NAME, TrainingSummary};
pub use error::EngineError;
pub use request::{AnalysisReport, AnalysisRequest, ServiceInfo};

pub use habitability::{HabitabilityCategory, HabitabilityResult};
pub use planet_types::{ClassificationResult, PlanetCategory};
pub use transit::{LightCurvePlot, TransitParameters, TransitResult};
