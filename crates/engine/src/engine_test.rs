use physics::DomainError;

use crate::config::EngineConfig;
use crate::engine::{Engine, OPERATIONS};
use crate::error::EngineError;
use crate::request::AnalysisRequest;

fn small_engine() -> Engine {
    let mut config = EngineConfig::default();
    config.habitability.forest.n_estimators = 20;
    config.planet_types.forest.n_estimators = 20;
    config.transit.noise_seed = Some(42);
    Engine::new(config)
}

#[test]
fn test_analyze_requires_mass() {
    let engine = small_engine();
    let err = engine.analyze(&AnalysisRequest::new(1.0, 1.0)).unwrap_err();
    assert_eq!(err, EngineError::MissingField("mass"));
    assert!(!engine.is_trained());
}

#[test]
fn test_analyze_validates_before_training() {
    let engine = small_engine();
    let request = AnalysisRequest::new(0.0, 1.0).with_mass(1.0);
    let err = engine.analyze(&request).unwrap_err();

    assert_eq!(
        err.domain(),
        Some(&DomainError::NonPositive {
            field: "radius",
            value: 0.0
        })
    );
    assert!(!engine.is_trained());
}

#[test]
fn test_analyze_earth() {
    let engine = small_engine();
    let request = AnalysisRequest::new(1.0, 1.0)
        .with_mass(1.0)
        .with_name("Earth");
    let report = engine.analyze(&request).unwrap();

    assert_eq!(report.planet_name.as_deref(), Some("Earth"));
    assert!(report.habitability.habitable);
    assert_eq!(report.classification.planet_type.name(), "Rocky");
    assert!(engine.is_trained());
}

#[test]
fn test_domain_errors_surface_through_every_pipeline() {
    let engine = small_engine();
    assert!(engine.habitability(-1.0, 1.0, "G", None, None).unwrap_err().domain().is_some());
    assert!(engine.classify(1.0, 0.0, 1.0).unwrap_err().domain().is_some());
    assert!(EngineError::MissingField("mass").domain().is_none());
}

#[test]
fn test_transit_sample_uses_configured_seed() {
    let engine = small_engine();
    let a = engine.transit_sample(None).unwrap();
    let b = engine.transit_sample(None).unwrap();
    assert_eq!(a, b);
    assert!(a.transits_detected >= 2);
}

#[test]
fn test_info() {
    let info = small_engine().info();
    assert_eq!(info.name, "Exoplanet Characterization Engine");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(info.operations, OPERATIONS.to_vec());
}
