use std::io::Write;

use approx::assert_relative_eq;
use tempfile::{NamedTempFile, TempDir};

use engine::{
    AnalysisRequest, Engine, EngineConfig, EngineError, HabitabilityCategory, PlanetCategory,
    TransitParameters,
};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn fast_config() -> NamedTempFile {
    write_config(
        r#"
        [habitability.forest]
        n_estimators = 20

        [planet_types.forest]
        n_estimators = 20

        [transit]
        noise_seed = 11
        "#,
    )
}

#[test]
fn test_engine_from_config_file() {
    let file = fast_config();
    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.habitability.forest.n_estimators, 20);
    assert_eq!(config.transit.noise_seed, Some(11));

    let engine = Engine::new(config);
    let summary = engine.train().unwrap();
    assert_eq!(summary.habitability.rows, 800);
    assert!(summary.habitability.holdout_accuracy.unwrap() > 0.9);
    assert_eq!(summary.planet_types.rows, 1000);
    assert!(engine.is_trained());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn test_search_paths_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config =
        EngineConfig::from_search_paths(vec![dir.path().join("exoplanet.toml")]).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_search_paths_pick_the_first_existing_file() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("config")).unwrap();
    std::fs::write(
        dir.path().join("config/exoplanet.toml"),
        "[transit]\nmin_distance = 10\n",
    )
    .unwrap();

    let config = EngineConfig::from_search_paths(vec![
        dir.path().join("exoplanet.toml"),
        dir.path().join("config/exoplanet.toml"),
    ])
    .unwrap();
    assert_eq!(config.transit.min_distance, 10);
}

#[test]
fn test_full_analysis_from_json_request() {
    let engine = Engine::new(EngineConfig::from_file(fast_config().path()).unwrap());
    let request: AnalysisRequest = serde_json::from_str(
        r#"{"radius": 11.2, "orbit": 5.2, "mass": 317.8, "starType": "g", "planetName": "Jupiter"}"#,
    )
    .unwrap();

    let report = engine.analyze(&request).unwrap();
    assert_eq!(report.classification.planet_type, PlanetCategory::GasGiant);
    assert_eq!(report.habitability.category, HabitabilityCategory::Unlikely);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["planet_name"], "Jupiter");
    assert_eq!(json["classification"]["planet_type"], "Gas Giant");
    let total: f64 = json["classification"]["probabilities"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_f64().unwrap())
        .sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-6);
}

#[test]
fn test_custom_transit_simulation() {
    let engine = Engine::new(EngineConfig::from_file(fast_config().path()).unwrap());
    let params = TransitParameters {
        period: 2.0,
        t0: 1.0,
        ..TransitParameters::default()
    };
    let result = engine.simulate_transit(&params, Some("Short-period")).unwrap();

    // Epochs at 1, 3, 5, 7 and 9 days
    assert_eq!(result.transits_detected, 5);
    assert_eq!(result.image.title, "Transit Light Curve - Short-period");
    assert!(result.depth > 0.9 && result.depth < 1.3, "depth {}", result.depth);
}

#[test]
fn test_non_transiting_geometry_is_rejected() {
    let engine = Engine::default();
    let params = TransitParameters {
        planet_radius: 20.0,
        ..TransitParameters::default()
    };
    let err = engine.simulate_transit(&params, None).unwrap_err();
    assert!(err.domain().is_some());
}
