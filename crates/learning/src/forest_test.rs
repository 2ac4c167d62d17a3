use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::dataset::Dataset;
use crate::error::TrainingError;
use crate::forest::{ForestConfig, RandomForest};

/// Three well-separated blobs in two dimensions
fn blobs(seed: u64) -> Dataset {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let centers = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)];
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for (label, (cx, cy)) in centers.iter().enumerate() {
        for _ in 0..40 {
            rows.push([
                cx + rng.random_range(-1.0..1.0),
                cy + rng.random_range(-1.0..1.0),
            ]);
            labels.push(label);
        }
    }
    Dataset::from_rows(&rows, labels, 3).unwrap()
}

fn small_config() -> ForestConfig {
    ForestConfig {
        n_estimators: 20,
        ..ForestConfig::default()
    }
}

#[test]
fn test_forest_learns_separable_blobs() {
    let data = blobs(1);
    let forest = RandomForest::fit(&data, &small_config(), 42).unwrap();
    assert_eq!(forest.trees().len(), 20);
    assert_relative_eq!(forest.accuracy(&data), 1.0);
    assert_eq!(forest.predict(&[9.5, 0.5]), 1);
    assert_eq!(forest.predict(&[0.2, 9.8]), 2);
}

#[test]
fn test_probabilities_sum_to_one() {
    let data = blobs(2);
    let forest = RandomForest::fit(&data, &small_config(), 42).unwrap();
    for point in [[5.0, 5.0], [0.0, 0.0], [-3.0, 12.0]] {
        let proba = forest.predict_proba(&point);
        assert_eq!(proba.len(), 3);
        assert_relative_eq!(proba.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_same_seed_gives_same_forest() {
    let data = blobs(3);
    let a = RandomForest::fit(&data, &small_config(), 7).unwrap();
    let b = RandomForest::fit(&data, &small_config(), 7).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_rejects_empty_forest() {
    let data = blobs(4);
    let config = ForestConfig {
        n_estimators: 0,
        ..ForestConfig::default()
    };
    assert!(matches!(
        RandomForest::fit(&data, &config, 0),
        Err(TrainingError::InvalidConfig(_))
    ));
}
