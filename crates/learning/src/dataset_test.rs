use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::dataset::Dataset;
use crate::error::TrainingError;

fn ten_rows() -> Dataset {
    let rows: Vec<[f64; 2]> = (0..10).map(|i| [i as f64, (i * i) as f64]).collect();
    let labels = (0..10).map(|i| i % 2).collect();
    Dataset::from_rows(&rows, labels, 2).unwrap()
}

#[test]
fn test_from_rows_preserves_column_order() {
    let data = ten_rows();
    assert_eq!(data.n_samples(), 10);
    assert_eq!(data.n_features(), 2);
    assert_eq!(data.row(3), vec![3.0, 9.0]);
    assert_eq!(data.class_counts(), vec![5, 5]);
}

#[test]
fn test_rejects_empty_and_mismatched_input() {
    let empty: [[f64; 3]; 0] = [];
    assert_eq!(
        Dataset::from_rows(&empty, vec![], 2),
        Err(TrainingError::EmptyDataset)
    );
    assert_eq!(
        Dataset::from_rows(&[[1.0, 2.0]], vec![0, 1], 2),
        Err(TrainingError::LabelCountMismatch { rows: 1, labels: 2 })
    );
    assert_eq!(
        Dataset::from_rows(&[[1.0, 2.0]], vec![3], 2),
        Err(TrainingError::LabelOutOfRange {
            label: 3,
            n_classes: 2
        })
    );
    assert_eq!(
        Dataset::from_rows(&[[1.0, f64::NAN]], vec![0], 2),
        Err(TrainingError::NonFiniteFeature { row: 0, column: 1 })
    );
}

#[test]
fn test_split_sizes_and_disjointness() {
    let data = ten_rows();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (train, test) = data.train_test_split(0.2, &mut rng).unwrap();
    assert_eq!(train.n_samples(), 8);
    assert_eq!(test.n_samples(), 2);

    let mut seen: Vec<f64> = (0..train.n_samples())
        .map(|i| train.row(i)[0])
        .chain((0..test.n_samples()).map(|i| test.row(i)[0]))
        .collect();
    seen.sort_by(f64::total_cmp);
    assert_eq!(seen, (0..10).map(|i| i as f64).collect::<Vec<_>>());
}

#[test]
fn test_split_is_seeded() {
    let data = ten_rows();
    let (a, _) = data
        .train_test_split(0.3, &mut ChaChaRng::seed_from_u64(7))
        .unwrap();
    let (b, _) = data
        .train_test_split(0.3, &mut ChaChaRng::seed_from_u64(7))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_degenerate_split_is_error() {
    let data = ten_rows();
    let mut rng = ChaChaRng::seed_from_u64(1);
    assert!(matches!(
        data.train_test_split(0.0, &mut rng),
        Err(TrainingError::DegenerateSplit { .. })
    ));
    assert!(matches!(
        data.train_test_split(1.0, &mut rng),
        Err(TrainingError::DegenerateSplit { .. })
    ));
}
