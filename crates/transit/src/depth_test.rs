use approx::assert_relative_eq;

use physics::DomainError;

use crate::depth::calculate_transit_depth;

#[test]
fn test_depth_of_a_clean_dip() {
    let flux = [1.0, 1.0, 0.99, 1.0, 1.0];
    assert_relative_eq!(calculate_transit_depth(&flux).unwrap(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_baseline_is_the_median_of_bright_samples() {
    // Baseline samples 0.999, 1.0, 1.001, 1.002 -> median 1.0005
    let flux = [0.999, 1.002, 0.98, 1.0, 1.001];
    let expected = (1.0005 - 0.98) / 1.0005 * 100.0;
    assert_relative_eq!(calculate_transit_depth(&flux).unwrap(), expected, epsilon = 1e-9);
}

#[test]
fn test_flat_series_has_zero_depth() {
    assert_eq!(calculate_transit_depth(&[1.0; 10]).unwrap(), 0.0);
}

#[test]
fn test_no_baseline() {
    let err = calculate_transit_depth(&[0.99, 0.98]).unwrap_err();
    assert_eq!(err, DomainError::NoBaseline { threshold: 0.998 });
    assert!(calculate_transit_depth(&[]).is_err());
}
