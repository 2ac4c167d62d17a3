use proptest::prelude::*;

use crate::similarity::{earth_similarity_index, similarity_component};

#[test]
fn test_earth_is_a_perfect_match() {
    assert_eq!(earth_similarity_index(1.0, 1.0, 288.0), 1.0);
}

#[test]
fn test_component_is_symmetric_in_ratio() {
    // Half and double the reference are equally dissimilar
    let half = similarity_component(0.5, 1.0);
    let double = similarity_component(2.0, 1.0);
    assert!((half - double).abs() < 1e-12);
    assert!((half - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_mars_scores_below_earth() {
    // Mars: 0.53 R⊕, 1.52 AU, ~210 K
    let esi = earth_similarity_index(0.53, 1.52, 210.0);
    assert!(esi > 0.6 && esi < 1.0, "Mars ESI should be moderate, got {}", esi);
}

#[test]
fn test_hot_jupiter_scores_low() {
    let esi = earth_similarity_index(11.2, 0.05, 1400.0);
    assert!(esi < 0.4, "Hot Jupiter ESI should be low, got {}", esi);
}

#[test]
fn test_radius_dominates_weighting() {
    // Same fractional mismatch: radius error should cost more than temperature error
    let radius_off = earth_similarity_index(2.0, 1.0, 288.0);
    let temp_off = earth_similarity_index(1.0, 1.0, 576.0);
    assert!(radius_off < temp_off);
}

proptest! {
    #[test]
    fn esi_stays_in_unit_interval(
        radius in 1e-3_f64..100.0,
        orbit in 1e-3_f64..100.0,
        temp in 1.0_f64..10_000.0,
    ) {
        let esi = earth_similarity_index(radius, orbit, temp);
        prop_assert!((0.0..=1.0).contains(&esi));
    }
}
