use approx::assert_relative_eq;
use proptest::prelude::*;

use crate::habitable_zone::{HabitableZone, habitable_zone};

#[test]
fn test_solar_habitable_zone() {
    let (inner, outer) = habitable_zone(1.0);
    assert_relative_eq!(inner, 0.95);
    assert_relative_eq!(outer, 1.37);
}

#[test]
fn test_habitable_zone_scales_with_sqrt_luminosity() {
    let hz = HabitableZone::from_luminosity(4.0);
    assert_relative_eq!(hz.inner_edge, 1.9);
    assert_relative_eq!(hz.outer_edge, 2.74);
    assert_relative_eq!(hz.width(), 0.84, epsilon = 1e-12);
}

#[test]
fn test_contains_is_inclusive() {
    let hz = HabitableZone::from_luminosity(1.0);
    assert!(hz.contains(0.95));
    assert!(hz.contains(1.37));
    assert!(hz.contains(1.0));
    assert!(!hz.contains(0.94));
    assert!(!hz.contains(1.38));
}

#[test]
fn test_dim_star_zone_is_closer() {
    // 0.5 M☉ star: L = 0.5^3.5 ≈ 0.088 L☉
    let hz = HabitableZone::from_luminosity(0.5_f64.powf(3.5));
    assert!(hz.outer_edge < 0.5, "M dwarf zone should be well inside 0.5 AU");
    assert!(!hz.contains(1.0));
}

proptest! {
    #[test]
    fn inner_edge_always_inside_outer_edge(luminosity in 1e-6_f64..1e6) {
        let hz = HabitableZone::from_luminosity(luminosity);
        prop_assert!(hz.inner_edge < hz.outer_edge);
        prop_assert!(hz.inner_edge > 0.0);
    }
}
