use approx::assert_relative_eq;
use proptest::prelude::*;

use physics::DomainError;

use crate::light_curve::{
    FluxSeries, JUPITER_RADIUS, MAX_TRANSIT_EVENTS, TransitParameters, generate_light_curve,
    linspace, transit_events,
};

#[test]
fn test_linspace_includes_both_ends() {
    let values = linspace(0.0, 10.0, 2000);
    assert_eq!(values.len(), 2000);
    assert_eq!(values[0], 0.0);
    assert_relative_eq!(values[1999], 10.0, epsilon = 1e-12);
    assert_relative_eq!(values[1] - values[0], 10.0 / 1999.0);
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 5.0, 1), vec![3.0]);
}

#[test]
fn test_default_geometry() {
    let params = TransitParameters::default();
    assert_relative_eq!(params.depth(), JUPITER_RADIUS * JUPITER_RADIUS);
    assert_relative_eq!(params.depth(), 0.010551, epsilon = 1e-5);

    let duration = params.duration().unwrap();
    let expected = 3.5 * (JUPITER_RADIUS / (0.05 / 0.00465)).asin() / std::f64::consts::PI;
    assert_relative_eq!(duration, expected);
    assert_eq!(params.inclination, 89.5);
}

#[test]
fn test_epochs_extend_one_period_past_the_last_sample() {
    let params = TransitParameters::default();
    assert_eq!(params.epoch_count(10.0), 4);
    assert_eq!(
        params.epochs(10.0).collect::<Vec<_>>(),
        vec![2.0, 5.5, 9.0, 12.5]
    );
    // First epoch already past the window
    assert_eq!(params.epoch_count(-5.0), 0);
}

#[test]
fn test_transit_events() {
    let times = linspace(0.0, 10.0, 2000);
    let params = TransitParameters::default();
    let events = transit_events(&times, &params).unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(events[1].center, 5.5);
    for event in &events {
        assert_relative_eq!(event.depth, params.depth());
        assert_relative_eq!(event.duration, params.duration().unwrap());
    }
}

#[test]
fn test_light_curve_dips_at_epochs_only() {
    let times = linspace(0.0, 10.0, 2000);
    let params = TransitParameters::default();
    let flux = generate_light_curve(&times, &params).unwrap();
    let half = params.duration().unwrap() / 2.0;

    for (t, f) in times.iter().zip(&flux) {
        let in_transit = [2.0, 5.5, 9.0].iter().any(|e| (t - e).abs() < half);
        if in_transit {
            assert_relative_eq!(*f, 1.0 - params.depth());
        } else {
            assert_eq!(*f, 1.0);
        }
    }
    assert!(flux.iter().any(|&f| f < 1.0));
}

#[test]
fn test_zero_planet_radius_gives_flat_curve() {
    let times = linspace(0.0, 10.0, 500);
    let params = TransitParameters {
        planet_radius: 0.0,
        ..TransitParameters::default()
    };
    let flux = generate_light_curve(&times, &params).unwrap();
    assert!(flux.iter().all(|&f| f == 1.0));
}

#[test]
fn test_planet_larger_than_orbit_is_rejected() {
    let params = TransitParameters::new(2.0, 1.0, 3.0, 0.0, 1.5);
    let err = generate_light_curve(&[0.0, 1.0], &params).unwrap_err();
    assert!(matches!(err, DomainError::NonTransitingGeometry { .. }));
}

#[test]
fn test_invalid_inputs() {
    let params = TransitParameters::default();
    assert_eq!(
        generate_light_curve(&[], &params),
        Err(DomainError::EmptySeries { field: "times" })
    );
    assert_eq!(
        generate_light_curve(&[0.0, 2.0, 1.0], &params),
        Err(DomainError::NotIncreasing {
            field: "times",
            index: 2
        })
    );

    let no_period = TransitParameters {
        period: 0.0,
        ..params
    };
    assert!(matches!(
        generate_light_curve(&[0.0, 1.0], &no_period),
        Err(DomainError::NonPositive { field: "period", .. })
    ));
}

#[test]
fn test_flux_series_lengths_must_match() {
    assert_eq!(
        FluxSeries::new(vec![0.0, 1.0], vec![1.0]),
        Err(DomainError::LengthMismatch { times: 2, flux: 1 })
    );

    let series = FluxSeries::simulate(linspace(0.0, 10.0, 100), &TransitParameters::default())
        .unwrap();
    assert_eq!(series.len(), 100);
    assert_eq!(series.flux().len(), series.times().len());

    let dimmed = series.with_flux(vec![0.5; 100]).unwrap();
    assert_eq!(dimmed.times(), series.times());
    assert_eq!(dimmed.flux()[0], 0.5);
    assert_eq!(
        series.with_flux(vec![1.0; 99]),
        Err(DomainError::LengthMismatch {
            times: 100,
            flux: 99
        })
    );
}

#[test]
fn test_tiny_period_stays_bounded() {
    let times = linspace(0.0, 10.0, 2000);
    let params = TransitParameters {
        period: 1e-9,
        ..TransitParameters::default()
    };

    // About 1e10 epochs: the curve is still computed per sample
    let flux = generate_light_curve(&times, &params).unwrap();
    assert_eq!(flux.len(), 2000);
    assert!(flux.iter().all(|&f| f == 1.0 || f == 1.0 - params.depth()));

    match transit_events(&times, &params) {
        Err(DomainError::TooManyEpochs { count, limit }) => {
            assert!(count > 7_000_000_000, "count {}", count);
            assert_eq!(limit, MAX_TRANSIT_EVENTS);
        }
        other => panic!("expected TooManyEpochs, got {:?}", other.map(|e| e.len())),
    }
}

#[test]
fn test_short_period_matches_event_windows() {
    // Many epochs, each checked per sample against the listed events
    let times = linspace(0.0, 10.0, 5000);
    let params = TransitParameters::new(0.5, 1.0, 0.37, 0.05, 2.0);
    let flux = generate_light_curve(&times, &params).unwrap();
    let events = transit_events(&times, &params).unwrap();
    assert_eq!(events.len() as u64, params.epoch_count(10.0));

    for (t, f) in times.iter().zip(&flux) {
        let expected = events
            .iter()
            .any(|e| (t - e.center).abs() < e.duration / 2.0);
        assert_eq!(*f < 1.0, expected, "t = {}", t);
    }
    assert!(flux.iter().any(|&f| f < 1.0));
}

proptest! {
    #[test]
    fn prop_transits_never_brighten(
        planet_radius in 0.0f64..0.5,
        period in 0.5f64..5.0,
        t0 in 0.0f64..3.0,
    ) {
        let params = TransitParameters::new(planet_radius, 1.0, period, t0, 10.0);
        let flux = generate_light_curve(&linspace(0.0, 10.0, 400), &params).unwrap();
        prop_assert!(flux.iter().all(|&f| f <= 1.0 && f >= 0.0));
    }
}
