use approx::assert_relative_eq;

use crate::error::DomainError;
use crate::host_star::HostStar;
use crate::parameters::PhysicalParameters;

#[test]
fn test_earth_parameters() {
    let earth = PhysicalParameters::new(1.0, 1.0, HostStar::solar()).unwrap();
    assert!(earth.in_habitable_zone());
    assert!(earth.density().is_none());

    let earth = earth.with_mass(1.0).unwrap();
    assert_relative_eq!(earth.density().unwrap().unwrap(), 5.51);
}

#[test]
fn test_rejects_non_positive_radius_and_orbit() {
    let err = PhysicalParameters::new(0.0, 1.0, HostStar::solar()).unwrap_err();
    assert_eq!(err.field(), Some("radius"));

    let err = PhysicalParameters::new(1.0, -0.5, HostStar::solar()).unwrap_err();
    assert_eq!(
        err,
        DomainError::NonPositive {
            field: "orbit",
            value: -0.5
        }
    );
}

#[test]
fn test_rejects_invalid_star() {
    let star = HostStar {
        mass: 0.0,
        ..HostStar::solar()
    };
    let err = PhysicalParameters::new(1.0, 1.0, star).unwrap_err();
    assert_eq!(err.field(), Some("star_mass"));
}

#[test]
fn test_rejects_non_positive_mass() {
    let params = PhysicalParameters::new(1.0, 1.0, HostStar::solar()).unwrap();
    assert!(params.with_mass(0.0).is_err());
}

#[test]
fn test_derived_quantities_are_consistent() {
    let params = PhysicalParameters::new(1.2, 1.1, HostStar::solar()).unwrap();
    let temp = params.equilibrium_temperature().unwrap();
    let esi = params.earth_similarity_index().unwrap();
    assert_relative_eq!(
        esi,
        crate::similarity::earth_similarity_index(1.2, 1.1, temp)
    );
}

#[test]
fn test_deserialization_validates_fields() {
    let json = r#"{"radius": -1.0, "orbit": 1.0,
        "star": {"spectralClass": "G", "mass": 1.0, "temperature": 5778.0}}"#;
    let err = serde_json::from_str::<PhysicalParameters>(json).unwrap_err();
    assert!(err.to_string().contains("radius must be positive"), "{}", err);

    let json = r#"{"radius": 1.0, "orbit": 1.0, "mass": 2.0,
        "star": {"spectralClass": "K", "mass": 0.0, "temperature": 5000.0}}"#;
    assert!(serde_json::from_str::<PhysicalParameters>(json).is_err());

    let json = r#"{"radius": 1.0, "orbit": 1.0, "mass": 2.0,
        "star": {"spectralClass": "K", "mass": 0.8, "temperature": 5000.0}}"#;
    let params: PhysicalParameters = serde_json::from_str(json).unwrap();
    assert_eq!(params.mass, Some(2.0));
    let round_trip: PhysicalParameters =
        serde_json::from_value(serde_json::to_value(&params).unwrap()).unwrap();
    assert_eq!(round_trip, params);
}

#[test]
fn test_validate_catches_fields_set_after_construction() {
    let mut params = PhysicalParameters::new(1.0, 1.0, HostStar::solar()).unwrap();
    assert_eq!(params.validate(), Ok(()));

    params.radius = -1.0;
    assert_eq!(
        params.validate(),
        Err(DomainError::NonPositive {
            field: "radius",
            value: -1.0
        })
    );

    params.radius = 1.0;
    params.star.temperature = f64::NAN;
    assert!(matches!(
        params.validate(),
        Err(DomainError::NonFinite {
            field: "star_temp",
            ..
        })
    ));
}
