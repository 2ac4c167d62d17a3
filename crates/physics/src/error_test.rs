use crate::error::{DomainError, require_non_negative, require_positive};

#[test]
fn test_require_positive() {
    assert_eq!(require_positive("radius", 2.0), Ok(2.0));
    assert_eq!(
        require_positive("radius", 0.0),
        Err(DomainError::NonPositive {
            field: "radius",
            value: 0.0
        })
    );
    assert!(matches!(
        require_positive("orbit", f64::INFINITY),
        Err(DomainError::NonFinite { field: "orbit", .. })
    ));
}

#[test]
fn test_require_non_negative_accepts_zero() {
    assert_eq!(require_non_negative("planet_radius", 0.0), Ok(0.0));
    assert!(require_non_negative("planet_radius", -0.1).is_err());
}

#[test]
fn test_error_names_field() {
    let err = require_positive("star_mass", -1.0).unwrap_err();
    assert_eq!(err.field(), Some("star_mass"));
    assert_eq!(err.to_string(), "star_mass must be positive, got -1");

    let err = DomainError::NonTransitingGeometry { ratio: 1.5 };
    assert_eq!(err.field(), Some("planet_radius"));

    let err = DomainError::TooManyEpochs {
        count: 2_000_000,
        limit: 1_000_000,
    };
    assert_eq!(err.field(), Some("period"));
    assert!(err.to_string().starts_with("2000000 transit epochs"));
}
