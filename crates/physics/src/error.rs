//! Domain errors raised for physically invalid input

use thiserror::Error;

/// Invalid physical input
///
/// Every variant carries the offending field or quantity so callers can map
/// it to a client-facing message without re-validating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A quantity that must be strictly positive was zero or negative
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A quantity was NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Planet radius exceeds the orbital semi-major axis, so asin(Rp/a) is undefined
    #[error("non-transiting geometry: planet radius / semi-major axis = {ratio} exceeds 1")]
    NonTransitingGeometry { ratio: f64 },

    /// No flux sample sits above the out-of-transit threshold
    #[error("no out-of-transit baseline: no flux sample above {threshold}")]
    NoBaseline { threshold: f64 },

    /// Time and flux series differ in length
    #[error("time series has {times} samples but flux series has {flux}")]
    LengthMismatch { times: usize, flux: usize },

    /// A series was empty where at least one sample is required
    #[error("{field} must contain at least one sample")]
    EmptySeries { field: &'static str },

    /// Too many transit epochs fall inside the observation window
    #[error("{count} transit epochs in the observation window exceeds the limit of {limit}")]
    TooManyEpochs { count: u64, limit: u64 },

    /// A series that must be strictly increasing is not
    #[error("{field} must be strictly increasing, violated at index {index}")]
    NotIncreasing { field: &'static str, index: usize },
}

impl DomainError {
    /// The input field the error refers to, when there is one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NonPositive { field, .. }
            | Self::NonFinite { field, .. }
            | Self::EmptySeries { field }
            | Self::NotIncreasing { field, .. } => Some(field),
            Self::NonTransitingGeometry { .. } => Some("planet_radius"),
            Self::TooManyEpochs { .. } => Some("period"),
            Self::NoBaseline { .. } | Self::LengthMismatch { .. } => Some("flux"),
        }
    }
}

/// Require a finite, strictly positive value
///
/// # Arguments
/// * `field` - Name reported in the error
/// * `value` - Value to check
pub fn require_positive(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(DomainError::NonPositive { field, value });
    }
    Ok(value)
}

/// Require a finite value that is zero or positive
pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(DomainError::NonPositive { field, value });
    }
    Ok(value)
}
