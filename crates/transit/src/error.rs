//! Transit pipeline errors

use rand_distr::NormalError;
use thiserror::Error;

use physics::DomainError;

/// Failure while simulating or analysing a light curve
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitError {
    /// Invalid physical input or series
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The noise distribution could not be built
    #[error("invalid noise distribution: {0}")]
    Noise(#[from] NormalError),
}
