//! Engine-level errors

use thiserror::Error;

use habitability::HabitabilityError;
use physics::DomainError;
use planet_types::ClassificationError;
use transit::TransitError;

/// Any failure surfaced by the engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Habitability(#[from] HabitabilityError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Transit(#[from] TransitError),

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// A field the operation needs was not supplied
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl EngineError {
    /// The domain error underneath, if the failure was invalid input
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e)
            | Self::Habitability(HabitabilityError::Domain(e))
            | Self::Classification(ClassificationError::Domain(e))
            | Self::Transit(TransitError::Domain(e)) => Some(e),
            _ => None,
        }
    }
}
