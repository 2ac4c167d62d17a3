//! Physical feature engineering for exoplanet characterization
//!
//! Pure functions that turn raw planet and host-star parameters into the derived
//! quantities the classifiers and reports use: density, equilibrium
//! temperature, stellar luminosity, habitable-zone bounds and the Earth
//! Similarity Index.

pub mod density;
pub mod error;
pub mod habitable_zone;
pub mod host_star;
pub mod parameters;
pub mod similarity;
pub mod spectral;
pub mod temperature;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod habitable_zone_test;
#[cfg(test)]
mod parameters_test;
#[cfg(test)]
mod similarity_test;
#[cfg(test)]
mod spectral_test;

pub use density::{EARTH_DENSITY, density};
pub use error::{DomainError, require_non_negative, require_positive};
pub use habitable_zone::{HabitableZone, habitable_zone};
pub use host_star::{HostStar, SOLAR_TEMPERATURE, stellar_luminosity};
pub use parameters::PhysicalParameters;
pub use similarity::earth_similarity_index;
pub use spectral::SpectralClass;
pub use temperature::{EARTH_TEMPERATURE, equilibrium_temperature};
