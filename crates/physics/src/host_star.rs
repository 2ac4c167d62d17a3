//! Host star properties used for planet characterization

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, require_positive};
use crate::habitable_zone::HabitableZone;
use crate::spectral::SpectralClass;

/// Solar effective temperature in Kelvin
pub const SOLAR_TEMPERATURE: f64 = 5778.0;

/// Main-sequence mass-luminosity exponent
pub const MASS_LUMINOSITY_EXPONENT: f64 = 3.5;

/// Stellar luminosity from mass using the main-sequence relation L = M^3.5
///
/// # Arguments
/// * `star_mass` - Stellar mass in solar masses (M☉)
///
/// # Returns
/// Luminosity in solar luminosities (L☉)
pub fn stellar_luminosity(star_mass: f64) -> f64 {
    star_mass.powf(MASS_LUMINOSITY_EXPONENT)
}

/// Host star properties for planet characterization
///
/// Groups the stellar parameters the feature pipelines need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "HostStarRecord")]
pub struct HostStar {
    /// Spectral class
    pub spectral_class: SpectralClass,
    /// Stellar mass in solar masses (M☉)
    pub mass: f64,
    /// Effective temperature in Kelvin
    pub temperature: f64,
}

impl HostStar {
    /// Create a validated host star
    ///
    /// Fails when mass or temperature is not strictly positive.
    pub fn new(
        spectral_class: SpectralClass,
        mass: f64,
        temperature: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            spectral_class,
            mass: require_positive("star_mass", mass)?,
            temperature: require_positive("star_temp", temperature)?,
        })
    }

    /// Re-check mass and temperature
    ///
    /// Fields are public, so a star built by hand can bypass [`HostStar::new`].
    pub fn validate(&self) -> Result<(), DomainError> {
        require_positive("star_mass", self.mass)?;
        require_positive("star_temp", self.temperature)?;
        Ok(())
    }

    /// Solar values (G class, 1 M☉, 5778 K)
    pub fn solar() -> Self {
        Self {
            spectral_class: SpectralClass::G,
            mass: 1.0,
            temperature: SOLAR_TEMPERATURE,
        }
    }

    /// Luminosity in solar luminosities (L☉)
    pub fn luminosity(&self) -> f64 {
        stellar_luminosity(self.mass)
    }

    /// Habitable zone around this star
    pub fn habitable_zone(&self) -> HabitableZone {
        HabitableZone::from_luminosity(self.luminosity())
    }
}

impl Default for HostStar {
    fn default() -> Self {
        Self::solar()
    }
}

/// Unvalidated wire form; deserialization goes through [`HostStar::new`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HostStarRecord {
    #[serde(default)]
    spectral_class: SpectralClass,
    mass: f64,
    temperature: f64,
}

impl TryFrom<HostStarRecord> for HostStar {
    type Error = DomainError;

    fn try_from(record: HostStarRecord) -> Result<Self, Self::Error> {
        HostStar::new(record.spectral_class, record.mass, record.temperature)
    }
}
