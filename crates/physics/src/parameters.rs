//! Validated description of one candidate planet and its host star

use serde::{Deserialize, Serialize};

use crate::density::density;
use crate::error::{DomainError, require_positive};
use crate::habitable_zone::HabitableZone;
use crate::host_star::HostStar;
use crate::similarity::earth_similarity_index;
use crate::temperature::equilibrium_temperature;

/// Physical parameters of a candidate planet
///
/// [`PhysicalParameters::new`] and deserialization validate every numeric
/// field. Fields stay public, so consumers that accept parameters from outside
/// call [`PhysicalParameters::validate`] before deriving anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ParametersRecord")]
pub struct PhysicalParameters {
    /// Planet radius in Earth radii (R⊕)
    pub radius: f64,
    /// Orbital distance in AU
    pub orbit: f64,
    /// Planet mass in Earth masses (M⊕), when known
    pub mass: Option<f64>,
    /// Host star
    pub star: HostStar,
}

impl PhysicalParameters {
    /// Create validated parameters without a planet mass
    pub fn new(radius: f64, orbit: f64, star: HostStar) -> Result<Self, DomainError> {
        Ok(Self {
            radius: require_positive("radius", radius)?,
            orbit: require_positive("orbit", orbit)?,
            mass: None,
            star: HostStar::new(star.spectral_class, star.mass, star.temperature)?,
        })
    }

    /// Re-check every numeric field, including the host star
    pub fn validate(&self) -> Result<(), DomainError> {
        require_positive("radius", self.radius)?;
        require_positive("orbit", self.orbit)?;
        if let Some(mass) = self.mass {
            require_positive("mass", mass)?;
        }
        self.star.validate()
    }

    /// Attach a validated planet mass
    pub fn with_mass(mut self, mass: f64) -> Result<Self, DomainError> {
        self.mass = Some(require_positive("mass", mass)?);
        Ok(self)
    }

    /// Habitable zone of the host star
    pub fn habitable_zone(&self) -> HabitableZone {
        self.star.habitable_zone()
    }

    /// Whether the orbit lies inside the host star's habitable zone
    pub fn in_habitable_zone(&self) -> bool {
        self.habitable_zone().contains(self.orbit)
    }

    /// Equilibrium temperature in Kelvin
    pub fn equilibrium_temperature(&self) -> Result<f64, DomainError> {
        equilibrium_temperature(self.star.temperature, self.star.mass, self.orbit)
    }

    /// Earth Similarity Index at the equilibrium temperature
    pub fn earth_similarity_index(&self) -> Result<f64, DomainError> {
        let temp = self.equilibrium_temperature()?;
        Ok(earth_similarity_index(self.radius, self.orbit, temp))
    }

    /// Bulk density in g/cm³, when the mass is known
    pub fn density(&self) -> Option<Result<f64, DomainError>> {
        self.mass.map(|mass| density(mass, self.radius))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParametersRecord {
    radius: f64,
    orbit: f64,
    #[serde(default)]
    mass: Option<f64>,
    star: HostStar,
}

impl TryFrom<ParametersRecord> for PhysicalParameters {
    type Error = DomainError;

    fn try_from(record: ParametersRecord) -> Result<Self, Self::Error> {
        let params = PhysicalParameters::new(record.radius, record.orbit, record.star)?;
        match record.mass {
            Some(mass) => params.with_mass(mass),
            None => Ok(params),
        }
    }
}
