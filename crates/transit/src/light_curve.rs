//! Box-shaped transit injection
//!
//! The star is a uniform disk, so a transit is a flat dip of depth (Rp/R★)²
//! lasting period·asin(Rp/a)/π. Orbital inclination and limb darkening are
//! carried on [`TransitParameters`] but do not change the curve.

use serde::{Deserialize, Serialize};

use physics::{DomainError, require_non_negative, require_positive};

/// Jupiter's equatorial radius in solar radii
pub const JUPITER_RADIUS: f64 = 71_492.0 / 696_000.0;

/// Quadratic limb-darkening coefficients (u1, u2); recorded, not applied
pub const LIMB_DARKENING: (f64, f64) = (0.3, 0.2);

/// Inclination assumed when none is given, in degrees
pub const EDGE_ON_INCLINATION: f64 = 90.0;

/// Most events [`transit_events`] will list for one window
pub const MAX_TRANSIT_EVENTS: u64 = 1_000_000;

// =============================================================================
// Parameters
// =============================================================================

/// Geometry of a transiting planet
///
/// Radii and the semi-major axis share one length unit (stellar radii in the
/// defaults); times are in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitParameters {
    /// Planet radius; zero gives a flat curve
    pub planet_radius: f64,
    /// Stellar radius
    pub star_radius: f64,
    /// Orbital period in days
    pub period: f64,
    /// Time of the first transit centre in days
    pub t0: f64,
    /// Orbital semi-major axis
    pub semi_major_axis: f64,
    /// Orbital inclination in degrees
    pub inclination: f64,
}

impl TransitParameters {
    /// Edge-on geometry with the given radii and orbit
    pub fn new(
        planet_radius: f64,
        star_radius: f64,
        period: f64,
        t0: f64,
        semi_major_axis: f64,
    ) -> Self {
        Self {
            planet_radius,
            star_radius,
            period,
            t0,
            semi_major_axis,
            inclination: EDGE_ON_INCLINATION,
        }
    }

    /// Check every field, including the transit geometry
    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_negative("planet_radius", self.planet_radius)?;
        require_positive("star_radius", self.star_radius)?;
        require_positive("period", self.period)?;
        require_positive("semi_major_axis", self.semi_major_axis)?;
        if !self.t0.is_finite() {
            return Err(DomainError::NonFinite {
                field: "t0",
                value: self.t0,
            });
        }
        if !self.inclination.is_finite() {
            return Err(DomainError::NonFinite {
                field: "inclination",
                value: self.inclination,
            });
        }
        self.duration().map(|_| ())
    }

    /// Transit duration in days: period·asin(Rp/a)/π
    pub fn duration(&self) -> Result<f64, DomainError> {
        let ratio = self.planet_radius / self.semi_major_axis;
        if ratio.abs() > 1.0 {
            return Err(DomainError::NonTransitingGeometry { ratio });
        }
        Ok(self.period * ratio.asin() / std::f64::consts::PI)
    }

    /// Fractional flux drop during transit: (Rp/R★)²
    pub fn depth(&self) -> f64 {
        (self.planet_radius / self.star_radius).powi(2)
    }

    /// Number of epochs t0 + k·period (k ≥ 0) below `last_time + period`
    pub fn epoch_count(&self, last_time: f64) -> u64 {
        let end = last_time + self.period;
        if self.t0 >= end {
            return 0;
        }
        let epoch = |k: u64| self.t0 + k as f64 * self.period;

        // Estimate, then correct for rounding in either direction
        let mut count = ((end - self.t0) / self.period).ceil() as u64;
        for _ in 0..4 {
            if count > 0 && epoch(count - 1) >= end {
                count -= 1;
            } else if epoch(count) < end {
                count = count.saturating_add(1);
            } else {
                break;
            }
        }
        count
    }

    /// Transit centres t0 + k·period (k ≥ 0) below `last_time + period`
    pub fn epochs(&self, last_time: f64) -> impl Iterator<Item = f64> {
        let (t0, period) = (self.t0, self.period);
        (0..self.epoch_count(last_time)).map(move |k| t0 + k as f64 * period)
    }
}

impl Default for TransitParameters {
    /// A Jupiter-sized planet on a 3.5 day orbit around a Sun-sized star
    fn default() -> Self {
        Self {
            planet_radius: JUPITER_RADIUS,
            star_radius: 1.0,
            period: 3.5,
            t0: 2.0,
            semi_major_axis: 0.05 / 0.00465,
            inclination: 89.5,
        }
    }
}

/// One transit: when it happens, how long it lasts and how deep it is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitEvent {
    /// Mid-transit time in days
    pub center: f64,
    /// Duration in days
    pub duration: f64,
    /// Fractional flux drop in [0, 1]
    pub depth: f64,
}

// =============================================================================
// Flux Series
// =============================================================================

/// Brightness samples over time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxSeries {
    times: Vec<f64>,
    flux: Vec<f64>,
}

impl FluxSeries {
    /// Pair times with flux values
    pub fn new(times: Vec<f64>, flux: Vec<f64>) -> Result<Self, DomainError> {
        if times.len() != flux.len() {
            return Err(DomainError::LengthMismatch {
                times: times.len(),
                flux: flux.len(),
            });
        }
        Ok(Self { times, flux })
    }

    /// Simulate a noiseless series over the given times
    pub fn simulate(times: Vec<f64>, params: &TransitParameters) -> Result<Self, DomainError> {
        let flux = generate_light_curve(&times, params)?;
        Ok(Self { times, flux })
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Replace the flux values, keeping the time axis
    pub fn with_flux(&self, flux: Vec<f64>) -> Result<Self, DomainError> {
        Self::new(self.times.clone(), flux)
    }
}

/// `n` evenly spaced values from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

fn validate_times(times: &[f64]) -> Result<f64, DomainError> {
    let Some(&last) = times.last() else {
        return Err(DomainError::EmptySeries { field: "times" });
    };
    if let Some(bad) = times.iter().find(|t| !t.is_finite()) {
        return Err(DomainError::NonFinite {
            field: "times",
            value: *bad,
        });
    }
    if let Some(index) = times.windows(2).position(|pair| pair[1] <= pair[0]) {
        return Err(DomainError::NotIncreasing {
            field: "times",
            index: index + 1,
        });
    }
    Ok(last)
}

// =============================================================================
// Simulation
// =============================================================================

/// Transits injected over the span of `times`
///
/// One event per epoch from [`TransitParameters::epochs`], all with the same
/// duration and depth. Windows holding more than [`MAX_TRANSIT_EVENTS`]
/// epochs are rejected.
pub fn transit_events(
    times: &[f64],
    params: &TransitParameters,
) -> Result<Vec<TransitEvent>, DomainError> {
    params.validate()?;
    let last = validate_times(times)?;
    let count = params.epoch_count(last);
    if count > MAX_TRANSIT_EVENTS {
        return Err(DomainError::TooManyEpochs {
            count,
            limit: MAX_TRANSIT_EVENTS,
        });
    }

    let duration = params.duration()?;
    let depth = params.depth();
    Ok(params
        .epochs(last)
        .map(|center| TransitEvent {
            center,
            duration,
            depth,
        })
        .collect())
}

/// Noiseless light curve sampled at `times`
///
/// Flux is 1.0 out of transit and 1 − depth for every sample strictly within
/// half a duration of an epoch. Each sample is checked against its nearest
/// epochs only, so the cost does not grow with the number of epochs.
///
/// # Examples
/// ```
/// use transit::{TransitParameters, generate_light_curve, linspace};
///
/// let times = linspace(0.0, 10.0, 2000);
/// let flux = generate_light_curve(&times, &TransitParameters::default()).unwrap();
/// assert!(flux.iter().all(|&f| f <= 1.0));
/// assert!(flux.iter().any(|&f| f < 1.0));
/// ```
pub fn generate_light_curve(
    times: &[f64],
    params: &TransitParameters,
) -> Result<Vec<f64>, DomainError> {
    params.validate()?;
    let last = validate_times(times)?;
    let half = params.duration()? / 2.0;
    let in_transit_flux = 1.0 - params.depth();
    let epoch_count = params.epoch_count(last) as f64;
    let (t0, period) = (params.t0, params.period);

    Ok(times
        .iter()
        .map(|&t| {
            let nearest = ((t - t0) / period).round();
            let in_transit = [nearest - 1.0, nearest, nearest + 1.0]
                .into_iter()
                .filter(|&k| k >= 0.0 && k < epoch_count)
                .any(|k| (t - (t0 + k * period)).abs() < half);
            if in_transit { in_transit_flux } else { 1.0 }
        })
        .collect())
}
