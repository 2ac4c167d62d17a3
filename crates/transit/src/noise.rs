//! Gaussian photometric noise

use rand::Rng;
use rand_distr::{Distribution, Normal};

use physics::require_non_negative;

use crate::error::TransitError;

/// Default per-sample noise standard deviation (relative flux)
pub const DEFAULT_NOISE_LEVEL: f64 = 0.0005;

/// Add independent N(0, noise_level) noise to every sample
///
/// A zero noise level returns the flux unchanged.
///
/// # Arguments
/// * `flux` - Relative flux samples
/// * `noise_level` - Standard deviation of the added noise
/// * `rng` - Noise source; seed it for reproducible output
pub fn add_noise<R: Rng + ?Sized>(
    flux: &[f64],
    noise_level: f64,
    rng: &mut R,
) -> Result<Vec<f64>, TransitError> {
    let noise_level = require_non_negative("noise_level", noise_level)?;
    let normal = Normal::new(0.0, noise_level)?;

    Ok(flux.iter().map(|&f| f + normal.sample(rng)).collect())
}
