//! Peak-based transit detection
//!
//! Transits show up as peaks in the inverted flux 1 − f. Peaks are strict
//! local maxima (a flat top counts once, at its midpoint; the first and last
//! samples never count), filtered by a minimum height and thinned so that no
//! two kept peaks are closer than a minimum number of samples.

use serde::{Deserialize, Serialize};

use physics::DomainError;

/// Flux level below which a dip counts as a transit
pub const DEFAULT_THRESHOLD: f64 = 0.995;

/// Minimum separation between detected transits, in samples
pub const DEFAULT_MIN_DISTANCE: usize = 50;

/// Detection tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionSettings {
    /// Flux level a dip must reach; peaks need height ≥ 1 − threshold
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Minimum separation between kept peaks, in samples
    #[serde(default = "default_min_distance")]
    pub min_distance: usize,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_min_distance() -> usize {
    DEFAULT_MIN_DISTANCE
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

/// Indices of detected transits with the default minimum distance
///
/// # Arguments
/// * `times` - Sample times, same length as `flux`
/// * `flux` - Relative flux
/// * `threshold` - Flux level a dip must reach (0.995 by default)
///
/// # Returns
/// Sample indices in ascending order; empty when nothing dips far enough.
pub fn detect_transits(
    times: &[f64],
    flux: &[f64],
    threshold: f64,
) -> Result<Vec<usize>, DomainError> {
    detect_transits_with(
        times,
        flux,
        &DetectionSettings {
            threshold,
            ..DetectionSettings::default()
        },
    )
}

/// Indices of detected transits with explicit settings
pub fn detect_transits_with(
    times: &[f64],
    flux: &[f64],
    settings: &DetectionSettings,
) -> Result<Vec<usize>, DomainError> {
    if times.len() != flux.len() {
        return Err(DomainError::LengthMismatch {
            times: times.len(),
            flux: flux.len(),
        });
    }
    if !settings.threshold.is_finite() {
        return Err(DomainError::NonFinite {
            field: "threshold",
            value: settings.threshold,
        });
    }

    let inverted: Vec<f64> = flux.iter().map(|&f| 1.0 - f).collect();
    let peaks = find_peaks(&inverted, 1.0 - settings.threshold, settings.min_distance);
    log::debug!("Detected {} transits in {} samples", peaks.len(), flux.len());
    Ok(peaks)
}

/// Peaks of `signal` at least `min_height` tall and `min_distance` apart
///
/// Peaks are thinned tallest first; among equal heights the leftmost is kept
/// first. Returned indices are ascending.
pub fn find_peaks(signal: &[f64], min_height: f64, min_distance: usize) -> Vec<usize> {
    let peaks: Vec<usize> = local_maxima(signal)
        .into_iter()
        .filter(|&i| signal[i] >= min_height)
        .collect();

    if min_distance <= 1 || peaks.len() < 2 {
        return peaks;
    }
    select_by_distance(signal, &peaks, min_distance)
}

/// Strict local maxima, flat tops reduced to their (lower) midpoint
fn local_maxima(signal: &[f64]) -> Vec<usize> {
    let mut maxima = Vec::new();
    if signal.len() < 3 {
        return maxima;
    }

    let last = signal.len() - 1;
    let mut i = 1;
    while i < last {
        if signal[i - 1] < signal[i] {
            let mut ahead = i + 1;
            while ahead < last && signal[ahead] == signal[i] {
                ahead += 1;
            }
            if signal[ahead] < signal[i] {
                maxima.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }
    maxima
}

/// Greedy suppression of peaks closer than `min_distance` to a taller one
fn select_by_distance(signal: &[f64], peaks: &[usize], min_distance: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..peaks.len()).collect();
    // Stable sort keeps ascending index among equal heights
    order.sort_by(|&a, &b| signal[peaks[b]].total_cmp(&signal[peaks[a]]));

    let mut keep = vec![true; peaks.len()];
    for &j in &order {
        if !keep[j] {
            continue;
        }
        for k in (0..j).rev() {
            if peaks[j] - peaks[k] >= min_distance {
                break;
            }
            keep[k] = false;
        }
        for k in j + 1..peaks.len() {
            if peaks[k] - peaks[j] >= min_distance {
                break;
            }
            keep[k] = false;
        }
    }

    peaks
        .iter()
        .zip(keep)
        .filter_map(|(&peak, kept)| kept.then_some(peak))
        .collect()
}
