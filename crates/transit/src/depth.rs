//! Transit depth measured from an observed series

use physics::DomainError;

/// Samples above this relative flux count as out-of-transit baseline
pub const BASELINE_THRESHOLD: f64 = 0.998;

/// Median of the values; the mean of the middle pair for even counts
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Transit depth as a percentage of the out-of-transit baseline
///
/// The baseline is the median of samples above [`BASELINE_THRESHOLD`]; the
/// depth is (baseline − min) / baseline × 100.
pub fn calculate_transit_depth(flux: &[f64]) -> Result<f64, DomainError> {
    let mut baseline_samples: Vec<f64> = flux
        .iter()
        .copied()
        .filter(|&f| f > BASELINE_THRESHOLD)
        .collect();
    let baseline = median(&mut baseline_samples).ok_or(DomainError::NoBaseline {
        threshold: BASELINE_THRESHOLD,
    })?;

    let minimum = flux.iter().copied().fold(f64::INFINITY, f64::min);
    Ok((baseline - minimum) / baseline * 100.0)
}
