//! Renderable light-curve plot description
//!
//! Rasterising is left to the caller; this holds everything a renderer needs
//! to draw the observed curve with the detected transits highlighted.

use serde::{Deserialize, Serialize};

/// Samples shaded on each side of a detected transit
pub const HIGHLIGHT_HALF_WIDTH: usize = 100;

/// Fixed vertical axis range (relative flux)
pub const Y_LIMITS: (f64, f64) = (0.985, 1.005);

pub const X_LABEL: &str = "Time (days)";
pub const Y_LABEL: &str = "Relative Brightness";

/// Shaded time window around one detected transit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightWindow {
    pub start: f64,
    pub end: f64,
}

/// A light curve ready to be drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightCurvePlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_limits: (f64, f64),
    pub times: Vec<f64>,
    pub flux: Vec<f64>,
    /// Times of the detected transit centres
    pub transit_markers: Vec<f64>,
    pub highlights: Vec<HighlightWindow>,
}

impl LightCurvePlot {
    /// Describe the plot of an observed series and its detected transits
    ///
    /// # Arguments
    /// * `planet_name` - Used in the title
    /// * `times` - Sample times
    /// * `flux` - Observed flux, same length as `times`
    /// * `detected` - Indices returned by the detector
    pub fn new(planet_name: &str, times: &[f64], flux: &[f64], detected: &[usize]) -> Self {
        let last = times.len().saturating_sub(1);
        let detected: Vec<usize> = detected
            .iter()
            .copied()
            .filter(|&i| i < times.len())
            .collect();

        let highlights = detected
            .iter()
            .map(|&i| HighlightWindow {
                start: times[i.saturating_sub(HIGHLIGHT_HALF_WIDTH)],
                end: times[(i + HIGHLIGHT_HALF_WIDTH).min(last)],
            })
            .collect();

        Self {
            title: format!("Transit Light Curve - {}", planet_name),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            y_limits: Y_LIMITS,
            times: times.to_vec(),
            flux: flux.to_vec(),
            transit_markers: detected.iter().map(|&i| times[i]).collect(),
            highlights,
        }
    }

    /// Number of highlighted transits
    pub fn transit_count(&self) -> usize {
        self.transit_markers.len()
    }
}
