//! Parameter types configuring the follower stages.
//!
//! All six LAB bounds, the morphology kernel, both edge thresholds, the
//! accumulator resolution/threshold and the principal point are runtime
//! configuration; nothing is compiled in. Defaults reproduce the tuning
//! for a dark line on a light floor at 1280×1024.

use crate::colorspace::LabBounds;
use crate::edges::CannyOptions;
use crate::hough::HoughOptions;
use serde::Deserialize;

/// Follower-wide parameters controlling the per-frame pipeline.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FollowerParams {
    /// LAB in-range bounds selecting line-colored pixels.
    pub lab_bounds: LabBounds,
    /// Side of the square structuring element for noise suppression (odd).
    pub morph_kernel: usize,
    /// Hysteresis thresholds for the edge stage.
    pub canny: CannyOptions,
    /// Accumulator resolution and vote threshold for line detection.
    pub hough: HoughOptions,
    /// Optical center `(cx, cy)` used as the zero-error reference.
    pub principal_point: [f32; 2],
}

impl Default for FollowerParams {
    fn default() -> Self {
        Self {
            lab_bounds: LabBounds::default(),
            morph_kernel: 5,
            canny: CannyOptions::default(),
            hough: HoughOptions::default(),
            principal_point: [631.587_7, 527.029_66],
        }
    }
}
