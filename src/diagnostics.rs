//! Serializable per-frame reporting for tooling and the demo binaries.
//!
//! `FrameReport` is the detailed counterpart of [`DetectionResult`]: it
//! carries the ranked segments, the aggregated center estimate and a
//! fixed per-stage timing breakdown, all JSON-serializable.
use crate::segments::Segment;
use crate::types::DetectionResult;
use serde::Serialize;

/// Wall-time spent in each pipeline stage, milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub segmentation_ms: f64,
    pub morphology_ms: f64,
    pub edges_ms: f64,
    pub hough_ms: f64,
    pub projection_ms: f64,
    pub total_ms: f64,
}

/// Detailed outcome of one frame: scalar result plus the evidence that
/// produced it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    /// Frame width in pixels.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
    /// The externally meaningful scalar result.
    pub result: DetectionResult,
    /// Aggregated line-center x estimate (equals cx when nothing was found).
    pub center_x: f32,
    /// Projected segments, longest first.
    pub segments: Vec<Segment>,
    pub timing: TimingBreakdown,
}
