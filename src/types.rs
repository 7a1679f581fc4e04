use serde::Serialize;

/// Outcome of one frame through the follower pipeline.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Signed horizontal offset in pixels between the estimated line
    /// center and the principal point; positive = line is to the right.
    pub error: f32,
    /// Number of segments that contributed to the estimate.
    pub valid_segments: usize,
    /// Raw (rho, theta) lines reported by the voting stage.
    pub lines_detected: usize,
    /// End-to-end wall time for the frame.
    pub latency_ms: f64,
}
