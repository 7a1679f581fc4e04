#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod image;
pub mod types;

// Pipeline stages – public for tooling and tuning, but the detector is the
// intended entry point.
pub mod colorspace;
pub mod edges;
pub mod hough;
pub mod morphology;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: follower + result.
pub use crate::detector::{FollowerParams, LineFollower};
pub use crate::types::DetectionResult;

// Per-frame reporting returned by `process_with_report`.
pub use crate::diagnostics::FrameReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::FrameView;
    pub use crate::{DetectionResult, FollowerParams, LineFollower};
}
