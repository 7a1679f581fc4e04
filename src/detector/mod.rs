//! Follower entry point: configuration, per-frame pipeline and the
//! annotated diagnostic overlay.

pub mod annotate;
pub mod options;
pub mod pipeline;

pub use options::FollowerParams;
pub use pipeline::{run_pipeline, FrameArtifacts, FrameOutput, LineFollower};
