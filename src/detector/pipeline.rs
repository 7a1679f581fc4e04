//! Follower pipeline orchestrating the image-to-error stages.
//!
//! The [`LineFollower`] exposes a simple API: feed an RGB frame and get
//! the signed steering error plus the evidence behind it. Internally it
//! chains LAB segmentation, morphological noise suppression, edge
//! extraction, Hough voting, polar-to-segment projection and midpoint
//! aggregation. Every grid is recreated per call; the only state carried
//! across frames is the configuration and the most recent diagnostic
//! artifacts.
//!
//! Typical usage:
//! ```no_run
//! use line_follower::{FollowerParams, LineFollower};
//! use line_follower::image::FrameView;
//!
//! # fn example(frame: FrameView) -> Result<(), String> {
//! let mut follower = LineFollower::new(FollowerParams::default());
//! let result = follower.process(&frame)?;
//! println!("error={:+.1}px", result.error);
//! # Ok(())
//! # }
//! ```

use super::annotate::draw_overlay;
use super::options::FollowerParams;
use crate::colorspace::lab_in_range;
use crate::diagnostics::{FrameReport, TimingBreakdown};
use crate::edges::detect_edges;
use crate::hough::detect_lines;
use crate::image::{FrameView, GrayU8, RgbU8};
use crate::morphology::dilate_erode;
use crate::segments::{project, select_center, steering_error, Segment};
use crate::types::DetectionResult;
use log::debug;
use std::time::Instant;

/// Intermediate grids retained after a frame for visualization. Not
/// required for correctness; consumers are display windows and the demo
/// binaries.
#[derive(Clone, Debug)]
pub struct FrameArtifacts {
    /// Raw LAB in-range mask, before noise suppression.
    pub mask: GrayU8,
    /// Mask after the dilate-then-erode pass.
    pub filtered: GrayU8,
    /// Binary edge map fed to the voting stage.
    pub edges: GrayU8,
    /// Input copy with segments, midpoints and center markers drawn in.
    pub annotated: RgbU8,
}

/// Report plus artifacts returned by one pipeline invocation.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub report: FrameReport,
    pub artifacts: FrameArtifacts,
}

#[inline]
fn ms_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn validate_frame(frame: &FrameView<'_>) -> Result<(), String> {
    if frame.w < 2 || frame.h < 2 {
        return Err(format!(
            "Frame too small: {}x{} (minimum 2x2)",
            frame.w, frame.h
        ));
    }
    let needed = ((frame.h - 1) * frame.stride + frame.w) * 3;
    if frame.data.len() < needed {
        return Err(format!(
            "Frame buffer too short: {} bytes, need {needed}",
            frame.data.len()
        ));
    }
    Ok(())
}

/// Run the full pipeline on one frame against a read-only configuration.
///
/// Fails only on an invalid input frame; every degenerate intermediate
/// (empty mask, no lines, no segments) resolves to a zero-error result.
pub fn run_pipeline(params: &FollowerParams, frame: &FrameView<'_>) -> Result<FrameOutput, String> {
    validate_frame(frame)?;
    let total_start = Instant::now();
    let mut timing = TimingBreakdown::default();

    let stage_start = Instant::now();
    let mask = lab_in_range(frame, &params.lab_bounds);
    timing.segmentation_ms = ms_since(stage_start);
    debug!("segmentation: {} pixels in range", mask.count_nonzero());

    let stage_start = Instant::now();
    let filtered = dilate_erode(&mask, params.morph_kernel);
    timing.morphology_ms = ms_since(stage_start);

    let stage_start = Instant::now();
    let edges = detect_edges(&filtered, &params.canny);
    timing.edges_ms = ms_since(stage_start);
    debug!("edges: {} pixels", edges.count_nonzero());

    let stage_start = Instant::now();
    let lines = detect_lines(&edges, &params.hough);
    timing.hough_ms = ms_since(stage_start);
    debug!("hough: {} lines above threshold", lines.len());

    let stage_start = Instant::now();
    let mut segments: Vec<Segment> = lines
        .iter()
        .map(|line| project(line, frame.w, frame.h))
        .collect();
    let [cx, _cy] = params.principal_point;
    let (center_x, valid_segments) = select_center(&mut segments, cx);
    timing.projection_ms = ms_since(stage_start);

    let error = steering_error(center_x, cx);
    debug!("center_x={center_x:.1} error={error:+.1} ({valid_segments} segments)");

    let annotated = draw_overlay(frame, &segments, center_x, params.principal_point);
    timing.total_ms = ms_since(total_start);

    let result = DetectionResult {
        error,
        valid_segments,
        lines_detected: lines.len(),
        latency_ms: timing.total_ms,
    };
    Ok(FrameOutput {
        report: FrameReport {
            width: frame.w,
            height: frame.h,
            result,
            center_x,
            segments,
            timing,
        },
        artifacts: FrameArtifacts {
            mask,
            filtered,
            edges,
            annotated,
        },
    })
}

/// Line follower holding the tunable configuration and the most recent
/// diagnostic artifacts.
///
/// Concurrent processing of independent frames is safe by running
/// `run_pipeline` directly against a shared `&FollowerParams`; the
/// follower itself serializes configuration changes and artifact storage
/// behind `&mut self`.
pub struct LineFollower {
    params: FollowerParams,
    artifacts: Option<FrameArtifacts>,
}

impl LineFollower {
    /// Create a follower with the supplied parameters.
    pub fn new(params: FollowerParams) -> Self {
        Self {
            params,
            artifacts: None,
        }
    }

    /// Run the pipeline, keep the artifacts, return the scalar result.
    pub fn process(&mut self, frame: &FrameView<'_>) -> Result<DetectionResult, String> {
        self.process_with_report(frame).map(|report| report.result)
    }

    /// Run the pipeline, keep the artifacts, return the detailed report.
    pub fn process_with_report(&mut self, frame: &FrameView<'_>) -> Result<FrameReport, String> {
        let output = run_pipeline(&self.params, frame)?;
        self.artifacts = Some(output.artifacts);
        Ok(output.report)
    }

    /// Current configuration.
    pub fn params(&self) -> &FollowerParams {
        &self.params
    }

    /// Artifacts of the most recent processed frame, if any.
    pub fn artifacts(&self) -> Option<&FrameArtifacts> {
        self.artifacts.as_ref()
    }

    /// Update the LAB in-range bounds.
    pub fn set_lab_bounds(&mut self, bounds: crate::colorspace::LabBounds) {
        self.params.lab_bounds = bounds;
    }

    /// Update the noise-suppression kernel size (odd).
    pub fn set_morph_kernel(&mut self, kernel_size: usize) {
        self.params.morph_kernel = kernel_size;
    }

    /// Update the edge-stage hysteresis thresholds.
    pub fn set_canny(&mut self, options: crate::edges::CannyOptions) {
        self.params.canny = options;
    }

    /// Update the accumulator resolution and vote threshold.
    pub fn set_hough(&mut self, options: crate::hough::HoughOptions) {
        self.params.hough = options;
    }

    /// Update the optical center used as the zero-error reference.
    pub fn set_principal_point(&mut self, cx: f32, cy: f32) {
        self.params.principal_point = [cx, cy];
    }
}
