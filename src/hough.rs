//! Standard (rho, theta) Hough transform over a binary edge map.
//!
//! Every edge pixel votes for all theta bins at the configured angular
//! resolution; accumulator cells whose vote count exceeds the threshold
//! are reported as detected lines, strongest first. Sin/cos are
//! precomputed per theta bin.
//!
//! Theta covers [0, π); rho is signed, measured from the image origin
//! along the line normal `(cos θ, sin θ)`, so `x·cosθ + y·sinθ = ρ`.
//! An empty result is the expected outcome for a frame with no dominant
//! line, not an error.
use crate::image::GrayU8;
use serde::{Deserialize, Serialize};

/// Line in normal form: `x·cosθ + y·sinθ = ρ`.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarLine {
    /// Signed perpendicular distance from the origin, in pixels.
    pub rho: f32,
    /// Angle of the normal in radians, in [0, π).
    pub theta: f32,
}

/// Accumulator resolution and acceptance threshold.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct HoughOptions {
    /// Distance resolution of the rho bins, in pixels.
    pub rho_resolution: f32,
    /// Angular resolution of the theta bins, in radians.
    pub theta_resolution: f32,
    /// A bin is reported once its votes strictly exceed this count.
    pub vote_threshold: u32,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            rho_resolution: 1.0,
            theta_resolution: std::f32::consts::PI / 180.0,
            vote_threshold: 200,
        }
    }
}

/// Detect dominant lines in the edge map.
///
/// Returned lines are sorted by vote count descending; ties keep
/// accumulator scan order, so the output is deterministic for a given
/// edge map.
pub fn detect_lines(edges: &GrayU8, opts: &HoughOptions) -> Vec<PolarLine> {
    let w = edges.w;
    let h = edges.h;
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let diag = ((w * w + h * h) as f32).sqrt();
    let half = (diag / opts.rho_resolution).ceil() as i32;
    let n_rho = (2 * half + 1) as usize;
    let n_theta = (std::f32::consts::PI / opts.theta_resolution).ceil() as usize;

    let thetas: Vec<f32> = (0..n_theta)
        .map(|i| i as f32 * opts.theta_resolution)
        .collect();
    let cos_table: Vec<f32> = thetas.iter().map(|&t| t.cos()).collect();
    let sin_table: Vec<f32> = thetas.iter().map(|&t| t.sin()).collect();

    let mut acc = vec![0u32; n_theta * n_rho];
    for y in 0..h {
        let row = edges.row(y);
        for (x, &px) in row.iter().enumerate() {
            if px == 0 {
                continue;
            }
            let xf = x as f32;
            let yf = y as f32;
            for t in 0..n_theta {
                let rho = xf * cos_table[t] + yf * sin_table[t];
                let bin = (rho / opts.rho_resolution).round() as i32 + half;
                acc[t * n_rho + bin as usize] += 1;
            }
        }
    }

    let mut hits: Vec<(u32, PolarLine)> = Vec::new();
    for t in 0..n_theta {
        for r in 0..n_rho {
            let votes = acc[t * n_rho + r];
            if votes > opts.vote_threshold {
                hits.push((
                    votes,
                    PolarLine {
                        rho: (r as i32 - half) as f32 * opts.rho_resolution,
                        theta: thetas[t],
                    },
                ));
            }
        }
    }
    hits.sort_by(|a, b| b.0.cmp(&a.0));
    hits.into_iter().map(|(_, line)| line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_edges(w: usize, h: usize, x: usize) -> GrayU8 {
        let mut edges = GrayU8::new(w, h);
        for y in 0..h {
            edges.set(x, y, 255);
        }
        edges
    }

    #[test]
    fn empty_edge_map_detects_nothing() {
        let edges = GrayU8::new(64, 64);
        assert!(detect_lines(&edges, &HoughOptions::default()).is_empty());
    }

    #[test]
    fn vertical_column_maps_to_theta_zero() {
        let edges = column_edges(64, 300, 17);
        let opts = HoughOptions {
            vote_threshold: 250,
            ..Default::default()
        };
        let lines = detect_lines(&edges, &opts);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].theta.abs() < 1e-6);
        assert!((lines[0].rho - 17.0).abs() <= 1.0);
    }

    #[test]
    fn horizontal_row_maps_to_theta_half_pi() {
        let mut edges = GrayU8::new(300, 64);
        for x in 0..300 {
            edges.set(x, 23, 255);
        }
        let opts = HoughOptions {
            vote_threshold: 250,
            ..Default::default()
        };
        let lines = detect_lines(&edges, &opts);
        assert_eq!(lines.len(), 1);
        assert!((lines[0].theta - std::f32::consts::FRAC_PI_2).abs() < 2e-2);
        assert!((lines[0].rho - 23.0).abs() <= 1.0);
    }

    #[test]
    fn below_threshold_column_is_ignored() {
        let edges = column_edges(64, 150, 10);
        let opts = HoughOptions {
            vote_threshold: 200,
            ..Default::default()
        };
        assert!(detect_lines(&edges, &opts).is_empty());
    }

    #[test]
    fn strongest_line_is_reported_first() {
        let mut edges = column_edges(64, 300, 10);
        for y in 0..250 {
            edges.set(40, y, 255);
        }
        let opts = HoughOptions {
            vote_threshold: 150,
            ..Default::default()
        };
        let lines = detect_lines(&edges, &opts);
        assert!(lines.len() >= 2);
        assert!((lines[0].rho - 10.0).abs() <= 1.0);
        assert!((lines[1].rho - 40.0).abs() <= 1.0);
    }
}
