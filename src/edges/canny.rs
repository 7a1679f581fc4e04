//! Two-threshold edge extraction over the filtered mask.
//!
//! Sobel gradients → direction-aligned non-maximum suppression →
//! hysteresis: pixels whose magnitude exceeds `high_threshold` seed edges,
//! pixels above `low_threshold` join when 8-connected to a seed.
//!
//! Suppression compares each pixel with its two neighbors along the
//! quantized gradient direction. A step edge in a binary mask yields a
//! two-pixel magnitude plateau, so the comparison is strict against the
//! upstream neighbor and non-strict against the downstream one; exactly
//! one pixel of the plateau survives. The outermost 1-pixel frame is not
//! scanned, which keeps neighbor lookups in bounds and emits no edges at
//! the border.
use super::grad::{sobel_gradients, Grad};
use crate::image::GrayU8;
use serde::Deserialize;

/// Hysteresis thresholds on Sobel gradient magnitude.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct CannyOptions {
    /// Weak-edge threshold; weak pixels join an edge only via connectivity.
    pub low_threshold: f32,
    /// Strong-edge threshold; strong pixels seed the hysteresis pass.
    pub high_threshold: f32,
}

impl Default for CannyOptions {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
        }
    }
}

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Gradient magnitudes surviving non-maximum suppression; zero elsewhere.
fn suppress_non_maxima(grad: &Grad, low_threshold: f32) -> Vec<f32> {
    let w = grad.w;
    let h = grad.h;
    let mut thin = vec![0.0f32; w * h];
    if w < 3 || h < 3 {
        return thin;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let idx = y * w + x;
            let mag = grad.mag[idx];
            if mag < low_threshold {
                continue;
            }

            let gx = grad.gx[idx];
            let gy = grad.gy[idx];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            // (upstream, downstream) along the quantized gradient direction.
            let (before, after) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (grad.mag[idx - 1], grad.mag[idx + 1])
                } else if same_sign {
                    (grad.mag[idx - w + 1], grad.mag[idx + w - 1])
                } else {
                    (grad.mag[idx - w - 1], grad.mag[idx + w + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (grad.mag[idx - w], grad.mag[idx + w])
            } else if same_sign {
                (grad.mag[idx - w + 1], grad.mag[idx + w - 1])
            } else {
                (grad.mag[idx - w - 1], grad.mag[idx + w + 1])
            };

            if mag < before || mag <= after {
                continue;
            }

            thin[idx] = mag;
        }
    }

    thin
}

/// Mark strong pixels, then flood over 8-connected weak pixels.
fn hysteresis(thin: &[f32], w: usize, h: usize, opts: &CannyOptions) -> GrayU8 {
    let mut edges = GrayU8::new(w, h);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if thin[y * w + x] > opts.high_threshold && edges.get(x, y) == 0 {
                edges.set(x, y, 255);
                stack.push((x, y));
                while let Some((cx, cy)) = stack.pop() {
                    for dy in -1i32..=1 {
                        for dx in -1i32..=1 {
                            if dx == 0 && dy == 0 {
                                continue;
                            }
                            let nx = cx as i32 + dx;
                            let ny = cy as i32 + dy;
                            if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                                continue;
                            }
                            let (nx, ny) = (nx as usize, ny as usize);
                            if edges.get(nx, ny) == 0 && thin[ny * w + nx] > opts.low_threshold {
                                edges.set(nx, ny, 255);
                                stack.push((nx, ny));
                            }
                        }
                    }
                }
            }
        }
    }

    edges
}

/// Binary edge map of the filtered mask. All-zero input yields an all-zero
/// edge map.
pub fn detect_edges(mask: &GrayU8, opts: &CannyOptions) -> GrayU8 {
    let grad = sobel_gradients(mask);
    let thin = suppress_non_maxima(&grad, opts.low_threshold);
    hysteresis(&thin, grad.w, grad.h, opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_mask_yields_no_edges() {
        let mask = GrayU8::new(16, 16);
        let edges = detect_edges(&mask, &CannyOptions::default());
        assert_eq!(edges.count_nonzero(), 0);
    }

    #[test]
    fn filled_block_edges_trace_its_boundary() {
        let mut mask = GrayU8::new(20, 20);
        for y in 5..15 {
            for x in 5..15 {
                mask.set(x, y, 255);
            }
        }
        let edges = detect_edges(&mask, &CannyOptions::default());
        assert!(edges.count_nonzero() > 0);
        // Interior stays empty.
        assert_eq!(edges.get(10, 10), 0);
        // Every edge pixel sits within 2px of the block contour.
        for y in 0..20usize {
            for x in 0..20usize {
                if edges.get(x, y) != 0 {
                    let near_x = (4..=6).contains(&x) || (14..=16).contains(&x);
                    let near_y = (4..=6).contains(&y) || (14..=16).contains(&y);
                    assert!(
                        near_x || near_y,
                        "edge pixel far from contour at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn vertical_step_thins_to_single_column() {
        let mut mask = GrayU8::new(16, 16);
        for y in 0..16 {
            for x in 8..16 {
                mask.set(x, y, 255);
            }
        }
        let edges = detect_edges(&mask, &CannyOptions::default());
        // Away from the top/bottom rows each scanline keeps exactly one
        // edge pixel.
        for y in 2..14 {
            let count = (0..16).filter(|&x| edges.get(x, y) != 0).count();
            assert_eq!(count, 1, "row {y} not thinned");
        }
    }

    #[test]
    fn thresholds_above_step_magnitude_suppress_output() {
        let mut mask = GrayU8::new(16, 16);
        for y in 0..16 {
            for x in 8..16 {
                mask.set(x, y, 255);
            }
        }
        let opts = CannyOptions {
            low_threshold: 2000.0,
            high_threshold: 4000.0,
        };
        let edges = detect_edges(&mask, &opts);
        assert_eq!(edges.count_nonzero(), 0);
    }
}
