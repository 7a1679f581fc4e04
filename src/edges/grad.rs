//! 3×3 Sobel gradients over a single-channel mask.
//!
//! - Convolves the kernel pair with border clamping (replicate).
//! - Outputs per-pixel `gx`, `gy`, `mag = sqrt(gx^2+gy^2)` as flat float
//!   buffers of the mask dimensions.
//!
//! Complexity: O(W·H); memory: three float buffers.
use crate::image::GrayU8;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers in row-major order (stride == `w`).
#[derive(Clone, Debug)]
pub struct Grad {
    pub w: usize,
    pub h: usize,
    /// Horizontal derivative (convolution with kernel X)
    pub gx: Vec<f32>,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: Vec<f32>,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: Vec<f32>,
}

/// Compute Sobel gradients on a single-channel 8-bit mask.
pub fn sobel_gradients(mask: &GrayU8) -> Grad {
    let w = mask.w;
    let h = mask.h;
    let mut gx = vec![0.0f32; w * h];
    let mut gy = vec![0.0f32; w * h];
    let mut mag = vec![0.0f32; w * h];

    if w == 0 || h == 0 {
        return Grad { w, h, gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [mask.row(y_idx[0]), mask.row(y_idx[1]), mask.row(y_idx[2])];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                let p0 = row[x_idx[0]] as f32;
                let p1 = row[x_idx[1]] as f32;
                let p2 = row[x_idx[2]] as f32;
                sum_x += p0 * kx_row[0] + p1 * kx_row[1] + p2 * kx_row[2];
                sum_y += p0 * ky_row[0] + p1 * ky_row[1] + p2 * ky_row[2];
            }

            let idx = y * w + x;
            gx[idx] = sum_x;
            gy[idx] = sum_y;
            mag[idx] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { w, h, gx, gy, mag }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_step_has_horizontal_gradient() {
        let mut mask = GrayU8::new(8, 8);
        for y in 0..8 {
            for x in 4..8 {
                mask.set(x, y, 255);
            }
        }
        let grad = sobel_gradients(&mask);
        let idx = 4 * 8 + 3; // just left of the step
        assert!(grad.gx[idx] > 0.0);
        assert_eq!(grad.gy[idx], 0.0);
        assert!(grad.mag[idx] > 0.0);
        // Far from the step the response is flat.
        assert_eq!(grad.mag[4 * 8 + 1], 0.0);
        assert_eq!(grad.mag[4 * 8 + 6], 0.0);
    }

    #[test]
    fn flat_mask_has_zero_gradient() {
        let mask = GrayU8::new(5, 5);
        let grad = sobel_gradients(&mask);
        assert!(grad.mag.iter().all(|&m| m == 0.0));
    }
}
