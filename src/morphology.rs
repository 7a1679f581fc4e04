//! Square-kernel binary morphology for mask cleanup.
//!
//! The noise-suppression pass runs dilation first and erosion second.
//! That order fills small gaps and pinholes inside the line body rather
//! than removing isolated specks, and downstream stages depend on exactly
//! this behavior.
//!
//! The square kernel is separable, so each operation runs as a horizontal
//! max/min sweep followed by a vertical one. Windows are clamped at the
//! frame border; no values outside the image participate, so the border
//! cannot grow structure that the edge detector would pick up.
use crate::image::GrayU8;

#[derive(Clone, Copy)]
enum Sweep {
    Max,
    Min,
}

fn horizontal_sweep(src: &GrayU8, radius: usize, sweep: Sweep) -> GrayU8 {
    let mut out = GrayU8::new(src.w, src.h);
    for y in 0..src.h {
        let row = src.row(y);
        let out_row = out.row_mut(y);
        for x in 0..src.w {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius).min(src.w - 1);
            let window = &row[x0..=x1];
            out_row[x] = match sweep {
                Sweep::Max => *window.iter().max().unwrap_or(&0),
                Sweep::Min => *window.iter().min().unwrap_or(&0),
            };
        }
    }
    out
}

fn vertical_sweep(src: &GrayU8, radius: usize, sweep: Sweep) -> GrayU8 {
    let mut out = GrayU8::new(src.w, src.h);
    for y in 0..src.h {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius).min(src.h - 1);
        let out_row = out.row_mut(y);
        for x in 0..src.w {
            let mut acc = src.get(x, y0);
            for yy in y0 + 1..=y1 {
                let v = src.get(x, yy);
                acc = match sweep {
                    Sweep::Max => acc.max(v),
                    Sweep::Min => acc.min(v),
                };
            }
            out_row[x] = acc;
        }
    }
    out
}

#[inline]
fn radius(kernel_size: usize) -> usize {
    // Odd kernel sizes are expected; even values behave as the next odd size.
    kernel_size / 2
}

/// Dilation with a square structuring element of side `kernel_size`.
pub fn dilate(mask: &GrayU8, kernel_size: usize) -> GrayU8 {
    let r = radius(kernel_size);
    if r == 0 {
        return mask.clone();
    }
    vertical_sweep(&horizontal_sweep(mask, r, Sweep::Max), r, Sweep::Max)
}

/// Erosion with a square structuring element of side `kernel_size`.
pub fn erode(mask: &GrayU8, kernel_size: usize) -> GrayU8 {
    let r = radius(kernel_size);
    if r == 0 {
        return mask.clone();
    }
    vertical_sweep(&horizontal_sweep(mask, r, Sweep::Min), r, Sweep::Min)
}

/// Noise-suppression pass: dilation followed by erosion.
pub fn dilate_erode(mask: &GrayU8, kernel_size: usize) -> GrayU8 {
    erode(&dilate(mask, kernel_size), kernel_size)
}
