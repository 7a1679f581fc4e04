//! sRGB → CIELAB conversion and per-channel in-range masking.
//!
//! The pipeline selects line pixels in LAB space because lightness and
//! chroma separate there: a dark, neutral-colored line keeps a low L and
//! a/b close to the neutral axis under hue-shifting floor lighting.
//!
//! Values follow the common 8-bit LAB convention: L is rescaled from
//! [0, 100] to [0, 255], a and b are offset by 128 so neutral sits at 128.
//! The default bounds therefore read "L ≤ 100, a and b within 110..=150".
//!
//! The sRGB linearization runs through a 256-entry lookup table; rows are
//! converted in parallel.
use crate::image::{FrameView, GrayU8};
use rayon::prelude::*;
use serde::Deserialize;
use std::sync::OnceLock;

static SRGB_TO_LINEAR: OnceLock<[f32; 256]> = OnceLock::new();

fn srgb_to_linear() -> &'static [f32; 256] {
    SRGB_TO_LINEAR.get_or_init(|| {
        let mut lut = [0.0f32; 256];
        for (i, v) in lut.iter_mut().enumerate() {
            let c = i as f32 / 255.0;
            *v = if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            };
        }
        lut
    })
}

// D65 reference white, Y normalized to 1.
const XN: f32 = 0.950456;
const ZN: f32 = 1.088754;

// CIE threshold between the cube-root and linear branches.
const LAB_T0: f32 = 0.008856;

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_T0 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Convert one sRGB pixel to 8-bit (L, a, b).
#[inline]
pub fn lab8_from_rgb(r: u8, g: u8, b: u8) -> [u8; 3] {
    let lut = srgb_to_linear();
    let rl = lut[r as usize];
    let gl = lut[g as usize];
    let bl = lut[b as usize];

    let x = (0.412453 * rl + 0.357580 * gl + 0.180423 * bl) / XN;
    let y = 0.212671 * rl + 0.715160 * gl + 0.072169 * bl;
    let z = (0.019334 * rl + 0.119193 * gl + 0.950227 * bl) / ZN;

    let fy = lab_f(y);
    let l = if y > LAB_T0 { 116.0 * fy - 16.0 } else { 903.3 * y };
    let a = 500.0 * (lab_f(x) - fy) + 128.0;
    let bb = 200.0 * (fy - lab_f(z)) + 128.0;

    [
        (l * 255.0 / 100.0).round().clamp(0.0, 255.0) as u8,
        a.round().clamp(0.0, 255.0) as u8,
        bb.round().clamp(0.0, 255.0) as u8,
    ]
}

/// Inclusive per-channel bounds for the LAB in-range test.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct LabBounds {
    /// Lower (L, a, b) bounds, 8-bit convention.
    pub lower: [u8; 3],
    /// Upper (L, a, b) bounds, 8-bit convention.
    pub upper: [u8; 3],
}

impl Default for LabBounds {
    fn default() -> Self {
        // Dark (low L), chromatically neutral (a, b near 128) line pixels.
        Self {
            lower: [0, 110, 110],
            upper: [100, 150, 150],
        }
    }
}

impl LabBounds {
    #[inline]
    fn contains(&self, lab: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= lab[c] && lab[c] <= self.upper[c])
    }
}

/// Binary mask of pixels whose L, a and b each fall within `bounds`.
///
/// An all-zero mask is a valid result and is handled downstream.
pub fn lab_in_range(frame: &FrameView<'_>, bounds: &LabBounds) -> GrayU8 {
    let mut mask = GrayU8::new(frame.w, frame.h);
    let width = frame.w;
    if width == 0 {
        return mask;
    }
    mask.data
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, out_row)| {
            let row = frame.row(y);
            for (x, out) in out_row.iter_mut().enumerate() {
                let lab = lab8_from_rgb(row[3 * x], row[3 * x + 1], row[3 * x + 2]);
                *out = if bounds.contains(lab) { 255 } else { 0 };
            }
        });
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_dark_and_neutral() {
        let lab = lab8_from_rgb(0, 0, 0);
        assert_eq!(lab[0], 0);
        assert_eq!(lab[1], 128);
        assert_eq!(lab[2], 128);
    }

    #[test]
    fn white_has_maximum_lightness() {
        let lab = lab8_from_rgb(255, 255, 255);
        assert_eq!(lab[0], 255);
        assert!((lab[1] as i32 - 128).abs() <= 1);
        assert!((lab[2] as i32 - 128).abs() <= 1);
    }

    #[test]
    fn grays_stay_on_the_neutral_axis() {
        for v in [30u8, 90, 160, 220] {
            let lab = lab8_from_rgb(v, v, v);
            assert!((lab[1] as i32 - 128).abs() <= 1, "a off-neutral for {v}");
            assert!((lab[2] as i32 - 128).abs() <= 1, "b off-neutral for {v}");
        }
    }

    #[test]
    fn saturated_red_leaves_the_default_bounds() {
        let bounds = LabBounds::default();
        let lab = lab8_from_rgb(255, 0, 0);
        assert!(!bounds.contains(lab));
    }

    #[test]
    fn default_bounds_accept_dark_gray_reject_white() {
        let bounds = LabBounds::default();
        assert!(bounds.contains(lab8_from_rgb(20, 20, 20)));
        assert!(bounds.contains(lab8_from_rgb(60, 60, 60)));
        assert!(!bounds.contains(lab8_from_rgb(255, 255, 255)));
    }

    #[test]
    fn in_range_masks_only_matching_pixels() {
        // 2×2 frame: dark gray, white, red, black
        let data = [
            20u8, 20, 20, 255, 255, 255, //
            255, 0, 0, 0, 0, 0,
        ];
        let frame = FrameView {
            w: 2,
            h: 2,
            stride: 2,
            data: &data,
        };
        let mask = lab_in_range(&frame, &LabBounds::default());
        assert_eq!(mask.get(0, 0), 255);
        assert_eq!(mask.get(1, 0), 0);
        assert_eq!(mask.get(0, 1), 0);
        assert_eq!(mask.get(1, 1), 255);
    }
}
