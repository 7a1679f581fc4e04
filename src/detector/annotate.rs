//! Overlay drawing for the annotated diagnostic frame.
//!
//! Reproduces the operator view: detected segments in red, their
//! midpoints as filled green circles, the principal point as a blue
//! circle outline and the estimated line center as a yellow one, both
//! drawn on the principal row. All drawing is clipped to the frame.
use crate::image::{FrameView, RgbU8};
use crate::segments::Segment;

const SEGMENT_COLOR: [u8; 3] = [255, 0, 0];
const MIDPOINT_COLOR: [u8; 3] = [0, 255, 0];
const PRINCIPAL_COLOR: [u8; 3] = [0, 0, 255];
const CENTER_COLOR: [u8; 3] = [255, 255, 0];

const MIDPOINT_RADIUS: i32 = 5;
const CENTER_RADIUS: i32 = 10;

#[inline]
fn put_pixel(img: &mut RgbU8, x: i32, y: i32, rgb: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as usize) < img.w && (y as usize) < img.h {
        img.set_pixel(x as usize, y as usize, rgb);
    }
}

/// Bresenham line between two clamped endpoints.
fn draw_line(img: &mut RgbU8, x1: i32, y1: i32, x2: i32, y2: i32, rgb: [u8; 3]) {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);
    loop {
        put_pixel(img, x, y, rgb);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Filled disk of radius `r`.
fn draw_disk(img: &mut RgbU8, cx: i32, cy: i32, r: i32, rgb: [u8; 3]) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put_pixel(img, cx + dx, cy + dy, rgb);
            }
        }
    }
}

/// Midpoint-algorithm circle outline of radius `r`.
fn draw_circle(img: &mut RgbU8, cx: i32, cy: i32, r: i32, rgb: [u8; 3]) {
    let mut x = r;
    let mut y = 0;
    let mut err = 1 - r;
    while x >= y {
        for (px, py) in [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ] {
            put_pixel(img, px, py, rgb);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Copy the frame and draw segments, midpoints and the two center markers.
pub fn draw_overlay(
    frame: &FrameView<'_>,
    segments: &[Segment],
    center_x: f32,
    principal_point: [f32; 2],
) -> RgbU8 {
    let mut out = RgbU8::from_frame(frame);
    for s in segments {
        draw_line(&mut out, s.x1, s.y1, s.x2, s.y2, SEGMENT_COLOR);
        let [mx, my] = s.midpoint();
        draw_disk(
            &mut out,
            mx.round() as i32,
            my.round() as i32,
            MIDPOINT_RADIUS,
            MIDPOINT_COLOR,
        );
    }
    let cy = principal_point[1].round() as i32;
    draw_circle(
        &mut out,
        principal_point[0].round() as i32,
        cy,
        CENTER_RADIUS,
        PRINCIPAL_COLOR,
    );
    draw_circle(&mut out, center_x.round() as i32, cy, CENTER_RADIUS, CENTER_COLOR);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_marks_segment_pixels() {
        let data = vec![0u8; 32 * 32 * 3];
        let frame = FrameView {
            w: 32,
            h: 32,
            stride: 32,
            data: &data,
        };
        let segments = [Segment::new(4, 0, 4, 31)];
        let out = draw_overlay(&frame, &segments, 16.0, [16.0, 16.0]);
        assert_eq!(out.pixel(4, 25), SEGMENT_COLOR);
        // Midpoint disk covers the segment midpoint.
        assert_eq!(out.pixel(4, 15), MIDPOINT_COLOR);
    }

    #[test]
    fn drawing_is_clipped_to_the_frame() {
        let data = vec![0u8; 8 * 8 * 3];
        let frame = FrameView {
            w: 8,
            h: 8,
            stride: 8,
            data: &data,
        };
        // Markers centered outside the frame must not panic.
        let out = draw_overlay(&frame, &[], -20.0, [40.0, 40.0]);
        assert_eq!(out.w, 8);
        assert_eq!(out.h, 8);
    }
}
