//! Conversion of (rho, theta) lines into segments bounded by the frame.
//!
//! The infinite line through `(ρcosθ, ρsinθ)` with direction
//! `(-sinθ, cosθ)` is intersected with the four frame edges. The two
//! outcomes are explicit:
//!
//! - **Chord**: at least two boundary intersections exist; the pair with
//!   the largest separation is the full visible extent of the line.
//! - **Extrapolated**: fewer than two intersections (degenerate geometry);
//!   the line is extended a fixed reach from its anchor point in both
//!   directions instead.
//!
//! Each boundary computation divides by one direction component, so the
//! guard checks that same component against an epsilon: `|cosθ|` for the
//! horizontal edges (top/bottom), `|sinθ|` for the vertical ones
//! (left/right). Endpoints are clamped to `[0, W-1] × [0, H-1]` on both
//! paths.
use super::Segment;
use crate::hough::PolarLine;
use nalgebra::{Point2, Vector2};

const AXIS_EPS: f32 = 1e-6;
const FALLBACK_REACH: f32 = 2000.0;

enum Projection {
    Chord(Point2<f32>, Point2<f32>),
    Extrapolated(Point2<f32>, Point2<f32>),
}

fn boundary_intersections(
    anchor: Point2<f32>,
    dir: Vector2<f32>,
    width: f32,
    height: f32,
) -> Vec<Point2<f32>> {
    let mut pts = Vec::with_capacity(4);

    // Top (y = 0) and bottom (y = H-1); the parameter divides by dir.y.
    if dir.y.abs() > AXIS_EPS {
        for edge_y in [0.0, height - 1.0] {
            let t = (edge_y - anchor.y) / dir.y;
            let x = anchor.x + t * dir.x;
            if (0.0..=width - 1.0).contains(&x) {
                pts.push(Point2::new(x, edge_y));
            }
        }
    }

    // Left (x = 0) and right (x = W-1); the parameter divides by dir.x.
    if dir.x.abs() > AXIS_EPS {
        for edge_x in [0.0, width - 1.0] {
            let t = (edge_x - anchor.x) / dir.x;
            let y = anchor.y + t * dir.y;
            if (0.0..=height - 1.0).contains(&y) {
                pts.push(Point2::new(edge_x, y));
            }
        }
    }

    pts
}

/// The pair with maximum pairwise separation; `None` below two points.
fn farthest_pair(pts: &[Point2<f32>]) -> Option<(Point2<f32>, Point2<f32>)> {
    if pts.len() < 2 {
        return None;
    }
    let mut best = (0, 1);
    let mut best_d = -1.0f32;
    for i in 0..pts.len() {
        for j in i + 1..pts.len() {
            let d = (pts[i] - pts[j]).norm_squared();
            if d > best_d {
                best_d = d;
                best = (i, j);
            }
        }
    }
    Some((pts[best.0], pts[best.1]))
}

#[inline]
fn clamp_coord(v: f32, len: usize) -> i32 {
    (v.round() as i32).clamp(0, len as i32 - 1)
}

/// Project a polar line onto a segment bounded by a `width × height` frame.
///
/// Deterministic for fixed inputs; the result may be zero-length after
/// clamping when the line lies entirely outside the frame.
pub fn project(line: &PolarLine, width: usize, height: usize) -> Segment {
    let (sin_t, cos_t) = line.theta.sin_cos();
    let anchor = Point2::new(line.rho * cos_t, line.rho * sin_t);
    let dir = Vector2::new(-sin_t, cos_t);

    let pts = boundary_intersections(anchor, dir, width as f32, height as f32);
    let projection = match farthest_pair(&pts) {
        Some((p, q)) => Projection::Chord(p, q),
        None => Projection::Extrapolated(anchor - dir * FALLBACK_REACH, anchor + dir * FALLBACK_REACH),
    };

    let (p, q) = match projection {
        Projection::Chord(p, q) | Projection::Extrapolated(p, q) => (p, q),
    };
    Segment::new(
        clamp_coord(p.x, width),
        clamp_coord(p.y, height),
        clamp_coord(q.x, width),
        clamp_coord(q.y, height),
    )
}
