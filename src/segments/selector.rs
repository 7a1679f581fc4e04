//! Ranking and aggregation of candidate segments into a line-center
//! estimate, plus the final steering-error computation.
use super::Segment;

/// Sort longest-first; equal lengths keep their input order.
pub fn rank_by_length(segments: &mut [Segment]) {
    segments.sort_by(|p, q| q.length_sq().total_cmp(&p.length_sq()));
}

/// Rank the candidates and average the midpoint x of every one of them.
///
/// Returns `(center_x, valid_count)`. An empty candidate list falls back
/// to `fallback_x` (the principal point), reporting zero segments and
/// therefore zero steering error.
pub fn select_center(segments: &mut [Segment], fallback_x: f32) -> (f32, usize) {
    rank_by_length(segments);
    if segments.is_empty() {
        return (fallback_x, 0);
    }
    let sum: f32 = segments.iter().map(|s| s.midpoint()[0]).sum();
    (sum / segments.len() as f32, segments.len())
}

/// Signed steering error in pixels; positive means the line center sits
/// right of the optical axis.
#[inline]
pub fn steering_error(center_x: f32, principal_x: f32) -> f32 {
    center_x - principal_x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_falls_back_to_principal_point() {
        let mut segments: Vec<Segment> = Vec::new();
        let (center_x, count) = select_center(&mut segments, 320.0);
        assert_eq!(center_x, 320.0);
        assert_eq!(count, 0);
        assert_eq!(steering_error(center_x, 320.0), 0.0);
    }

    #[test]
    fn all_midpoints_contribute_not_just_the_longest() {
        let mut segments = vec![
            Segment::new(200, 0, 200, 2),   // short, midpoint x = 200
            Segment::new(100, 0, 100, 100), // long, midpoint x = 100
        ];
        let (center_x, count) = select_center(&mut segments, 0.0);
        assert_eq!(count, 2);
        assert!((center_x - 150.0).abs() < 1e-3);
        // Longest ranked first.
        assert_eq!(segments[0].x1, 100);
    }

    #[test]
    fn ranking_is_stable_for_equal_lengths() {
        let mut segments = vec![
            Segment::new(10, 0, 10, 50),
            Segment::new(30, 0, 30, 50),
            Segment::new(20, 0, 20, 80),
        ];
        rank_by_length(&mut segments);
        assert_eq!(segments[0].x1, 20);
        assert_eq!(segments[1].x1, 10);
        assert_eq!(segments[2].x1, 30);
    }

    #[test]
    fn error_sign_follows_line_side() {
        assert!(steering_error(400.0, 320.0) > 0.0);
        assert!(steering_error(250.0, 320.0) < 0.0);
    }
}
