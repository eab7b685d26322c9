//! Roof geometry helpers shared by both roof styles.

use serde::{Deserialize, Serialize};

/// Spacing between rafters or trusses
pub const MEMBER_SPACING_MM: f64 = 600.0;

/// Gable rise as a fraction of span
pub const GABLE_RISE_RATIO: f64 = 0.20;
/// Lowest gable rise
pub const GABLE_RISE_MIN_MM: f64 = 200.0;
/// Highest gable rise
pub const GABLE_RISE_MAX_MM: f64 = 900.0;

/// Plan axis a roof assembly spans across
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanAxis {
    /// Members run across the frame width (world x)
    Width,
    /// Members run across the frame depth (world z)
    Depth,
}

impl SpanAxis {
    /// Yaw that turns the assembly's local span axis onto this world axis
    pub fn yaw_rad(&self) -> f64 {
        match self {
            SpanAxis::Width => 0.0,
            SpanAxis::Depth => std::f64::consts::FRAC_PI_2,
        }
    }

    /// (span extent, ridge-parallel extent) of a plan rectangle
    pub fn split(&self, width: f64, depth: f64) -> (f64, f64) {
        match self {
            SpanAxis::Width => (width, depth),
            SpanAxis::Depth => (depth, width),
        }
    }
}

/// The shorter plan dimension; ties go to width.
pub fn shortest_axis(width: f64, depth: f64) -> SpanAxis {
    if width <= depth {
        SpanAxis::Width
    } else {
        SpanAxis::Depth
    }
}

/// Span axis for single-slope rafters.
///
/// Up to square the shortest-dimension rule applies. Once the building is
/// wider than deep the span stays locked to width, so the pitch direction
/// always follows the width axis.
pub fn single_slope_span_axis(width: f64, depth: f64) -> SpanAxis {
    if width <= depth {
        shortest_axis(width, depth)
    } else {
        SpanAxis::Width
    }
}

/// Gable span axis: always the shorter plan dimension
pub fn gable_span_axis(width: f64, depth: f64) -> SpanAxis {
    shortest_axis(width, depth)
}

/// Ridge rise of a gable from its span: `clamp(0.20 × span, 200, 900)`
pub fn gable_rise(span_mm: f64) -> f64 {
    (GABLE_RISE_RATIO * span_mm).clamp(GABLE_RISE_MIN_MM, GABLE_RISE_MAX_MM)
}

/// True length of a member that covers `plan_mm` horizontally while rising `rise_mm`
pub fn sloped_length(plan_mm: f64, rise_mm: f64) -> f64 {
    (plan_mm * plan_mm + rise_mm * rise_mm).sqrt()
}

/// Single-slope bearing height at `x_mm` along the frame width.
///
/// Linear from `min` at x = 0 to `max` at x = frame width.
pub fn single_slope_height_at(frame_width_mm: f64, min_height_mm: f64, max_height_mm: f64, x_mm: f64) -> f64 {
    if frame_width_mm <= 0.0 {
        return min_height_mm;
    }
    min_height_mm + (max_height_mm - min_height_mm) * x_mm / frame_width_mm
}

/// Start positions of members of `thickness` spaced along `extent`.
///
/// Members sit every [`MEMBER_SPACING_MM`] from zero, and the last one is
/// always flush with the far end so both ends have bearing. A flush member
/// that would overlap its predecessor replaces it. An extent too short for
/// two members gets a single one at zero.
pub fn spaced_positions(extent_mm: f64, thickness_mm: f64) -> Vec<f64> {
    let last = extent_mm - thickness_mm;
    if last < thickness_mm {
        return vec![0.0];
    }

    let count = (last / MEMBER_SPACING_MM).ceil() as usize;
    let mut positions: Vec<f64> = (0..count)
        .map(|i| i as f64 * MEMBER_SPACING_MM)
        .filter(|&p| p < last)
        .collect();
    if positions.len() > 1 && positions.last().is_some_and(|&prev| last - prev < thickness_mm) {
        positions.pop();
    }
    positions.push(last);
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_slope_heights() {
        assert_eq!(single_slope_height_at(4000.0, 2400.0, 3000.0, 0.0), 2400.0);
        assert_eq!(single_slope_height_at(4000.0, 2400.0, 3000.0, 4000.0), 3000.0);
        assert_eq!(single_slope_height_at(4000.0, 2400.0, 3000.0, 2000.0), 2700.0);
        assert_eq!(single_slope_height_at(0.0, 2400.0, 3000.0, 10.0), 2400.0);
    }

    #[test]
    fn test_span_axis_rules() {
        assert_eq!(shortest_axis(3000.0, 4000.0), SpanAxis::Width);
        assert_eq!(shortest_axis(5000.0, 4000.0), SpanAxis::Depth);
        assert_eq!(gable_span_axis(5000.0, 4000.0), SpanAxis::Depth);
        // width-locked even though depth is shorter
        assert_eq!(single_slope_span_axis(5000.0, 4000.0), SpanAxis::Width);
        assert_eq!(single_slope_span_axis(3000.0, 4000.0), SpanAxis::Width);
        assert_eq!(single_slope_span_axis(4000.0, 4000.0), SpanAxis::Width);
    }

    #[test]
    fn test_gable_rise_clamped() {
        assert_eq!(gable_rise(500.0), 200.0);
        assert_eq!(gable_rise(3000.0), 600.0);
        assert_eq!(gable_rise(10_000.0), 900.0);
    }

    #[test]
    fn test_sloped_length() {
        assert_eq!(sloped_length(3000.0, 4000.0), 5000.0);
        assert_eq!(sloped_length(1200.0, 0.0), 1200.0);
    }

    #[test]
    fn test_spaced_positions_forced_last() {
        assert_eq!(spaced_positions(1210.0, 45.0), vec![0.0, 600.0, 1165.0]);
        assert_eq!(spaced_positions(1245.0, 45.0), vec![0.0, 600.0, 1200.0]);
    }

    #[test]
    fn test_spaced_positions_replaces_overlapping_member() {
        // 1200 and 1215 would overlap; the flush member wins
        assert_eq!(spaced_positions(1260.0, 45.0), vec![0.0, 600.0, 1215.0]);
    }

    #[test]
    fn test_spaced_positions_tiny_extent() {
        assert_eq!(spaced_positions(30.0, 45.0), vec![0.0]);
        assert_eq!(spaced_positions(80.0, 45.0), vec![0.0]);
        assert_eq!(spaced_positions(90.0, 45.0), vec![0.0, 45.0]);
    }

    #[test]
    fn test_spaced_positions_no_overlap() {
        for extent in (100..5000).step_by(37) {
            let positions = spaced_positions(extent as f64, 45.0);
            for pair in positions.windows(2) {
                assert!(pair[1] - pair[0] >= 45.0, "extent {}: {:?}", extent, positions);
            }
            assert_eq!(*positions.last().unwrap(), extent as f64 - 45.0);
        }
    }
}
