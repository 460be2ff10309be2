//! Deviation between a Bézier curve and a candidate biarc.
//!
//! The estimate samples the curve on a fixed, doubling schedule
//! (10, 20, 40, 80 intervals) and keeps the worst distance to the nearer of
//! the two arcs. It is not an exact Hausdorff distance: a peak that falls
//! between samples is missed, and the estimate converges from below as the
//! sampling density grows. The pass count is bounded so the result is
//! deterministic.

use crate::geometry::{ArcSegment, CubicBezier};
use crate::math::distance_2d::{point_to_arc_distance, ClosestPoint};
use crate::math::Point2;

/// Intervals sampled in the first pass.
const INITIAL_SAMPLES: u32 = 10;

/// Maximum number of sampling passes.
const MAX_PASSES: u32 = 4;

/// Closest point on `arc` to `p`.
#[must_use]
pub fn distance_to_arc(p: &Point2, arc: &ArcSegment, angle_tolerance: f64) -> ClosestPoint {
    point_to_arc_distance(p, &arc.start, &arc.end, &arc.center, arc.sweep, angle_tolerance)
}

/// Estimates the largest distance from `bezier` to the biarc `first` +
/// `second`.
///
/// Sampling stops once two successive passes agree within `tolerance` or
/// after the fourth pass.
#[must_use]
pub fn max_deviation(
    bezier: &CubicBezier,
    first: &ArcSegment,
    second: &ArcSegment,
    tolerance: f64,
    angle_tolerance: f64,
) -> f64 {
    let mut samples = INITIAL_SAMPLES;
    let mut worst = 0.0_f64;

    for pass in 0..MAX_PASSES {
        let previous = worst;
        for j in 0..=samples {
            let p = bezier.evaluate(f64::from(j) / f64::from(samples));
            let d1 = distance_to_arc(&p, first, angle_tolerance).distance;
            let d2 = distance_to_arc(&p, second, angle_tolerance).distance;
            worst = worst.max(d1.min(d2));
        }
        if pass > 0 && (worst - previous).abs() <= tolerance {
            break;
        }
        samples *= 2;
    }

    worst
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    const ANGLE_TOL: f64 = 1e-4;

    fn unit_quarter_arcs() -> (ArcSegment, ArcSegment) {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let mid = Point2::new(h, h);
        (
            ArcSegment::new(Point2::new(1.0, 0.0), mid, Point2::origin(), FRAC_PI_2 / 2.0),
            ArcSegment::new(mid, Point2::new(0.0, 1.0), Point2::origin(), FRAC_PI_2 / 2.0),
        )
    }

    #[test]
    fn quarter_circle_bezier_is_close_to_its_arcs() {
        let k = 0.552_284_749_8;
        let bez = CubicBezier::from([[1.0, 0.0], [1.0, k], [k, 1.0], [0.0, 1.0]]);
        let (a1, a2) = unit_quarter_arcs();
        let d = max_deviation(&bez, &a1, &a2, 0.01, ANGLE_TOL);
        // Known radial error of the standard quarter-circle cubic.
        assert!(d < 3e-4, "d={d}");
        assert!(d > 1e-5, "d={d}");
    }

    #[test]
    fn flat_curve_deviates_by_its_sag() {
        // Straight curve along the chord of the biarc.
        let bez = CubicBezier::from([
            [1.0, 0.0],
            [2.0 / 3.0, 1.0 / 3.0],
            [1.0 / 3.0, 2.0 / 3.0],
            [0.0, 1.0],
        ]);
        let (a1, a2) = unit_quarter_arcs();
        let d = max_deviation(&bez, &a1, &a2, 0.01, ANGLE_TOL);
        // The chord midpoint (0.5, 0.5) lies 1 - √2/2 from the circle.
        let expected = 1.0 - std::f64::consts::FRAC_1_SQRT_2;
        assert!((d - expected).abs() < 1e-9, "d={d}");
    }

    #[test]
    fn distance_to_arc_wraps_segment_fields() {
        let (a1, _) = unit_quarter_arcs();
        let r = distance_to_arc(&Point2::new(2.0, 0.0), &a1, ANGLE_TOL);
        assert!((r.distance - 1.0).abs() < 1e-12);
        assert!((r.point - Point2::new(1.0, 0.0)).norm() < 1e-12);
    }
}
