use std::f64::consts::TAU;

use super::{Point2, Vector2Ext};

/// Closest point found by a distance query, together with its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    /// Distance from the query point.
    pub distance: f64,
    /// The closest point on the queried geometry.
    pub point: Point2,
}

/// Returns the closest point on a bounded arc to `p`.
///
/// The arc runs from `start` about `center` by the signed `sweep`; `end` is
/// its end point. When the radial projection of `p` falls within the arc's
/// angular span (widened by `angle_tolerance` at both ends), the result is
/// that projection. Otherwise it is the nearer of the two endpoints. A
/// zero-radius arc, or a query point at the center, measures to `start`
/// (every point of the arc is equally far from the center).
#[must_use]
pub fn point_to_arc_distance(
    p: &Point2,
    start: &Point2,
    end: &Point2,
    center: &Point2,
    sweep: f64,
    angle_tolerance: f64,
) -> ClosestPoint {
    let radius = (start - center).norm();
    if radius <= 0.0 || (p - center).norm_squared() == 0.0 {
        return ClosestPoint {
            distance: (p - start).norm(),
            point: *start,
        };
    }

    let projected = center + (p - center).unit_or_zero() * radius;
    let start_angle = (start - center).polar_angle();
    let angle = (projected - center).polar_angle();
    let offset = angle_offset(angle, start_angle, sweep);

    let within = (offset >= sweep.min(0.0) && offset <= sweep.max(0.0))
        || angular_gap(angle, start_angle) < angle_tolerance
        || angular_gap(angle, start_angle + sweep) < angle_tolerance;
    if within {
        return ClosestPoint {
            distance: (p - projected).norm(),
            point: projected,
        };
    }

    let d0 = (p - start).norm();
    let d1 = (p - end).norm();
    if d0 < d1 {
        ClosestPoint {
            distance: d0,
            point: *start,
        }
    } else {
        ClosestPoint {
            distance: d1,
            point: *end,
        }
    }
}

/// Angular offset of `angle` from `start_angle`, wrapped onto the same
/// side as `sweep`.
fn angle_offset(angle: f64, start_angle: f64, sweep: f64) -> f64 {
    let delta = angle - start_angle;
    if sweep * delta >= 0.0 {
        delta
    } else if delta > 0.0 {
        delta - TAU
    } else {
        delta + TAU
    }
}

/// Unsigned angular separation of two angles, in `[0, π]`.
fn angular_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}
