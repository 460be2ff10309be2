//! 2D arc construction.
//!
//! Sweep convention: positive sweep = counter-clockwise (y-up frame).
use std::f64::consts::TAU;

use super::{Point2, Vector2Ext, TOLERANCE};

/// Builds the arc from `p0` to `p2` whose end tangents meet at `apex`.
///
/// The apex must be equidistant from both endpoints (it lies on the
/// perpendicular bisector of the chord). The center sits on the far side of
/// the chord midpoint `D`, at `D + (|D - p0|² / |D - apex|²) · (D - apex)`.
///
/// Returns `(center, sweep)` where the sweep is signed and lies in
/// `(-2π, 2π)`, or `None` when no usable arc exists: the apex coincides with
/// the chord midpoint, the center lies beyond `max_coordinate`, or the
/// radius is below `min_radius`.
#[must_use]
pub fn arc_from_tangent_apex(
    p0: &Point2,
    apex: &Point2,
    p2: &Point2,
    min_radius: f64,
    max_coordinate: f64,
) -> Option<(Point2, f64)> {
    let mid = nalgebra::center(p0, p2);
    let to_mid = mid - apex;
    let apex_dist_sq = to_mid.norm_squared();
    if apex_dist_sq == 0.0 {
        return None;
    }

    let center = mid + to_mid * ((mid - p0).norm_squared() / apex_dist_sq);
    if !center.x.is_finite()
        || !center.y.is_finite()
        || center.x.abs() > max_coordinate
        || center.y.abs() > max_coordinate
        || (p0 - center).norm() < min_radius
    {
        return None;
    }

    let a0 = (p0 - center).polar_angle().rem_euclid(TAU);
    let a1 = (apex - center).polar_angle().rem_euclid(TAU);
    let a2 = (p2 - center).polar_angle().rem_euclid(TAU);

    Some((center, signed_sweep(a0, a1, a2)))
}

/// Center, radius and signed sweep of the arc from `a` to `b` passing
/// through `g`.
///
/// Returns `None` for (near-)collinear points.
#[must_use]
pub fn circle_from_three_points(a: &Point2, b: &Point2, g: &Point2) -> Option<(Point2, f64, f64)> {
    let ab = b - a;
    let ag = g - a;
    let d = 2.0 * ab.perp(&ag);
    if d.abs() < TOLERANCE {
        return None;
    }

    let ab_sq = ab.norm_squared();
    let ag_sq = ag.norm_squared();
    let ux = (ag.y * ab_sq - ab.y * ag_sq) / d;
    let uy = (ab.x * ag_sq - ag.x * ab_sq) / d;
    let center = Point2::new(a.x + ux, a.y + uy);
    let radius = (a - center).norm();

    let ta = (a - center).polar_angle().rem_euclid(TAU);
    let tg = (g - center).polar_angle().rem_euclid(TAU);
    let tb = (b - center).polar_angle().rem_euclid(TAU);

    Some((center, radius, signed_sweep(ta, tg, tb)))
}

/// Sweep from angle `start` to angle `end` (both in `[0, 2π)`) in the
/// direction that passes `via`.
fn signed_sweep(start: f64, via: f64, end: f64) -> f64 {
    let ccw = (end - start).rem_euclid(TAU);
    let via_outside_ccw =
        (start < end && (via < start || end < via)) || (end < via && via < start);
    if via_outside_ccw {
        ccw - TAU
    } else {
        ccw
    }
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
