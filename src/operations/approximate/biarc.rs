//! Recursive biarc fitting of a single cubic Bézier.
//!
//! Each (sub)curve is matched by a pair of tangent-continuous arcs sharing
//! the curve's endpoints and end tangents. When the pair strays further
//! than `biarc_tolerance` from the curve, the curve is halved and each half
//! is fitted on its own, down to `max_split_depth` levels. Degenerate
//! configurations become straight lines.

use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::error::{FitError, Result};
use crate::geometry::{ArcSegment, CubicBezier, Segment};
use crate::math::arc_2d::arc_from_tangent_apex;
use crate::math::Vector2Ext;

use super::deviation::max_deviation;
use super::params::{BiarcParams, DepthLimitFallback};

/// Coefficients below this magnitude count as zero in the beta quadratic.
const COEFF_EPS: f64 = 1e-10;

/// Fits `bezier` with lines and arcs, appending the result to `out`.
///
/// # Errors
///
/// Returns a [`FitError`] when the beta quadratic has no usable root.
#[allow(clippy::too_many_lines)]
pub(crate) fn fit(
    bezier: &CubicBezier,
    params: &BiarcParams,
    depth: u32,
    out: &mut Vec<Segment>,
) -> Result<()> {
    let p0 = bezier.start();
    let p3 = bezier.end();
    let line = Segment::line(p0, p3);

    let mut ts = bezier.start_tangent();
    let mut te = bezier.end_tangent();
    let v = p0 - p3;
    let ts_angle = ts.polar_angle();
    let te_angle = te.polar_angle();

    let eps = params.straight_distance_tolerance;
    let ts_zero = ts.norm() < eps;
    let te_zero = te.norm() < eps;
    let chord_zero = v.norm() < eps;

    if ts_zero && te_zero {
        trace!(depth, "both tangents vanish, emitting line");
        out.push(line);
        return Ok(());
    }

    let r = if te_zero || ts_zero {
        if chord_zero {
            return split(bezier, params, depth, out);
        }
        // Stand in for the missing tangent with the chord direction.
        if te_zero {
            let r = ts.norm() / v.norm() * 2.0;
            te = -(ts + v).unit_or_zero();
            r
        } else {
            let r = v.norm() / (te.norm() * 2.0);
            ts = -(te + v).unit_or_zero();
            r
        }
    } else {
        ts.norm() / te.norm()
    };
    let ts = ts.unit_or_zero();
    let te = te.unit_or_zero();

    let turn = (ts_angle - te_angle).rem_euclid(PI);
    let parallel = turn < params.straight_tolerance || PI - turn < params.straight_tolerance;
    let degenerate = chord_zero || ts.norm() < eps || te.norm() < eps;
    let straight_chord =
        degenerate || 1.0 - (ts.dot(&v) / v.norm()).abs() < params.straight_tolerance;
    if parallel && straight_chord {
        trace!(depth, "tangents parallel to chord, emitting line");
        out.push(line);
        return Ok(());
    }
    if chord_zero {
        return split(bezier, params, depth, out);
    }

    let a = 2.0 * r * (ts.dot(&te) - 1.0);
    let b = 2.0 * v.dot(&(ts * r + te));
    let c = v.dot(&v);
    let Some(beta) = solve_beta(a, b, c)? else {
        return split(bezier, params, depth, out);
    };

    let alpha = beta * r;
    let ab = alpha + beta;
    if ab.abs() < COEFF_EPS {
        return split(bezier, params, depth, out);
    }

    let apex1 = p0 + ts * alpha;
    let apex2 = p3 - te * beta;
    let join = apex1 + (apex2 - apex1) * (alpha / ab);

    let arc1 = arc_from_tangent_apex(
        &p0,
        &apex1,
        &join,
        params.min_arc_radius,
        params.max_center_coordinate,
    );
    let arc2 = arc_from_tangent_apex(
        &join,
        &apex2,
        &p3,
        params.min_arc_radius,
        params.max_center_coordinate,
    );
    let (Some((c1, sweep1)), Some((c2, sweep2))) = (arc1, arc2) else {
        debug!(depth, "no stable arc through join point, emitting line");
        out.push(line);
        return Ok(());
    };
    if (c1 - p0).norm() < params.straight_tolerance
        || (c2 - join).norm() < params.straight_tolerance
    {
        debug!(depth, "arc radius collapsed, emitting line");
        out.push(line);
        return Ok(());
    }

    let first = ArcSegment::new(p0, join, c1, sweep1);
    let second = ArcSegment::new(join, p3, c2, sweep2);
    let deviation = max_deviation(
        bezier,
        &first,
        &second,
        params.sampling_tolerance,
        params.straight_tolerance,
    );

    if deviation > params.biarc_tolerance && depth < params.max_split_depth {
        trace!(depth, deviation, "biarc outside tolerance, subdividing");
        return split(bezier, params, depth, out);
    }
    if deviation > params.biarc_tolerance && params.depth_limit_fallback == DepthLimitFallback::Line
    {
        debug!(depth, deviation, "split depth exhausted, emitting line");
        out.push(line);
        return Ok(());
    }
    if deviation > params.biarc_tolerance {
        debug!(depth, deviation, "split depth exhausted, keeping biarc");
    }

    out.push(finish_arc(first, params.collapse_tolerance));
    out.push(finish_arc(second, params.collapse_tolerance));
    Ok(())
}

/// Halves the curve and fits both halves one level deeper. At the depth
/// limit the curve becomes a single line.
fn split(
    bezier: &CubicBezier,
    params: &BiarcParams,
    depth: u32,
    out: &mut Vec<Segment>,
) -> Result<()> {
    if depth >= params.max_split_depth {
        debug!(depth, "split depth exhausted, emitting line");
        out.push(Segment::line(bezier.start(), bezier.end()));
        return Ok(());
    }
    let (left, right) = bezier.split_half();
    fit(&left, params, depth + 1, out)?;
    fit(&right, params, depth + 1, out)
}

/// Emits `arc` as a line when its chord is too short to define the arc
/// reliably, so numeric noise never turns into a full circle.
fn finish_arc(arc: ArcSegment, collapse_tolerance: f64) -> Segment {
    let chord_sq = (arc.end - arc.start).norm_squared();
    let limit_sq = collapse_tolerance * collapse_tolerance;
    let radius_sq = (arc.start - arc.center).norm_squared();
    if chord_sq < limit_sq || chord_sq < limit_sq * radius_sq / 100.0 {
        Segment::line(arc.start, arc.end)
    } else {
        Segment::Arc(arc)
    }
}

/// Solves `a·β² + b·β + c = 0` for the biarc join parameter.
///
/// Returns `Ok(None)` when the equation has no algebraic solution and the
/// curve should be subdivided instead.
///
/// # Errors
///
/// Returns [`FitError::NegativeDiscriminant`] or [`FitError::SameSignRoots`]
/// when the curve cannot be fitted with this construction.
pub fn solve_beta(a: f64, b: f64, c: f64) -> Result<Option<f64>> {
    let a_small = a.abs() < COEFF_EPS;
    let b_small = b.abs() < COEFF_EPS;
    let c_small = c.abs() < COEFF_EPS;

    if a_small && !b_small {
        return Ok(Some(-c / b));
    }
    if c_small && !a_small {
        return Ok(Some(-b / a));
    }
    if a_small {
        return Ok(None);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Err(FitError::NegativeDiscriminant {
            a,
            b,
            c,
            discriminant,
        }
        .into());
    }
    let sq = discriminant.sqrt();
    let beta1 = (-b - sq) / (2.0 * a);
    let beta2 = (-b + sq) / (2.0 * a);
    if beta1 * beta2 > 0.0 {
        return Err(FitError::SameSignRoots {
            a,
            b,
            c,
            beta1,
            beta2,
        }
        .into());
    }
    Ok(Some(beta1.max(beta2)))
}
