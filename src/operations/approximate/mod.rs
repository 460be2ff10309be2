//! Approximation of cubic Bézier curves by lines and biarcs.

mod biarc;
pub mod deviation;
mod params;

pub use biarc::solve_beta;
pub use params::{BiarcParams, DepthLimitFallback};

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{CubicBezier, Segment};

/// Approximates `bezier` with default parameters and the given deviation
/// tolerance.
///
/// # Errors
///
/// See [`ApproximateBezier::execute`].
pub fn approximate(bezier: &CubicBezier, tolerance: f64) -> Result<Vec<Segment>> {
    ApproximateBezier::new(*bezier, BiarcParams::with_tolerance(tolerance)).execute()
}

/// Approximates one cubic Bézier curve with lines and circular arcs.
pub struct ApproximateBezier {
    bezier: CubicBezier,
    params: BiarcParams,
}

impl ApproximateBezier {
    /// Creates a new `ApproximateBezier` operation.
    #[must_use]
    pub fn new(bezier: CubicBezier, params: BiarcParams) -> Self {
        Self { bezier, params }
    }

    /// Executes the approximation.
    ///
    /// The result runs contiguously from the curve's start point to its end
    /// point: each segment starts exactly where the previous one ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, a control point is
    /// not finite, or the biarc construction has no usable solution.
    pub fn execute(&self) -> Result<Vec<Segment>> {
        self.params.validate()?;
        let mut out = Vec::new();
        approximate_into(&self.bezier, &self.params, &mut out)?;
        debug!(segments = out.len(), "approximated bezier");
        Ok(out)
    }
}

/// Approximates a sequence of cubic Bézier curves, such as the segments of
/// a drawing path, concatenating the results in order.
pub struct ApproximatePath {
    curves: Vec<CubicBezier>,
    params: BiarcParams,
}

impl ApproximatePath {
    /// Creates a new `ApproximatePath` operation.
    #[must_use]
    pub fn new(curves: Vec<CubicBezier>, params: BiarcParams) -> Self {
        Self { curves, params }
    }

    /// Executes the approximation of every curve.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any curve; see
    /// [`ApproximateBezier::execute`].
    pub fn execute(&self) -> Result<Vec<Segment>> {
        self.params.validate()?;
        let mut out = Vec::new();
        for curve in &self.curves {
            approximate_into(curve, &self.params, &mut out)?;
        }
        debug!(
            curves = self.curves.len(),
            segments = out.len(),
            "approximated path"
        );
        Ok(out)
    }
}

fn approximate_into(
    bezier: &CubicBezier,
    params: &BiarcParams,
    out: &mut Vec<Segment>,
) -> Result<()> {
    if !bezier.is_finite() {
        return Err(GeometryError::NonFinite("bezier control points").into());
    }
    if params.split_at_inflections {
        for piece in bezier.split_at_inflections() {
            biarc::fit(&piece, params, 0, out)?;
        }
        Ok(())
    } else {
        biarc::fit(bezier, params, 0, out)
    }
}
