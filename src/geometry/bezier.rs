use crate::error::{GeometryError, Result};
use crate::math::quadratic::solve_quadratic_real;
use crate::math::{lerp, Point2, Vector2};

/// A planar cubic Bézier curve.
///
/// Control points are `[P0, P1, P2, P3]`: start, start-tangent control,
/// end-tangent control, end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    points: [Point2; 4],
}

impl CubicBezier {
    /// Creates a curve from its four control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Returns the control points.
    #[must_use]
    pub fn points(&self) -> &[Point2; 4] {
        &self.points
    }

    /// Returns the start point `P0`.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.points[0]
    }

    /// Returns the end point `P3`.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.points[3]
    }

    /// Tangent leaving the start point, `P1 - P0`.
    #[must_use]
    pub fn start_tangent(&self) -> Vector2 {
        self.points[1] - self.points[0]
    }

    /// Tangent arriving at the end point, `P3 - P2`.
    #[must_use]
    pub fn end_tangent(&self) -> Vector2 {
        self.points[3] - self.points[2]
    }

    /// Returns whether every control point has finite coordinates.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Evaluates the curve at parameter `t` using the Bernstein form.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point2::from(p0.coords * b0 + p1.coords * b1 + p2.coords * b2 + p3.coords * b3)
    }

    /// Splits the curve at `t` using De Casteljau's construction.
    ///
    /// The two halves retrace the original exactly and meet at
    /// `evaluate(t)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] unless `0 < t < 1`.
    pub fn split(&self, t: f64) -> Result<(Self, Self)> {
        if !(t > 0.0 && t < 1.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(self.split_unchecked(t))
    }

    /// Splits the curve at its parameter midpoint.
    #[must_use]
    pub fn split_half(&self) -> (Self, Self) {
        self.split_unchecked(0.5)
    }

    fn split_unchecked(&self, t: f64) -> (Self, Self) {
        let [p0, p1, p2, p3] = self.points;
        let p01 = lerp(&p0, &p1, t);
        let p12 = lerp(&p1, &p2, t);
        let p23 = lerp(&p2, &p3, t);
        let p012 = lerp(&p01, &p12, t);
        let p123 = lerp(&p12, &p23, t);
        let mid = lerp(&p012, &p123, t);
        (
            Self::new(p0, p01, p012, mid),
            Self::new(mid, p123, p23, p3),
        )
    }

    /// Parameters in `(0, 1)` where the curvature changes sign, ascending.
    #[must_use]
    pub fn inflections(&self) -> Vec<f64> {
        let [p0, p1, p2, p3] = self.points;
        let a = p1 - p0;
        let b = p2 - p1 - a;
        let c = p3 - p2 - a - b * 2.0;

        // a×b + t·(a×c) + t²·(b×c) = 0
        solve_quadratic_real(b.perp(&c), a.perp(&c), a.perp(&b))
            .into_iter()
            .filter(|t| *t > 0.0 && *t < 1.0)
            .collect()
    }

    /// Cuts the curve at its inflection points, so that each piece turns in
    /// one direction only.
    #[must_use]
    pub fn split_at_inflections(&self) -> Vec<Self> {
        let mut pieces = Vec::new();
        let mut rest = *self;
        let mut consumed = 0.0;
        for t in self.inflections() {
            // Re-map onto the remaining piece's own parameter range.
            let local = (t - consumed) / (1.0 - consumed);
            if local <= 0.0 || local >= 1.0 {
                continue;
            }
            let (head, tail) = rest.split_unchecked(local);
            pieces.push(head);
            rest = tail;
            consumed = t;
        }
        pieces.push(rest);
        pieces
    }

    /// Returns the same curve traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let [p0, p1, p2, p3] = self.points;
        Self::new(p3, p2, p1, p0)
    }
}

impl From<[Point2; 4]> for CubicBezier {
    fn from(points: [Point2; 4]) -> Self {
        Self { points }
    }
}

impl From<[[f64; 2]; 4]> for CubicBezier {
    fn from(points: [[f64; 2]; 4]) -> Self {
        Self {
            points: points.map(|[x, y]| Point2::new(x, y)),
        }
    }
}
