use crate::error::{FitError, Result};

/// What to emit for a curve that is still outside tolerance at the maximum
/// split depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthLimitFallback {
    /// A single line from the curve's start to its end.
    ///
    /// The line replaces every segment the curve would have produced, so a
    /// tighter tolerance that pushes a curve past the depth limit can yield
    /// fewer segments than a looser one. Use [`DepthLimitFallback::Biarc`]
    /// when the segment count must grow with the tolerance.
    #[default]
    Line,
    /// The out-of-tolerance biarc. Segment counts never drop as the
    /// tolerance tightens.
    Biarc,
}

/// Parameters controlling biarc approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiarcParams {
    /// Angular and scalar near-zero threshold (parallel tangents, collapsed
    /// arcs, arc boundary slack).
    pub straight_tolerance: f64,
    /// Tangent and chord lengths below this are treated as zero.
    pub straight_distance_tolerance: f64,
    /// Smallest radius a fitted arc may have.
    pub min_arc_radius: f64,
    /// Largest acceptable deviation between curve and biarc before the curve
    /// is subdivided.
    pub biarc_tolerance: f64,
    /// Maximum number of halvings per input curve.
    pub max_split_depth: u32,
    /// Two successive sampling passes agreeing within this value end the
    /// deviation estimate.
    pub sampling_tolerance: f64,
    /// Arc centers with a coordinate beyond this magnitude are rejected as
    /// numerically unstable.
    pub max_center_coordinate: f64,
    /// Accepted arcs with a chord below this length (absolute, or relative
    /// to a tenth of the radius) are emitted as lines.
    pub collapse_tolerance: f64,
    /// Cut curves at their inflection points before fitting.
    pub split_at_inflections: bool,
    /// Output for curves the depth limit leaves unresolved.
    pub depth_limit_fallback: DepthLimitFallback,
}

impl Default for BiarcParams {
    fn default() -> Self {
        Self {
            straight_tolerance: 1e-4,
            straight_distance_tolerance: 1e-4,
            min_arc_radius: 0.1,
            biarc_tolerance: 0.1,
            max_split_depth: 4,
            sampling_tolerance: 0.01,
            max_center_coordinate: 1e6,
            collapse_tolerance: 1e-5,
            split_at_inflections: false,
            depth_limit_fallback: DepthLimitFallback::Line,
        }
    }
}

impl BiarcParams {
    /// Default parameters with the given deviation tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            biarc_tolerance: tolerance,
            ..Self::default()
        }
    }

    /// Sets the largest accepted curve-to-biarc deviation.
    #[must_use]
    pub fn biarc_tolerance(mut self, tolerance: f64) -> Self {
        self.biarc_tolerance = tolerance;
        self
    }

    /// Sets how many times one input curve may be halved.
    #[must_use]
    pub fn max_split_depth(mut self, depth: u32) -> Self {
        self.max_split_depth = depth;
        self
    }

    /// Sets the smallest radius a fitted arc may have.
    #[must_use]
    pub fn min_arc_radius(mut self, radius: f64) -> Self {
        self.min_arc_radius = radius;
        self
    }

    /// Sets the angular and scalar near-zero threshold.
    #[must_use]
    pub fn straight_tolerance(mut self, tolerance: f64) -> Self {
        self.straight_tolerance = tolerance;
        self
    }

    /// Sets the length below which tangents and chords count as zero.
    #[must_use]
    pub fn straight_distance_tolerance(mut self, tolerance: f64) -> Self {
        self.straight_distance_tolerance = tolerance;
        self
    }

    /// Sets the agreement needed between successive deviation passes.
    #[must_use]
    pub fn sampling_tolerance(mut self, tolerance: f64) -> Self {
        self.sampling_tolerance = tolerance;
        self
    }

    /// Enables cutting curves at their inflection points before fitting.
    #[must_use]
    pub fn split_at_inflections(mut self, enabled: bool) -> Self {
        self.split_at_inflections = enabled;
        self
    }

    /// Sets the output for curves still out of tolerance at the depth limit.
    #[must_use]
    pub fn depth_limit_fallback(mut self, fallback: DepthLimitFallback) -> Self {
        self.depth_limit_fallback = fallback;
        self
    }

    /// Upper bound on the number of segments produced for one input curve.
    #[must_use]
    pub fn max_segments_per_curve(&self) -> usize {
        2usize.saturating_mul(1usize.checked_shl(self.max_split_depth).unwrap_or(usize::MAX))
    }

    /// Checks that every tolerance is finite and usable.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidParameters`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("biarc_tolerance", self.biarc_tolerance),
            ("sampling_tolerance", self.sampling_tolerance),
            ("max_center_coordinate", self.max_center_coordinate),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FitError::InvalidParameters(format!(
                    "{name} must be finite and positive, got {value}"
                ))
                .into());
            }
        }

        let non_negative = [
            ("straight_tolerance", self.straight_tolerance),
            ("straight_distance_tolerance", self.straight_distance_tolerance),
            ("min_arc_radius", self.min_arc_radius),
            ("collapse_tolerance", self.collapse_tolerance),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FitError::InvalidParameters(format!(
                    "{name} must be finite and non-negative, got {value}"
                ))
                .into());
            }
        }

        // 2·2^depth segments must stay addressable.
        if self.max_split_depth >= usize::BITS - 1 {
            return Err(FitError::InvalidParameters(format!(
                "max_split_depth {} is too large",
                self.max_split_depth
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = BiarcParams::default();
        assert!((p.straight_tolerance - 1e-4).abs() < 1e-15);
        assert!((p.straight_distance_tolerance - 1e-4).abs() < 1e-15);
        assert!((p.min_arc_radius - 0.1).abs() < 1e-15);
        assert!((p.biarc_tolerance - 0.1).abs() < 1e-15);
        assert_eq!(p.max_split_depth, 4);
        assert_eq!(p.max_segments_per_curve(), 32);
        assert_eq!(p.depth_limit_fallback, DepthLimitFallback::Line);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn builder_setters() {
        let p = BiarcParams::with_tolerance(0.01)
            .max_split_depth(6)
            .min_arc_radius(0.5)
            .split_at_inflections(true)
            .straight_tolerance(1e-6)
            .straight_distance_tolerance(1e-7)
            .sampling_tolerance(0.001)
            .depth_limit_fallback(DepthLimitFallback::Biarc)
            .biarc_tolerance(0.02);
        assert!((p.biarc_tolerance - 0.02).abs() < 1e-15);
        assert!((p.straight_tolerance - 1e-6).abs() < 1e-15);
        assert!((p.straight_distance_tolerance - 1e-7).abs() < 1e-15);
        assert!((p.sampling_tolerance - 0.001).abs() < 1e-15);
        assert_eq!(p.depth_limit_fallback, DepthLimitFallback::Biarc);
        assert_eq!(p.max_split_depth, 6);
        assert_eq!(p.max_segments_per_curve(), 128);
        assert!(p.split_at_inflections);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(BiarcParams::with_tolerance(0.0).validate().is_err());
        assert!(BiarcParams::with_tolerance(f64::NAN).validate().is_err());
        assert!(BiarcParams::default().min_arc_radius(-1.0).validate().is_err());
        assert!(BiarcParams::default().sampling_tolerance(f64::INFINITY).validate().is_err());
        assert!(BiarcParams::default().max_split_depth(200).validate().is_err());
    }
}
