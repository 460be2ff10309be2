use crate::math::arc_2d::arc_point_at;
use crate::math::{Point2, Vector2Ext};

/// A straight output segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// A circular-arc output segment.
///
/// The arc starts at `start`, turns about `center` by the signed `sweep`
/// (radians, positive = counter-clockwise) and ends at `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub start: Point2,
    pub end: Point2,
    pub center: Point2,
    pub sweep: f64,
}

impl ArcSegment {
    /// Creates a new arc segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2, center: Point2, sweep: f64) -> Self {
        Self {
            start,
            end,
            center,
            sweep,
        }
    }

    /// Radius, measured from the center to the start point.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.start - self.center).norm()
    }

    /// Polar angle of the start point about the center.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        (self.start - self.center).polar_angle()
    }

    /// `start_angle() + sweep`, not wrapped.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle() + self.sweep
    }

    /// Returns whether the arc turns counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.sweep > 0.0
    }

    /// Evaluates the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        arc_point_at(&self.center, self.radius(), self.start_angle(), self.sweep, t)
    }

    /// Arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius() * self.sweep.abs()
    }
}

/// One primitive of an approximation result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(LineSegment),
    Arc(ArcSegment),
}

impl Segment {
    /// Creates a line segment.
    #[must_use]
    pub fn line(start: Point2, end: Point2) -> Self {
        Self::Line(LineSegment::new(start, end))
    }

    /// Creates an arc segment.
    #[must_use]
    pub fn arc(start: Point2, end: Point2, center: Point2, sweep: f64) -> Self {
        Self::Arc(ArcSegment::new(start, end, center, sweep))
    }

    /// Start point of the primitive.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Line(l) => l.start,
            Self::Arc(a) => a.start,
        }
    }

    /// End point of the primitive.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Line(l) => l.end,
            Self::Arc(a) => a.end,
        }
    }

    /// Returns whether this is an arc.
    #[must_use]
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Arc(_))
    }

    /// Length of the drawn primitive.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Line(l) => l.length(),
            Self::Arc(a) => a.length(),
        }
    }

    /// Returns the same primitive traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match *self {
            Self::Line(l) => Self::line(l.end, l.start),
            Self::Arc(a) => Self::arc(a.end, a.start, a.center, -a.sweep),
        }
    }
}
