pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{BiarcError, Result};
pub use geometry::{ArcSegment, CubicBezier, LineSegment, Segment};
pub use operations::{
    approximate, ApproximateBezier, ApproximatePath, BiarcParams, DepthLimitFallback,
};
