pub mod bezier;
pub mod segment;

pub use bezier::CubicBezier;
pub use segment::{ArcSegment, LineSegment, Segment};
