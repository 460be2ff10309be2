pub mod arc_2d;
pub mod distance_2d;
pub mod quadratic;
pub mod vector_2d;

pub use vector_2d::{lerp, Vector2Ext};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
