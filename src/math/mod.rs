pub mod distance_2d;
pub mod intersect_2d;
pub mod polar;
pub mod tangent_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Distance below which two points count as the same point.
///
/// Line parallelism is tested against an exact zero instead; the two
/// checks are kept separate.
pub const TOLERANCE: f64 = 1e-6;
