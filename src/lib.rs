pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, Result};
pub use geometry::{Aabb2, Circle, Cline};
pub use math::{Point2, Vector2, TOLERANCE};
