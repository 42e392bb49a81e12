mod aabb;
mod circle;
mod cline;

pub use aabb::Aabb2;
pub use circle::Circle;
pub use cline::Cline;
