use crate::math::Point2;

/// An axis-aligned rectangle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner (`x_min`, `y_min`).
    pub min: Point2,
    /// Maximum corner (`x_max`, `y_max`).
    pub max: Point2,
}

impl Aabb2 {
    /// Creates a box from its bounds.
    #[must_use]
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            min: Point2::new(x_min, y_min),
            max: Point2::new(x_max, y_max),
        }
    }

    /// Returns `true` if `point` is strictly inside the box. Points on an edge are outside.
    #[must_use]
    pub fn contains_strict(&self, point: &Point2) -> bool {
        self.min.x < point.x && point.x < self.max.x && self.min.y < point.y && point.y < self.max.y
    }

    /// Returns the four edges as `(start, end)` pairs: bottom, right, top, left.
    #[must_use]
    pub fn edges(&self) -> [(Point2, Point2); 4] {
        let (x0, y0, x1, y1) = (self.min.x, self.min.y, self.max.x, self.max.y);
        [
            (Point2::new(x0, y0), Point2::new(x1, y0)),
            (Point2::new(x1, y0), Point2::new(x1, y1)),
            (Point2::new(x1, y1), Point2::new(x0, y1)),
            (Point2::new(x0, y1), Point2::new(x0, y0)),
        ]
    }
}
