use crate::math::distance_2d::{distance, midpoint};
use crate::math::intersect_2d::cline_cline_intersect;
use crate::math::Point2;

use super::Cline;

/// A circle in the plane, given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center of the circle.
    pub center: Point2,
    /// Radius; expected to be non-negative.
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the circle passing through three points (the circumcircle).
    ///
    /// The center is where the perpendicular bisectors of chords `p1-p2`
    /// and `p2-p3` meet. Returns `None` when the points are collinear, or
    /// when `p1 == p2` or `p2 == p3` exactly, since the bisectors are then
    /// parallel or degenerate.
    #[must_use]
    pub fn through_points(p1: &Point2, p2: &Point2, p3: &Point2) -> Option<Self> {
        let chord1 = Cline::through_points(p1, p2);
        let chord2 = Cline::through_points(p2, p3);
        let bisector1 = chord1.perpendicular_through(&midpoint(p1, p2, 0.5));
        let bisector2 = chord2.perpendicular_through(&midpoint(p2, p3, 0.5));
        let Some(center) = cline_cline_intersect(&bisector1, &bisector2) else {
            tracing::trace!(?p1, ?p2, ?p3, "circumcircle: points are collinear");
            return None;
        };
        Some(Self {
            center,
            radius: distance(p1, &center),
        })
    }

    /// Returns `true` if `point` lies strictly outside the circle.
    #[must_use]
    pub fn is_outside(&self, point: &Point2) -> bool {
        distance(&self.center, point) > self.radius
    }
}
