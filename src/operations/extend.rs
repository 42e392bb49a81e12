use crate::geometry::Circle;
use crate::math::distance_2d::{closer_of, farther_of};
use crate::math::intersect_2d::line_circle_intersect;
use crate::math::Point2;

/// Intersects the line `p0 -> p1` with a circle of radius `distance` about `p1`.
fn hits_around_end(p0: &Point2, p1: &Point2, distance: f64) -> Vec<Point2> {
    line_circle_intersect(p0, p1, &Circle::new(*p1, distance))
}

/// Returns the point on the ray `p0 -> p1` that lies `distance` beyond `p1`.
///
/// Returns `None` if `p0 == p1`, since the segment has no direction.
#[must_use]
pub fn extend_line(p0: &Point2, p1: &Point2, distance: f64) -> Option<Point2> {
    match hits_around_end(p0, p1, distance).as_slice() {
        [] => {
            tracing::trace!(?p0, "extend: zero-length segment");
            None
        }
        [only] => Some(*only),
        [a, b, ..] => Some(farther_of(p0, *a, *b)),
    }
}

/// Returns the point on the segment `p0 -> p1` that lies `distance` short of `p1`.
///
/// A `distance` longer than the segment lands beyond `p0`.
/// Returns `None` if `p0 == p1`, since the segment has no direction.
#[must_use]
pub fn shorten_line(p0: &Point2, p1: &Point2, distance: f64) -> Option<Point2> {
    match hits_around_end(p0, p1, distance).as_slice() {
        [] => {
            tracing::trace!(?p0, "shorten: zero-length segment");
            None
        }
        [only] => Some(*only),
        [a, b, ..] => Some(closer_of(p0, *a, *b)),
    }
}
