use crate::math::distance_2d::same_point;
use crate::math::Point2;

/// Two segments joined at a shared endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedEndpoint {
    /// The shared endpoint, taken from the first segment.
    pub common: Point2,
    /// The first segment's other endpoint.
    pub other_a: Point2,
    /// The second segment's other endpoint.
    pub other_b: Point2,
}

/// Finds the endpoint shared by segments `a` and `b`, compared with [`same_point`].
///
/// Candidates are tried in a fixed order: `a.0` against `b.0` then `b.1`,
/// then `a.1` against `b.0` then `b.1`. The first match wins.
#[must_use]
pub fn common_point_of_segments(
    a: (Point2, Point2),
    b: (Point2, Point2),
) -> Option<SharedEndpoint> {
    let (a0, a1) = a;
    let (b0, b1) = b;
    let (common, other_a, other_b) = if same_point(&a0, &b0) {
        (a0, a1, b1)
    } else if same_point(&a0, &b1) {
        (a0, a1, b0)
    } else if same_point(&a1, &b0) {
        (a1, a0, b1)
    } else if same_point(&a1, &b1) {
        (a1, a0, b0)
    } else {
        return None;
    };
    Some(SharedEndpoint {
        common,
        other_a,
        other_b,
    })
}
