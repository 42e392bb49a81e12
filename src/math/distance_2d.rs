use super::{Point2, Vector2, TOLERANCE};
use crate::geometry::Cline;

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Returns the bearing from `p0` to `p1` in degrees, within `(-180, 180]`.
#[must_use]
pub fn angle(p0: &Point2, p1: &Point2) -> f64 {
    (p1.y - p0.y).atan2(p1.x - p0.x).to_degrees()
}

/// Returns the point a fraction `factor` of the way from `p1` to `p2`.
///
/// `factor` is not clamped: values outside `[0, 1]` extrapolate along the line.
#[must_use]
pub fn midpoint(p1: &Point2, p2: &Point2, factor: f64) -> Point2 {
    p1 + (p2 - p1) * factor
}

/// Translates `point` by `offset`.
#[must_use]
pub fn add_vector(point: &Point2, offset: &Vector2) -> Point2 {
    point + offset
}

/// Translates `point` by the negation of `offset`.
#[must_use]
pub fn subtract_vector(point: &Point2, offset: &Vector2) -> Point2 {
    point - offset
}

/// Returns `true` if the two points are closer than [`TOLERANCE`].
#[must_use]
pub fn same_point(p1: &Point2, p2: &Point2) -> bool {
    distance(p1, p2) < TOLERANCE
}

/// Returns `true` if `point` lies strictly to the right of the directed ray `p0 -> p1`.
///
/// Points on the ray, on its opposite extension, or coincident with `p0`
/// are not on either side and yield `false`.
#[must_use]
pub fn point_on_right_side(point: &Point2, p0: &Point2, p1: &Point2) -> bool {
    let line_angle = angle(p0, p1);
    let point_angle = angle(p0, point);
    if line_angle >= 0.0 {
        line_angle > point_angle && point_angle > line_angle - 180.0
    } else {
        // Shift both bearings into [0, 360) so the half-turn window does not wrap.
        let line_angle = line_angle + 360.0;
        let point_angle = if point_angle < 0.0 {
            point_angle + 360.0
        } else {
            point_angle
        };
        line_angle > point_angle && point_angle > line_angle - 180.0
    }
}

/// Returns whichever of `a` or `b` is closer to `reference`. Ties pick `b`.
#[must_use]
pub fn closer_of(reference: &Point2, a: Point2, b: Point2) -> Point2 {
    if (a - reference).norm_squared() < (b - reference).norm_squared() {
        a
    } else {
        b
    }
}

/// Returns whichever of `a` or `b` is farther from `reference`. Ties pick `b`.
#[must_use]
pub fn farther_of(reference: &Point2, a: Point2, b: Point2) -> Point2 {
    if (a - reference).norm_squared() > (b - reference).norm_squared() {
        a
    } else {
        b
    }
}

/// Rotates `point` counter-clockwise by `angle` degrees about `center`.
#[must_use]
pub fn rotate_point(point: &Point2, angle: f64, center: &Point2) -> Point2 {
    let rel = point - center;
    let (sin, cos) = angle.to_radians().sin_cos();
    let rotated = Vector2::new(rel.x * cos - rel.y * sin, rel.y * cos + rel.x * sin);
    center + rotated
}

/// Returns the perpendicular distance from `point` to `line`.
///
/// A degenerate line projects every point onto itself, giving 0.
#[must_use]
pub fn point_to_cline_distance(point: &Point2, line: &Cline) -> f64 {
    distance(point, &line.project(point))
}
