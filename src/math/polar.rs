//! Polar / rectangular coordinate conversion. Angles are in degrees.

use super::Point2;

/// Converts polar coordinates `(r, theta)` to a rectangular point.
///
/// `theta` is in degrees, measured counter-clockwise from the +X axis.
#[must_use]
pub fn polar_to_rect(r: f64, theta: f64) -> Point2 {
    let (sin, cos) = theta.to_radians().sin_cos();
    Point2::new(r * cos, r * sin)
}

/// Converts a rectangular point to polar coordinates `(r, theta)`.
///
/// `theta` is in degrees within `(-180, 180]`. At the origin the angle is
/// whatever `atan2(0, 0)` yields and carries no meaning.
#[must_use]
pub fn rect_to_polar(point: &Point2) -> (f64, f64) {
    let r = point.x.hypot(point.y);
    let theta = point.y.atan2(point.x).to_degrees();
    (r, theta)
}
