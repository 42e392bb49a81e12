//! Tangent lines to one or two circles.
//!
//! These constructions go through `asin`, so inputs outside its domain
//! (a point inside the circle, one circle nested in the other) are errors
//! rather than empty results.
use std::f64::consts::FRAC_PI_2;

use super::distance_2d::{angle, distance};
use super::{Point2, Vector2};
use crate::error::{GeometryError, Result};
use crate::geometry::Circle;

/// Point on `circle` at `angle` radians from the +X axis.
fn point_on_circle(circle: &Circle, angle: f64) -> Point2 {
    let (sin, cos) = angle.sin_cos();
    circle.center + Vector2::new(cos, sin) * circle.radius
}

fn checked_asin(parameter: &'static str, value: f64) -> Result<f64> {
    // Also rejects NaN.
    if !(-1.0..=1.0).contains(&value) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: -1.0,
            max: 1.0,
        });
    }
    Ok(value.asin())
}

/// Returns the two points of tangency on `circle` for lines through `point`.
///
/// The first point is counter-clockwise from the bearing `center -> point`,
/// the second clockwise. A point exactly on the circle yields itself twice.
///
/// # Errors
///
/// Returns [`GeometryError::ParameterOutOfRange`] if `point` lies inside
/// the circle, where no tangent exists.
pub fn tangent_points_from_point(circle: &Circle, point: &Point2) -> Result<(Point2, Point2)> {
    let d = distance(&circle.center, point);
    let theta = checked_asin("radius / distance", circle.radius / d)?;
    let bearing = angle(&circle.center, point).to_radians();
    Ok((
        point_on_circle(circle, bearing + FRAC_PI_2 - theta),
        point_on_circle(circle, bearing - FRAC_PI_2 + theta),
    ))
}

/// Returns the tangent points of one common external tangent of two circles,
/// as `(point on first, point on second)`.
///
/// Of the two external tangents, this is the one on the right-hand side
/// when travelling from `first.center` toward `second.center`. Swapping the
/// arguments therefore selects the other tangent line. Use
/// [`external_tangent_point_pairs`] to get both.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the centers coincide and
/// [`GeometryError::ParameterOutOfRange`] if one circle lies inside the
/// other, where no external tangent exists.
pub fn external_tangent_points(first: &Circle, second: &Circle) -> Result<(Point2, Point2)> {
    let [right, _] = external_tangent_point_pairs(first, second)?;
    Ok(right)
}

/// Returns both common external tangents of two circles.
///
/// Element 0 is the right-hand tangent (see [`external_tangent_points`]),
/// element 1 the left-hand one. Each is `(point on first, point on second)`.
///
/// # Errors
///
/// Same conditions as [`external_tangent_points`].
pub fn external_tangent_point_pairs(
    first: &Circle,
    second: &Circle,
) -> Result<[(Point2, Point2); 2]> {
    let d = distance(&first.center, &second.center);
    if d < f64::MIN_POSITIVE {
        tracing::trace!(center = ?first.center, "external tangent: coincident centers");
        return Err(GeometryError::Degenerate(
            "external tangent of circles with coincident centers".into(),
        ));
    }
    // Angle between the line of centers and the tangent line.
    let theta = checked_asin("radius difference / distance", (second.radius - first.radius) / d)?;
    let bearing = angle(&second.center, &first.center).to_radians();

    let right = bearing + FRAC_PI_2 - theta;
    let left = bearing - FRAC_PI_2 + theta;
    Ok([
        (point_on_circle(first, right), point_on_circle(second, right)),
        (point_on_circle(first, left), point_on_circle(second, left)),
    ])
}
