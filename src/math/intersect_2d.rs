use super::distance_2d::{distance, same_point};
use super::Point2;
use crate::geometry::{Aabb2, Circle, Cline};

/// Intersection point of two implicit lines.
///
/// Returns `None` when the lines are parallel or coincident. The test is an
/// exact zero on the determinant, not a tolerance.
#[must_use]
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn cline_cline_intersect(line1: &Cline, line2: &Cline) -> Option<Point2> {
    let Cline { a, b, c } = *line1;
    let Cline { a: d, b: e, c: f } = *line2;
    let k = a * e - b * d;
    if k == 0.0 {
        return None;
    }
    Some(Point2::new((b * f - c * e) / k, (c * d - a * f) / k))
}

/// Intersection points of the infinite line through `p1`, `p2` with a circle.
///
/// Returns two points for a secant, one for a tangent (zero discriminant)
/// and none when the line misses the circle or `p1 == p2` exactly.
/// With two points, the first is the one farther along the `p1 -> p2` direction.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn line_circle_intersect(p1: &Point2, p2: &Point2, circle: &Circle) -> Vec<Point2> {
    let dir = p2 - p1;
    let a = dir.norm_squared();
    if a == 0.0 {
        tracing::trace!(?p1, "line-circle: line direction is degenerate");
        return Vec::new();
    }
    let to_p1 = p1 - circle.center;
    let b = 2.0 * dir.dot(&to_p1);
    let c = to_p1.norm_squared() - circle.radius * circle.radius;
    let q = b * b - 4.0 * a * c;

    if q < 0.0 {
        return Vec::new();
    }
    if q == 0.0 {
        // Tangent: the foot of the perpendicular from the center.
        let u = (circle.center - p1).dot(&dir) / a;
        return vec![p1 + dir * u];
    }
    let root = q.sqrt();
    let u1 = (-b + root) / (2.0 * a);
    let u2 = (-b - root) / (2.0 * a);
    vec![p1 + dir * u1, p1 + dir * u2]
}

/// Intersection points of two circles via the radical line.
///
/// Returns an empty `Vec` when the centers coincide or the circles do not
/// meet, and a single point when the two candidates fall within
/// [`TOLERANCE`](super::TOLERANCE) of each other (tangency).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn circle_circle_intersect(first: &Circle, second: &Circle) -> Vec<Point2> {
    let (x1, y1, r1) = (first.center.x, first.center.y, first.radius);
    let (x2, y2, r2) = (second.center.x, second.center.y, second.radius);
    let dx = x2 - x1;
    let dy = y2 - y1;
    let d_sq = dx * dx + dy * dy;
    if d_sq == 0.0 {
        tracing::trace!(center = ?first.center, "circle-circle: concentric circles");
        return Vec::new();
    }

    let product = ((r1 + r2).powi(2) - d_sq) * (d_sq - (r2 - r1).powi(2));
    if product < 0.0 {
        return Vec::new();
    }
    let q = product.sqrt();

    // Foot of the radical line on the line of centers.
    let along = (r1 * r1 - r2 * r2) / (2.0 * d_sq);
    let mx = (x1 + x2) / 2.0 + dx * along;
    let my = (y1 + y2) / 2.0 + dy * along;
    let hx = dy * q / (2.0 * d_sq);
    let hy = dx * q / (2.0 * d_sq);

    let first_hit = Point2::new(mx + hx, my - hy);
    let second_hit = Point2::new(mx - hx, my + hy);
    if same_point(&first_hit, &second_hit) {
        vec![first_hit]
    } else {
        vec![first_hit, second_hit]
    }
}

/// Points where `line` crosses the edges of `bbox`.
///
/// Each edge is treated as a closed segment. A point shared by two edges
/// (a corner) is reported once; duplicates are detected by exact equality,
/// not by [`same_point`].
#[must_use]
pub fn cline_box_intersect(line: &Cline, bbox: &Aabb2) -> Vec<Point2> {
    let mut hits: Vec<Point2> = Vec::with_capacity(2);
    for (start, end) in bbox.edges() {
        let edge_line = Cline::through_points(&start, &end);
        let Some(pt) = cline_cline_intersect(line, &edge_line) else {
            continue;
        };
        let edge_len = distance(&start, &end);
        if distance(&pt, &start) <= edge_len && distance(&pt, &end) <= edge_len && !hits.contains(&pt)
        {
            hits.push(pt);
        }
    }
    hits
}
