use crate::geometry::Cline;
use crate::math::distance_2d::distance;
use crate::math::intersect_2d::cline_cline_intersect;
use crate::math::Point2;

/// A fillet arc fitted into a corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fillet {
    /// Center of the fillet arc.
    pub center: Point2,
    /// Point where the arc touches the edge `vertex -> end1`.
    pub tangent1: Point2,
    /// Point where the arc touches the edge `vertex -> end2`.
    pub tangent2: Point2,
}

/// Of the two offsets of `edge` at `radius`, picks the one on the same side
/// as `opposite`, i.e. facing into the corner.
fn interior_offset(edge: &Cline, radius: f64, opposite: &Point2) -> Cline {
    let (first, second) = edge.offset_pair(radius);
    let d_first = distance(&first.project(opposite), opposite);
    let d_second = distance(&second.project(opposite), opposite);
    if d_first <= d_second {
        first
    } else {
        second
    }
}

/// Fits a fillet of `radius` into the corner at `vertex` between the edges
/// `vertex -> end1` and `vertex -> end2`.
///
/// Each edge line is offset by `radius` toward the other edge's far end;
/// the offsets meet at the fillet center, and the center projected back
/// onto each edge line gives the tangent points.
///
/// Returns `None` when the two edges are collinear (or an edge has zero
/// length), since the interior offsets never meet.
#[must_use]
pub fn find_fillet_points(radius: f64, vertex: &Point2, end1: &Point2, end2: &Point2) -> Option<Fillet> {
    let edge1 = Cline::through_points(vertex, end1);
    let edge2 = Cline::through_points(vertex, end2);

    let inner1 = interior_offset(&edge1, radius, end2);
    let inner2 = interior_offset(&edge2, radius, end1);

    let Some(center) = cline_cline_intersect(&inner1, &inner2) else {
        tracing::trace!(?vertex, ?end1, ?end2, radius, "fillet: edges are collinear");
        return None;
    };
    Some(Fillet {
        center,
        tangent1: edge1.project(&center),
        tangent2: edge2.project(&center),
    })
}
