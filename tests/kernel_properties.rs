#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use planimetry::math::distance_2d::{distance, rotate_point, same_point};
use planimetry::math::intersect_2d::{circle_circle_intersect, cline_cline_intersect, line_circle_intersect};
use planimetry::math::polar::{polar_to_rect, rect_to_polar};
use planimetry::math::tangent_2d::tangent_points_from_point;
use planimetry::operations::{extend_line, find_fillet_points, shorten_line};
use planimetry::{Circle, Cline, GeometryError, Point2};

/// Installs a `RUST_LOG`-driven subscriber so trace events from empty
/// results show up with `RUST_LOG=planimetry=trace cargo test`.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

#[test]
fn polar_round_trip_over_range() {
    init_tracing();
    for r in [0.5, 1.0, 3.0, 250.0] {
        let mut theta = -179.0;
        while theta <= 180.0 {
            let (r2, theta2) = rect_to_polar(&polar_to_rect(r, theta));
            assert_abs_diff_eq!(r2, r, epsilon = 1e-9);
            assert_abs_diff_eq!(theta2, theta, epsilon = 1e-9);
            theta += 17.0;
        }
    }
}

#[test]
fn intersection_is_symmetric() {
    init_tracing();
    let l1 = Cline::through_points(&p(-3.0, 1.0), &p(4.0, 6.0));
    let l2 = Cline::at_angle(&p(2.0, -2.0), 110.0);
    let a = cline_cline_intersect(&l1, &l2).unwrap();
    let b = cline_cline_intersect(&l2, &l1).unwrap();
    assert_abs_diff_eq!(a, b, epsilon = 1e-12);
}

#[test]
fn projection_is_idempotent() {
    init_tracing();
    let line = Cline::through_points(&p(1.0, -4.0), &p(-2.0, 9.0));
    let once = line.project(&p(12.0, 3.0));
    assert_abs_diff_eq!(line.project(&once), once, epsilon = 1e-9);
}

#[test]
fn degenerate_inputs_give_no_result() {
    init_tracing();
    let line = Cline::new(1.0, -2.0, 3.0);
    assert!(cline_cline_intersect(&line, &line).is_none());
    assert!(cline_cline_intersect(&line, &line.parallel_through(&p(5.0, 5.0))).is_none());
    assert!(Circle::through_points(&p(0.0, 0.0), &p(2.0, 1.0), &p(4.0, 2.0)).is_none());
    let far_circle = Circle::new(p(0.0, 10.0), 3.0);
    assert!(line_circle_intersect(&p(-1.0, 0.0), &p(1.0, 0.0), &far_circle).is_empty());
}

#[test]
fn fillet_in_square_corner() {
    init_tracing();
    let vertex = p(0.0, 0.0);
    let end1 = p(10.0, 0.0);
    let end2 = p(0.0, 10.0);
    let fillet = find_fillet_points(2.0, &vertex, &end1, &end2).unwrap();

    let bisector = Cline::angle_bisector(&vertex, &end1, &end2, 0.5);
    assert_abs_diff_eq!(bisector.eval(&fillet.center), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(distance(&vertex, &fillet.center), 2.0 * 2.0_f64.sqrt(), epsilon = 1e-9);

    assert_abs_diff_eq!(distance(&fillet.center, &fillet.tangent1), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(distance(&fillet.center, &fillet.tangent2), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(Cline::through_points(&vertex, &end1).eval(&fillet.tangent1), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(Cline::through_points(&vertex, &end2).eval(&fillet.tangent2), 0.0, epsilon = 1e-9);
}

#[test]
fn fillet_survives_rotation() {
    init_tracing();
    let center = p(3.0, -2.0);
    let rot = |pt: Point2| rotate_point(&pt, 37.0, &center);
    let base = find_fillet_points(1.5, &p(0.0, 0.0), &p(8.0, 0.0), &p(2.0, 6.0)).unwrap();
    let turned = find_fillet_points(1.5, &rot(p(0.0, 0.0)), &rot(p(8.0, 0.0)), &rot(p(2.0, 6.0))).unwrap();
    assert_abs_diff_eq!(rot(base.center), turned.center, epsilon = 1e-9);
    assert_abs_diff_eq!(rot(base.tangent1), turned.tangent1, epsilon = 1e-9);
}

#[test]
fn circle_intersection_counts() {
    init_tracing();
    let left = |r| Circle::new(p(0.0, 0.0), r);
    let right = |r| Circle::new(p(10.0, 0.0), r);

    let two = circle_circle_intersect(&left(6.0), &right(6.0));
    assert_eq!(two.len(), 2);
    // Mirror images across the line of centers.
    assert_abs_diff_eq!(two[0].x, two[1].x, epsilon = 1e-12);
    assert_abs_diff_eq!(two[0].y, -two[1].y, epsilon = 1e-12);

    assert!(circle_circle_intersect(&left(4.0), &right(4.0)).is_empty());
    assert_eq!(circle_circle_intersect(&left(5.0), &right(5.0)).len(), 1);
}

#[test]
fn same_point_boundary() {
    assert!(same_point(&p(0.0, 0.0), &p(0.0, 0.000_000_5)));
    assert!(!same_point(&p(0.0, 0.0), &p(0.0, 0.001)));
}

#[test]
fn extend_and_shorten() {
    init_tracing();
    assert_abs_diff_eq!(extend_line(&p(0.0, 0.0), &p(1.0, 0.0), 5.0).unwrap(), p(6.0, 0.0), epsilon = 1e-9);
    assert_abs_diff_eq!(shorten_line(&p(0.0, 0.0), &p(10.0, 0.0), 3.0).unwrap(), p(7.0, 0.0), epsilon = 1e-9);
}

#[test]
fn tangent_from_inside_is_an_error_not_empty() {
    init_tracing();
    let result = tangent_points_from_point(&Circle::new(p(0.0, 0.0), 2.0), &p(0.5, 0.5));
    assert!(matches!(result, Err(GeometryError::ParameterOutOfRange { .. })));
}
