use super::*;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

const EPS: f64 = 1e-9;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}

fn assert_points(polygon: &StarPolygon, expected: &[Point]) {
    assert_eq!(polygon.vertices().len(), expected.len(), "vertex count");
    for (i, (got, want)) in polygon.vertices().iter().zip(expected).enumerate() {
        assert!(close(*got, *want), "vertex {i}: got {got}, want {want}");
    }
}

#[test]
fn point_arithmetic_basics() {
    assert_eq!(Point::new(1.0, 2.0).plus(Point::new(3.0, 4.0)), Point::new(4.0, 6.0));
    assert_eq!(Point::new(1.0, 2.0).multiply(3.0), Point::new(3.0, 6.0));
    assert_eq!(Point::new(3.0, 4.0).length(), 5.0);
    assert_eq!(Point::ZERO.length_squared_to(Point::new(3.0, 4.0)), 25.0);
    assert_eq!(Point::ZERO.length_to(Point::new(3.0, 4.0)), 5.0);
    assert_eq!(-Point::X, Point::X_MINUS);
    assert_eq!(Point::X.cross_product(Point::Y), 1.0);
    assert_eq!(Point::X.dot_product(Point::Y), 0.0);
}

#[test]
fn point_display_rounds_to_two_decimals() {
    assert_eq!(Point::new(1.234, -0.5).to_string(), "(1.23, -0.5)");
    let line = Line::new(Point::ZERO, Point::new(2.0, 3.456));
    assert_eq!(line.to_string(), "(0, 0) - (2, 3.46)");
}

#[test]
fn angle_from_degenerate_inputs_is_zero() {
    let p = Point::new(0.3, -2.0);
    assert_eq!(p.angle_from(p), 0.0);
    assert_eq!(Point::ZERO.angle_from(p), 0.0);
    assert_eq!(p.angle_from(Point::ZERO), 0.0);
    assert_eq!(Point::ZERO.angle(), 0.0);
}

#[test]
fn angle_from_axis_quadrants() {
    assert!((Point::X.angle_from(Point::Y) / PI - 1.5).abs() < EPS);
    assert!((Point::X.angle_from(Point::Y_MINUS) / PI - 0.5).abs() < EPS);
    assert!((Point::X.angle_from(Point::X_MINUS) / PI - 1.0).abs() < EPS);
    assert!((Point::Y.angle() - FRAC_PI_2).abs() < EPS);
}

#[test]
fn angle_from_nearly_antiparallel_stays_finite() {
    let a = Point::new(1.0, 1e-17);
    let b = Point::new(-1.0, 0.0);
    let theta = a.angle_from(b);
    assert!(theta.is_finite());
    assert!((theta - PI).abs() < 1e-9);
}

#[test]
fn rotate_quarter_and_full_turn() {
    assert!(close(Point::X.rotate(TAU), Point::X));
    assert!(close(Point::X.rotate(FRAC_PI_2), Point::Y));
    assert!(close(Point::Y.rotate(FRAC_PI_2), Point::X_MINUS));
}

#[test]
fn polygon_has_expected_vertices() {
    assert_points(&StarPolygon::new(Point::ZERO, 1.0, 0), &[]);
    assert_points(&StarPolygon::new(Point::ZERO, 1.0, 1), &[Point::Y]);
    let square = [Point::Y, Point::X, Point::Y_MINUS, Point::X_MINUS];
    let shifted_x: Vec<_> = square.iter().map(|p| *p * 2.0 + Point::X).collect();
    assert_points(&StarPolygon::new(Point::X, 2.0, 4), &shifted_x);
    let shifted_y: Vec<_> = square.iter().map(|p| *p * 2.0 + Point::Y).collect();
    assert_points(&StarPolygon::new(Point::Y, 2.0, 4), &shifted_y);
}

#[test]
fn polygon_honors_start_angle() {
    let p = StarPolygon::with_start_angle(Point::ZERO, 1.0, 4, 0.0);
    assert_points(&p, &[Point::X, Point::Y_MINUS, Point::X_MINUS, Point::Y]);
}

#[test]
fn chord_circle_count_is_half_vertex_count() {
    for (n, expected) in [(0, 0), (1, 0), (3, 1), (4, 2), (5, 2), (6, 3), (7, 3), (8, 4)] {
        assert_eq!(StarPolygon::new(Point::ZERO, 1.0, n).chord_circle_count(), expected);
    }
}

#[test]
fn circles_have_expected_lines() {
    let polygon = StarPolygon::new(Point::ZERO, 1.0, 4);
    let v = polygon.vertices();
    let c0: Vec<Line> = polygon.circle(0).unwrap().lines().collect();
    assert_eq!(
        c0,
        vec![
            Line::new(v[0], v[2]),
            Line::new(v[1], v[3]),
            Line::new(v[2], v[0]),
            Line::new(v[3], v[1]),
        ]
    );
    let c1: Vec<Line> = polygon.circle(1).unwrap().into_iter().collect();
    assert_eq!(
        c1,
        vec![
            Line::new(v[0], v[1]),
            Line::new(v[1], v[2]),
            Line::new(v[2], v[3]),
            Line::new(v[3], v[0]),
        ]
    );
    assert!(polygon.circle(2).is_none());
    assert!(polygon.circle(usize::MAX).is_none());
}

#[test]
fn circle_lines_restart_on_each_call() {
    let polygon = StarPolygon::new(Point::ZERO, 1.0, 9);
    let circle = polygon.circle(1).unwrap();
    let mut first = circle.lines();
    first.next();
    assert_eq!(first.len(), 8);
    assert_eq!(circle.lines().len(), 9);
    assert_eq!(circle.lines().collect::<Vec<_>>(), (&circle).into_iter().collect::<Vec<_>>());
}

#[test]
fn circles_iterate_default_and_subset() {
    let polygon = StarPolygon::new(Point::ZERO, 1.0, 4);
    let all: Vec<_> = polygon.circles(0, None).collect();
    assert_eq!(all, vec![polygon.circle(0).unwrap(), polygon.circle(1).unwrap()]);

    let polygon = StarPolygon::new(Point::ZERO, 1.0, 10);
    let subset: Vec<_> = polygon.circles(1, Some(3)).map(|c| c.index()).collect();
    assert_eq!(subset, vec![1, 2, 3]);
    assert_eq!(polygon.circles(3, Some(2)).count(), 0);
}

#[test]
fn circles_window_is_clamped_and_may_wrap() {
    let polygon = StarPolygon::new(Point::ZERO, 1.0, 10);
    // end − start > count clamps to `count` circles.
    let clamped: Vec<_> = polygon.circles(2, Some(100)).map(|c| c.index()).collect();
    assert_eq!(clamped, vec![2, 3, 4, 5, 6]);
    // Past the last circle, skips keep decreasing modulo n.
    let beyond: Vec<_> = polygon.circles(4, Some(7)).map(|c| c.skip()).collect();
    assert_eq!(beyond, vec![1, 0, 9, 8]);
    let wrapped = polygon.circles(6, Some(6)).next().unwrap();
    assert_eq!(wrapped.lines().count(), 10);
}

#[test]
fn circles_window_near_usize_max_saturates() {
    let polygon = StarPolygon::new(Point::ZERO, 1.0, 10);
    let window: Vec<_> = polygon.circles(usize::MAX - 1, None).map(|c| c.index()).collect();
    assert_eq!(window, vec![usize::MAX - 1]);
}

#[test]
fn empty_polygon_has_no_circles() {
    let polygon = StarPolygon::new(Point::ZERO, 1.0, 0);
    assert_eq!(polygon.circles(0, None).count(), 0);
    assert!(polygon.circle(0).is_none());
    assert_eq!(polygon.calculate_circle_radius(0), 1.0);
}

#[test]
fn circle_radius_follows_half_angle_sine() {
    let polygon = StarPolygon::new(Point::ZERO, 2.0, 12);
    let step = TAU / 12.0;
    assert!((polygon.calculate_circle_radius(3) - 2.0 * (step * 1.5).sin()).abs() < EPS);
    assert_eq!(polygon.calculate_circle_radius(6), 2.0);
    assert_eq!(polygon.calculate_circle_radius(40), 2.0);
}

#[test]
fn scale_about_pivot() {
    let polygon = StarPolygon::with_start_angle(Point::new(3.0, 1.0), 2.0, 7, 0.4);
    let pivot = Point::new(-1.0, 5.0);
    let scaled = polygon.scale(pivot, 2.5);
    assert!((scaled.radius() - 5.0).abs() < EPS);
    assert!(close(scaled.center(), pivot + (polygon.center() - pivot) * 2.5));
    assert_eq!(scaled.vertex_count(), 7);
    assert!((scaled.start_angle() - 0.4).abs() < EPS);
    // original untouched
    assert_eq!(polygon.radius(), 2.0);
}

#[test]
fn transforms_hold_other_fields() {
    let polygon = StarPolygon::with_start_angle(Point::new(1.0, 1.0), 3.0, 5, 0.0);
    let moved = polygon.move_by(Point::new(2.0, -1.0));
    assert_eq!(moved.center(), Point::new(3.0, 0.0));
    assert_eq!(moved.radius(), 3.0);
    let moved_to = polygon.move_to(Point::ZERO);
    assert_eq!(moved_to.center(), Point::ZERO);
    let resized = polygon.change_radius_to(0.5);
    assert_eq!((resized.radius(), resized.center()), (0.5, polygon.center()));
    let rotated = polygon.rotate(FRAC_PI_2);
    assert_eq!(rotated.start_angle(), FRAC_PI_2);
    assert!(close(rotated.vertices()[0], Point::new(1.0, 4.0)));
}

proptest! {
    #[test]
    fn plus_minus_roundtrip(ax in -1e3..1e3f64, ay in -1e3..1e3f64, bx in -1e3..1e3f64, by in -1e3..1e3f64) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        let back = a.plus(b).minus(b);
        prop_assert!((back.x - a.x).abs() < 1e-9 && (back.y - a.y).abs() < 1e-9);
        prop_assert_eq!(a.multiply(1.0), a);
    }

    #[test]
    fn angle_from_rotates_other_onto_self(
        x in -10.0..10.0f64,
        y in -10.0..10.0f64,
        theta in 0.0..TAU,
    ) {
        let other = Point::new(x, y);
        prop_assume!(other.length() > 1e-3);
        let this = other.rotate(theta) * 1.7;
        let got = this.angle_from(other);
        prop_assert!((0.0..TAU).contains(&got) || (got - TAU).abs() < 1e-9);
        let mapped = other.rotate(got).unit();
        prop_assert!(close(mapped, this.unit()));
    }

    #[test]
    fn vertices_sit_on_circle(cx in -5.0..5.0f64, cy in -5.0..5.0f64, r in 0.1..10.0f64, n in 1usize..64) {
        let center = Point::new(cx, cy);
        let polygon = StarPolygon::new(center, r, n);
        for v in polygon.vertices() {
            prop_assert!((v.length_to(center) - r).abs() < 1e-9);
        }
    }
}
