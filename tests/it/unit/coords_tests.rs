//! Coordinate conversion tests - round trips and axis orientation.

use polysketch::input::coords::CoordinateConverter;
use polysketch::{ScreenPoint, Vertex, Viewport};

const TOLERANCE: f32 = 1e-4;

#[test]
fn screen_round_trip_reproduces_pixel_coordinates() {
    let viewport = Viewport::new(800, 600);
    let samples = [
        (0.0, 0.0),
        (800.0, 600.0),
        (400.0, 300.0),
        (123.0, 456.0),
        (799.5, 0.5),
        (13.37, 42.42),
    ];

    for (px, py) in samples {
        let v = CoordinateConverter::screen_to_normalized(ScreenPoint::new(px, py), viewport);
        let back = CoordinateConverter::normalized_to_screen(v, viewport);
        assert!(
            (back.x - px).abs() < TOLERANCE && (back.y - py).abs() < TOLERANCE,
            "round trip drifted: ({px}, {py}) -> ({}, {})",
            back.x,
            back.y
        );
    }
}

#[test]
fn normalized_coordinates_stay_in_range_for_in_bounds_pixels() {
    let viewport = Viewport::new(800, 600);
    for (px, py) in [(0.0, 0.0), (800.0, 600.0), (1.0, 599.0), (650.0, 17.0)] {
        let v = CoordinateConverter::screen_to_normalized(ScreenPoint::new(px, py), viewport);
        assert!((-1.0..=1.0).contains(&v.x), "x out of range: {}", v.x);
        assert!((-1.0..=1.0).contains(&v.y), "y out of range: {}", v.y);
    }
}

#[test]
fn y_axis_is_flipped() {
    let viewport = Viewport::new(800, 600);
    let top = CoordinateConverter::screen_to_normalized(ScreenPoint::new(400.0, 0.0), viewport);
    let bottom =
        CoordinateConverter::screen_to_normalized(ScreenPoint::new(400.0, 600.0), viewport);
    assert_eq!(top.y, 1.0);
    assert_eq!(bottom.y, -1.0);
}

#[test]
fn mapping_is_independent_of_viewport_size() {
    // The same relative position maps to the same normalized vertex.
    let small = CoordinateConverter::screen_to_normalized(
        ScreenPoint::new(100.0, 75.0),
        Viewport::new(400, 300),
    );
    let large = CoordinateConverter::screen_to_normalized(
        ScreenPoint::new(200.0, 150.0),
        Viewport::new(800, 600),
    );
    assert_eq!(small, large);
    assert_eq!(small, Vertex::new(-0.5, 0.5));
}

#[test]
fn pixel_area_scales_with_viewport() {
    assert_eq!(
        CoordinateConverter::normalized_to_pixel_area(4.0, Viewport::new(800, 600)),
        480_000.0
    );
    assert_eq!(
        CoordinateConverter::normalized_to_pixel_area(4.0, Viewport::new(400, 300)),
        120_000.0
    );
    // Half of normalized space covers half the viewport pixels.
    assert_eq!(
        CoordinateConverter::normalized_to_pixel_area(2.0, Viewport::new(800, 600)),
        240_000.0
    );
    assert_eq!(
        CoordinateConverter::normalized_to_pixel_area(0.0, Viewport::new(800, 600)),
        0.0
    );
}
