//! Unit tests for the surface-to-content transform.

use touchbrowser::input::{ContentClickTarget, CoordinateConverter};
use touchbrowser::surface::SurfaceSize;

#[test]
fn test_example_point() {
    let target = CoordinateConverter::surface_to_content((100.0, 50.0), SurfaceSize::new(600.0, 800.0));
    assert_eq!(target.content_x, 100.0);
    assert_eq!(target.content_y, 750.0);
}

#[test]
fn test_horizontal_axis_untouched() {
    let size = SurfaceSize::new(600.0, 800.0);
    for x in [0.0, 1.5, 299.0, 600.0] {
        assert_eq!(CoordinateConverter::surface_to_content((x, 123.0), size).content_x, x);
    }
}

#[test]
fn test_vertical_inversion_grid() {
    let size = SurfaceSize::new(320.0, 480.0);
    for y in (0..=480).step_by(40) {
        let y = y as f32;
        let target = CoordinateConverter::surface_to_content((10.0, y), size);
        assert_eq!(target.content_y, 480.0 - y);
    }
}

#[test]
fn test_round_trip_through_content() {
    let size = SurfaceSize::new(1080.0, 1920.0);
    let target = ContentClickTarget {
        content_x: 540.0,
        content_y: 100.0,
    };
    let surface = CoordinateConverter::content_to_surface(target, size);
    assert_eq!(surface, (540.0, 1820.0));
    assert_eq!(CoordinateConverter::surface_to_content(surface, size), target);
}
