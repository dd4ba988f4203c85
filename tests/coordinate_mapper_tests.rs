use approx::assert_abs_diff_eq;
use fn_graph::GraphError;
use fn_graph::core::{CoordinateMapper, Interval, PixelPoint, Viewport};
use proptest::prelude::*;

fn mapper() -> CoordinateMapper {
    CoordinateMapper::new(
        Interval::new(-10.0, 10.0),
        Interval::new(-5.0, 5.0),
        Viewport::new(600, 400),
    )
    .expect("valid mapper")
}

#[test]
fn domain_and_range_corners_map_to_canvas_corners() {
    let mapper = mapper();

    let top_left = mapper.math_to_pixel(-10.0, 5.0);
    assert_eq!(top_left, PixelPoint::new(0.0, 0.0));

    let bottom_right = mapper.math_to_pixel(10.0, -5.0);
    assert_eq!(bottom_right, PixelPoint::new(600.0, 400.0));

    let origin = mapper.math_to_pixel(0.0, 0.0);
    assert_abs_diff_eq!(origin.x, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(origin.y, 200.0, epsilon = 1e-9);
}

#[test]
fn pixel_y_decreases_as_math_y_increases() {
    let mapper = mapper();
    assert!(mapper.y_to_pixel(4.0) < mapper.y_to_pixel(1.0));
    assert!(mapper.y_to_pixel(-4.0) > mapper.y_to_pixel(-1.0));
}

#[test]
fn pixel_to_math_inverts_math_to_pixel() {
    let mapper = mapper();
    for &(x, y) in &[(-7.25, 3.5), (0.0, 0.0), (9.99, -4.01), (1.0 / 3.0, 2.0 / 7.0)] {
        let back = mapper.pixel_to_math(mapper.math_to_pixel(x, y));
        assert_abs_diff_eq!(back.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, y, epsilon = 1e-9);
    }
}

#[test]
fn visible_pixel_rejects_out_of_range_and_non_finite_values() {
    let mapper = mapper();
    assert!(mapper.visible_pixel(1.0, 2.0).is_some());
    assert!(mapper.visible_pixel(1.0, 5.5).is_none());
    assert!(mapper.visible_pixel(1.0, f64::NAN).is_none());
    assert!(mapper.visible_pixel(1.0, f64::INFINITY).is_none());
}

#[test]
fn degenerate_inputs_are_rejected() {
    let zero_width = CoordinateMapper::new(
        Interval::new(0.0, 1.0),
        Interval::new(0.0, 1.0),
        Viewport::new(0, 400),
    );
    assert!(matches!(
        zero_width,
        Err(GraphError::InvalidViewport {
            width: 0,
            height: 400
        })
    ));

    let inverted = CoordinateMapper::new(
        Interval::new(1.0, 1.0),
        Interval::new(0.0, 1.0),
        Viewport::new(600, 400),
    );
    assert!(inverted.is_err());
}

#[test]
fn interval_checked_rejects_non_finite_and_inverted_bounds() {
    assert!(Interval::checked(0.0, 1.0, "domain").is_ok());
    assert!(Interval::checked(2.0, 1.0, "domain").is_err());
    assert!(Interval::checked(f64::NAN, 1.0, "domain").is_err());
    assert!(Interval::checked(0.0, f64::INFINITY, "domain").is_err());
}

proptest! {
    #[test]
    fn mapping_is_monotonic_on_both_axes(
        a in -10.0f64..10.0,
        b in -10.0f64..10.0,
        y in -5.0f64..5.0,
    ) {
        prop_assume!(b - a > 1e-6);
        let mapper = mapper();
        prop_assert!(mapper.x_to_pixel(a) < mapper.x_to_pixel(b));
        prop_assert!(mapper.y_to_pixel(a / 2.0) > mapper.y_to_pixel(b / 2.0));

        let pixel = mapper.math_to_pixel(a, y);
        prop_assert!((0.0..=600.0).contains(&pixel.x));
        prop_assert!((0.0..=400.0).contains(&pixel.y));
    }
}
