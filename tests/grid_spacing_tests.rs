use approx::assert_relative_eq;
use fn_graph::core::grid::{MIN_DENSITY_RATIO, is_nice_spacing};
use fn_graph::core::{GridSpacing, Interval, Viewport, optimal_spacing};
use proptest::prelude::*;

#[test]
fn default_canvas_rounds_rough_spacing_up_to_nice_values() {
    // 600 px / 50 px -> 12 labels over 20 units; 400 px -> 8 labels over 20.
    let spacing = GridSpacing::optimal(
        Viewport::new(600, 400),
        Interval::new(-10.0, 10.0),
        Interval::new(-10.0, 10.0),
        50.0,
    );
    assert_relative_eq!(spacing.dx, 2.0);
    assert_relative_eq!(spacing.dy, 2.5);
}

#[test]
fn large_extents_use_larger_decades() {
    let spacing = optimal_spacing(800.0, 7_000.0, 50.0);
    assert_relative_eq!(spacing, 500.0);
}

#[test]
fn small_extents_use_fractional_decades() {
    let spacing = optimal_spacing(1000.0, 0.02, 100.0);
    assert_relative_eq!(spacing, 0.002, max_relative = 1e-9);
}

proptest! {
    #[test]
    fn spacing_is_nice_and_keeps_labels_readable(
        pixel_extent in 100.0f64..4_000.0,
        math_extent in 1e-3f64..1e6,
        density in 10.0f64..100.0,
    ) {
        let spacing = optimal_spacing(pixel_extent, math_extent, density);
        let px_between_labels = pixel_extent / math_extent * spacing;

        prop_assert!(is_nice_spacing(spacing), "spacing {spacing} is not nice");
        prop_assert!(px_between_labels >= MIN_DENSITY_RATIO * density * (1.0 - 1e-12));
    }
}
