use approx::assert_abs_diff_eq;
use fn_graph::core::shading::MIN_SHADING_SAMPLES;
use fn_graph::core::{Interval, RegionBound, build_shaded_polygon};
use fn_graph::render::PathCommand;
use fn_graph::{FunctionGraph, GraphConfig, GraphError, GraphOptions, ShadedRegion};

fn lens_graph(samples: usize) -> FunctionGraph {
    let config = GraphConfig::new(
        GraphOptions::default()
            .with_domain(-3.0, 3.0)
            .with_range(-1.0, 5.0)
            .with_samples(samples),
    )
    .plot(|x| 4.0 - x * x)
    .plot(|x| x * x);
    FunctionGraph::new(config).expect("graph init")
}

#[test]
fn region_between_two_curves_is_one_closed_outline() {
    let graph = lens_graph(200);
    let region = ShadedRegion::between(0, 1).with_domain(-1.5, 1.5);
    let path = graph.shaded_path(&region).expect("shaded path");

    let commands = path.commands();
    assert!(matches!(commands.first(), Some(PathCommand::MoveTo(_))));
    assert_eq!(commands.last(), Some(&PathCommand::Close));
    assert_eq!(path.subpath_count(), 1);
    assert_eq!(path.point_count(), 2 * 200);
}

#[test]
fn outline_runs_along_top_then_back_along_bottom() {
    let graph = lens_graph(200);
    let region = ShadedRegion::between(0, 1).with_domain(-1.5, 1.5);
    let polygon = graph.shaded_polygon(&region).expect("polygon");

    let first = polygon.top.first().expect("top edge");
    assert_abs_diff_eq!(first.x, -1.5, epsilon = 1e-12);
    assert_abs_diff_eq!(first.y, 1.75, epsilon = 1e-12);

    let outline: Vec<_> = polygon.outline().collect();
    assert_eq!(outline.len(), polygon.vertex_count());
    let last = outline.last().expect("outline");
    assert_abs_diff_eq!(last.x, -1.5, epsilon = 1e-12);
    assert_abs_diff_eq!(last.y, 2.25, epsilon = 1e-12);
}

#[test]
fn small_sample_counts_are_raised_to_the_shading_minimum() {
    let graph = lens_graph(20);
    let region = ShadedRegion::between(0, 1);
    let path = graph.shaded_path(&region).expect("shaded path");
    assert_eq!(path.point_count(), 2 * MIN_SHADING_SAMPLES);
}

#[test]
fn area_under_a_curve_defaults_to_the_x_axis() {
    let graph = lens_graph(200);
    let polygon = graph
        .shaded_polygon(&ShadedRegion::under(0))
        .expect("polygon");
    assert!(polygon.bottom.iter().all(|point| point.y == 0.0));
    // Values above the range are clamped to its top.
    assert!(polygon.top.iter().all(|point| point.y <= 5.0 && point.y >= -1.0));
}

#[test]
fn area_above_a_curve_defaults_to_the_range_top() {
    let graph = lens_graph(200);
    let polygon = graph
        .shaded_polygon(&ShadedRegion::above(1))
        .expect("polygon");
    assert!(polygon.top.iter().all(|point| point.y == 5.0));
}

#[test]
fn undefined_positions_are_skipped() {
    let bound = |x: f64| if x.abs() < 0.5 { f64::NAN } else { 1.0 };
    let polygon = build_shaded_polygon(
        RegionBound::Curve(&bound),
        RegionBound::Level(0.0),
        Interval::new(-1.0, 1.0),
        Interval::new(-2.0, 2.0),
        100,
    );
    assert!(!polygon.is_empty());
    assert!(polygon.top.len() < 100);
    assert!(polygon.top.iter().all(|point| point.x.abs() >= 0.5));
    assert_eq!(polygon.top.len(), polygon.bottom.len());
}

#[test]
fn nowhere_defined_region_gives_an_empty_path() {
    let config = GraphConfig::new(GraphOptions::default().with_range(-1.0, 1.0))
        .plot(|_| f64::NAN);
    let graph = FunctionGraph::new(config).expect("graph init");
    let path = graph
        .shaded_path(&ShadedRegion::under(0))
        .expect("shaded path");
    assert!(path.is_empty());
}

#[test]
fn dangling_function_reference_is_rejected() {
    let graph = lens_graph(200);
    let result = graph.shaded_path(&ShadedRegion::between(0, 9));
    assert!(matches!(result, Err(GraphError::InvalidData(_))));

    let config = GraphConfig::new(
        GraphOptions::default().with_shaded_region(ShadedRegion::under(3)),
    )
    .plot(|x| x);
    assert!(matches!(
        FunctionGraph::new(config),
        Err(GraphError::InvalidConfig(_))
    ));
}
