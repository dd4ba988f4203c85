use approx::assert_abs_diff_eq;
use fn_graph::api::ElementStyle;
use fn_graph::core::PixelPoint;
use fn_graph::render::{Color, NullRenderer, Stroke, SvgRenderer};
use fn_graph::{FunctionGraph, GraphConfig, GraphOptions, PlottedFunction, ShadedRegion};

fn options() -> GraphOptions {
    GraphOptions::default()
        .with_domain(-10.0, 10.0)
        .with_range(-10.0, 10.0)
}

fn parabola_graph(options: GraphOptions) -> FunctionGraph {
    FunctionGraph::new(GraphConfig::new(options).plot(|x| x * x - 4.0)).expect("graph init")
}

#[test]
fn default_frame_contains_grid_axes_labels_and_curve() {
    let graph = parabola_graph(options());
    let frame = graph.build_frame(PixelPoint::default()).expect("frame");

    // dx = 2 over [-10, 10] and dy = 2.5 over [-10, 10].
    assert_eq!(graph.x_axis().ticks.len(), 11);
    assert_eq!(graph.y_axis().ticks.len(), 9);
    assert_eq!(frame.grid_lines.len(), 11 + 9);
    assert_eq!(frame.axis_lines.len(), 2 + 11 + 9);
    // The shared origin label is drawn once.
    assert_eq!(frame.texts.len(), 11 + 8);
    assert_eq!(frame.curves.len(), 1);
    assert!(frame.markers.is_empty());
    assert!(frame.shaded_regions.is_empty());

    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(labels.contains(&"-10"));
    assert!(labels.contains(&"2.5"));
    assert_eq!(labels.iter().filter(|label| **label == "0").count(), 1);
}

#[test]
fn curve_leaving_the_range_is_clipped_to_one_subpath() {
    let graph = parabola_graph(options());
    let frame = graph.build_frame(PixelPoint::default()).expect("frame");
    let curve = frame.curve("function-0").expect("curve");
    assert_eq!(curve.path.subpath_count(), 1);
    assert_eq!(curve.stroke.map(|stroke| stroke.width), Some(2.0));
}

#[test]
fn pole_splits_the_curve_into_two_subpaths() {
    let graph =
        FunctionGraph::new(GraphConfig::new(options()).plot(|x| 1.0 / x)).expect("graph init");
    let path = graph.function_path(0).expect("path");
    assert_eq!(path.subpath_count(), 2);
    assert!(graph.function_path(1).is_none());
}

#[test]
fn hidden_layers_are_left_out() {
    let graph = parabola_graph(
        options()
            .with_grid(false)
            .with_axes(false)
            .with_labels(false),
    );
    let frame = graph.build_frame(PixelPoint::default()).expect("frame");
    assert!(frame.grid_lines.is_empty());
    assert!(frame.axis_lines.is_empty());
    assert!(frame.texts.is_empty());
    assert_eq!(frame.curves.len(), 1);
}

#[test]
fn remarkable_markers_follow_the_origin_offset() {
    let graph = parabola_graph(options().with_remarkable_points_shown(true));
    let frame = graph
        .build_frame(PixelPoint::new(10.0, 20.0))
        .expect("frame");

    assert_eq!(frame.markers.len(), 4);
    for id in ["root-0", "root-1", "y-intercept-0", "local-minimum-0"] {
        assert!(frame.marker(id).is_some(), "missing marker {id}");
    }

    let root = frame.marker("root-1").expect("root marker");
    assert_abs_diff_eq!(root.x, 360.0 + 10.0, epsilon = 1e-3);
    assert_abs_diff_eq!(root.y, 200.0 + 20.0, epsilon = 1e-3);
    assert_eq!(root.radius, 4.0);
}

#[test]
fn sample_markers_cover_every_visible_sample() {
    let config = GraphConfig::new(options().with_samples(20))
        .with_function(PlottedFunction::new(|x| 0.5 * x).with_points(true));
    let graph = FunctionGraph::new(config).expect("graph init");
    let frame = graph.build_frame(PixelPoint::default()).expect("frame");

    assert_eq!(frame.markers.len(), 21);
    let first = frame.marker("sample-0-0").expect("first sample");
    assert_eq!(first.radius, 2.0);
    assert_abs_diff_eq!(first.x, 0.0, epsilon = 1e-9);
    assert!(frame.marker("sample-0-20").is_some());
}

#[test]
fn element_overrides_win_over_function_styles() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let config = GraphConfig::new(
        options()
            .with_element_style("function-1", ElementStyle::stroke(red).with_stroke_width(4.0))
            .with_element_style("grid", ElementStyle::stroke(blue)),
    )
    .with_function(PlottedFunction::new(|x| x).with_style(Stroke::new(blue, 3.0)))
    .plot(|x| -x);
    let graph = FunctionGraph::new(config).expect("graph init");
    let frame = graph.build_frame(PixelPoint::default()).expect("frame");

    let first = frame.curve("function-0").and_then(|curve| curve.stroke);
    assert_eq!(first, Some(Stroke::new(blue, 3.0)));
    let second = frame.curve("function-1").and_then(|curve| curve.stroke);
    assert_eq!(second, Some(Stroke::new(red, 4.0)));
    assert!(frame.grid_lines.iter().all(|line| line.stroke.color == blue));
}

#[test]
fn shaded_regions_are_filled_with_translucent_curve_color() {
    let config = GraphConfig::new(
        options().with_shaded_region(ShadedRegion::between(0, 1).with_domain(-1.5, 1.5)),
    )
    .plot(|x| 4.0 - x * x)
    .plot(|x| x * x);
    let graph = FunctionGraph::new(config).expect("graph init");
    let frame = graph.build_frame(PixelPoint::default()).expect("frame");

    assert_eq!(frame.shaded_regions.len(), 1);
    let region = &frame.shaded_regions[0];
    assert_eq!(region.id, "shaded-0");
    assert!(region.stroke.is_none());
    assert_eq!(region.fill.map(|fill| fill.alpha), Some(0.25));
}

#[test]
fn renderers_receive_the_validated_frame() {
    let graph = parabola_graph(options().with_remarkable_points_shown(true));

    let mut null = NullRenderer::default();
    graph
        .render(&mut null, PixelPoint::default())
        .expect("null render");
    assert_eq!(null.frames_rendered, 1);
    assert_eq!(null.last_curve_count, 1);
    assert_eq!(null.last_line_count, 20 + 22);
    assert_eq!(null.last_text_count, 19);
    assert_eq!(null.last_marker_count, 4);

    let mut svg = SvgRenderer::new();
    graph
        .render(&mut svg, PixelPoint::default())
        .expect("svg render");
    let document = svg.into_document();
    assert!(document.starts_with("<svg"));
    assert!(document.ends_with("</svg>\n"));
    assert!(document.contains(r#"<path id="function-0""#));
    assert!(document.contains(r#"<circle id="root-0""#));
    assert_eq!(document.matches("<text ").count(), 19);
}
