use approx::assert_abs_diff_eq;
use fn_graph::analysis::{RemarkableKind, RemarkablePointQuery};
use fn_graph::{FunctionGraph, GraphConfig, GraphOptions};

fn cubic_graph() -> FunctionGraph {
    let config = GraphConfig::new(GraphOptions::default().with_domain(-5.0, 5.0))
        .plot(|x| x * x * x - 3.0 * x);
    FunctionGraph::new(config).expect("graph init")
}

fn kinds_of(graph: &FunctionGraph, kind: RemarkableKind) -> Vec<f64> {
    graph
        .remarkable_points(RemarkablePointQuery::all().with_kind(kind))
        .iter()
        .map(|point| point.x)
        .collect()
}

#[test]
fn cubic_reports_roots_extrema_inflection_and_intercept() {
    let graph = cubic_graph();
    let all = graph.remarkable_points(RemarkablePointQuery::all());
    assert_eq!(all.len(), 7, "got {all:#?}");

    let roots = kinds_of(&graph, RemarkableKind::Root);
    assert_eq!(roots.len(), 3);
    assert_abs_diff_eq!(roots[0], -3f64.sqrt(), epsilon = 1e-6);
    assert_abs_diff_eq!(roots[1], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(roots[2], 3f64.sqrt(), epsilon = 1e-6);

    let maxima = graph.remarkable_points(
        RemarkablePointQuery::all().with_kind(RemarkableKind::LocalMaximum),
    );
    assert_eq!(maxima.len(), 1);
    assert_abs_diff_eq!(maxima[0].x, -1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(maxima[0].y.expect("finite y"), 2.0, epsilon = 1e-6);

    let minima = kinds_of(&graph, RemarkableKind::LocalMinimum);
    assert_eq!(minima.len(), 1);
    assert_abs_diff_eq!(minima[0], 1.0, epsilon = 1e-5);

    assert_eq!(kinds_of(&graph, RemarkableKind::InflectionPoint).len(), 1);

    let intercept = graph.remarkable_points(
        RemarkablePointQuery::all().with_kind(RemarkableKind::YIntercept),
    );
    assert_eq!(intercept.len(), 1);
    assert_eq!(intercept[0].x, 0.0);
    assert_eq!(intercept[0].y, Some(0.0));
}

#[test]
fn points_are_ordered_by_x_within_a_function() {
    let graph = cubic_graph();
    let xs: Vec<f64> = graph
        .remarkable_points(RemarkablePointQuery::all().with_function(0))
        .iter()
        .map(|point| point.x)
        .collect();
    assert!(xs.windows(2).all(|pair| pair[0] <= pair[1]), "got {xs:?}");
}

#[test]
fn repeated_queries_return_identical_results() {
    let graph = cubic_graph();
    let first: Vec<_> = graph
        .remarkable_points(RemarkablePointQuery::all())
        .into_iter()
        .cloned()
        .collect();
    let second: Vec<_> = graph
        .remarkable_points(RemarkablePointQuery::all())
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(first, second);
}

#[test]
fn identifiers_count_per_kind_across_functions() {
    let config = GraphConfig::new(GraphOptions::default().with_domain(-5.0, 5.0))
        .plot(|x| x * x * x - 3.0 * x)
        .plot(|x| x * x - 4.0);
    let graph = FunctionGraph::new(config).expect("graph init");

    let root_ids: Vec<&str> = graph
        .remarkable_points(RemarkablePointQuery::all().with_kind(RemarkableKind::Root))
        .iter()
        .map(|point| point.id.as_str())
        .collect();
    assert_eq!(root_ids, ["root-0", "root-1", "root-2", "root-3", "root-4"]);

    let second_roots =
        graph.remarkable_points(RemarkablePointQuery::all().with_kind(RemarkableKind::Root).with_function(1));
    assert_eq!(second_roots.len(), 2);
    assert!(second_roots.iter().all(|point| point.function_index == 1));
    assert_eq!(second_roots[0].description, "Root at x = -2");
    assert_eq!(second_roots[1].description, "Root at x = 2");

    let intercepts =
        graph.remarkable_points(RemarkablePointQuery::all().with_kind(RemarkableKind::YIntercept));
    assert_eq!(intercepts.len(), 2);
    assert_eq!(intercepts[1].id, "y-intercept-1");
    assert_eq!(intercepts[1].y, Some(-4.0));
    assert_eq!(intercepts[1].description, "y-intercept at (0, -4)");

    let mut ids: Vec<&str> = graph
        .remarkable_point_cache()
        .iter()
        .map(|point| point.id.as_str())
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn pole_yields_an_asymptote_and_no_intercept() {
    let config = GraphConfig::new(
        GraphOptions::default()
            .with_domain(-5.0, 5.0)
            .with_range(-10.0, 10.0),
    )
    .plot(|x| 1.0 / x);
    let graph = FunctionGraph::new(config).expect("graph init");

    let asymptotes = graph.remarkable_points(
        RemarkablePointQuery::all().with_kind(RemarkableKind::VerticalAsymptote),
    );
    assert_eq!(asymptotes.len(), 1);
    assert!(asymptotes[0].x.abs() < 0.05);
    assert_eq!(asymptotes[0].y, None);
    assert_eq!(asymptotes[0].pixel, None);
    assert!(asymptotes[0].description.starts_with("Vertical asymptote near x = "));

    assert!(kinds_of(&graph, RemarkableKind::Root).is_empty());
    assert!(kinds_of(&graph, RemarkableKind::YIntercept).is_empty());
}

#[test]
fn points_outside_the_range_have_no_pixel_position() {
    let config = GraphConfig::new(
        GraphOptions::default()
            .with_domain(-5.0, 5.0)
            .with_range(-1.0, 1.0),
    )
    .plot(|x| x * x * x - 3.0 * x);
    let graph = FunctionGraph::new(config).expect("graph init");

    let maxima = graph.remarkable_points(
        RemarkablePointQuery::all().with_kind(RemarkableKind::LocalMaximum),
    );
    assert_eq!(maxima.len(), 1);
    assert_eq!(maxima[0].pixel, None);

    let roots = graph.remarkable_points(RemarkablePointQuery::all().with_kind(RemarkableKind::Root));
    assert!(roots.iter().all(|point| point.pixel.is_some()));
}

#[test]
fn detection_can_be_disabled() {
    let config = GraphConfig::new(
        GraphOptions::default()
            .with_domain(-5.0, 5.0)
            .with_remarkable_point_detection(false),
    )
    .plot(|x| x * x - 4.0);
    let graph = FunctionGraph::new(config).expect("graph init");

    assert!(graph.remarkable_points(RemarkablePointQuery::all()).is_empty());
    assert_eq!(graph.remarkable_point_cache().function_count(), 1);
}

#[test]
fn unknown_function_index_matches_nothing() {
    let graph = cubic_graph();
    assert!(graph
        .remarkable_points(RemarkablePointQuery::all().with_function(7))
        .is_empty());
}

#[test]
fn parabola_with_auto_range_has_roots_intercept_and_vertex_only() {
    let config =
        GraphConfig::new(GraphOptions::default().with_domain(-5.0, 5.0)).plot(|x| x * x - 4.0);
    let graph = FunctionGraph::new(config).expect("graph init");

    let roots = kinds_of(&graph, RemarkableKind::Root);
    assert_eq!(roots.len(), 2);
    assert_abs_diff_eq!(roots[0], -2.0, epsilon = 1e-3);
    assert_abs_diff_eq!(roots[1], 2.0, epsilon = 1e-3);

    for kind in [RemarkableKind::YIntercept, RemarkableKind::LocalMinimum] {
        let points = graph.remarkable_points(RemarkablePointQuery::all().with_kind(kind));
        assert_eq!(points.len(), 1, "{kind}");
        assert_abs_diff_eq!(points[0].x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(points[0].y.expect("finite y"), -4.0, epsilon = 1e-6);
    }

    for kind in [
        RemarkableKind::LocalMaximum,
        RemarkableKind::InflectionPoint,
        RemarkableKind::VerticalAsymptote,
        RemarkableKind::Discontinuity,
    ] {
        assert!(kinds_of(&graph, kind).is_empty(), "unexpected {kind}");
    }
}

#[test]
fn cubic_on_a_narrow_domain_keeps_its_features() {
    let config = GraphConfig::new(GraphOptions::default().with_domain(-3.0, 3.0))
        .plot(|x| x * x * x - 3.0 * x);
    let graph = FunctionGraph::new(config).expect("graph init");

    let maxima = kinds_of(&graph, RemarkableKind::LocalMaximum);
    let minima = kinds_of(&graph, RemarkableKind::LocalMinimum);
    let inflections = kinds_of(&graph, RemarkableKind::InflectionPoint);
    assert_eq!((maxima.len(), minima.len(), inflections.len()), (1, 1, 1));
    assert_abs_diff_eq!(maxima[0], -1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(minima[0], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(inflections[0], 0.0, epsilon = 1e-2);
}

#[test]
fn reciprocal_with_auto_range_reports_only_the_asymptote() {
    let config =
        GraphConfig::new(GraphOptions::default().with_domain(-5.0, 5.0)).plot(|x| 1.0 / x);
    let graph = FunctionGraph::new(config).expect("graph init");

    let asymptotes = kinds_of(&graph, RemarkableKind::VerticalAsymptote);
    assert_eq!(asymptotes.len(), 1);
    assert!(asymptotes[0].abs() < 0.05);
    assert!(kinds_of(&graph, RemarkableKind::Root).is_empty());
    assert!(kinds_of(&graph, RemarkableKind::YIntercept).is_empty());
}
