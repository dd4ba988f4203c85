use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::analysis::asymptotes::{BreakKind, find_breaks};
use crate::analysis::derivative::DEDUP_TOLERANCE;
use crate::analysis::extrema::{ExtremumKind, find_extrema};
use crate::analysis::inflection::find_inflection_points;
use crate::analysis::roots::find_roots;
use crate::core::{CoordinateMapper, PixelPoint, format_coordinate};

/// Shared, thread-safe real function `f: R -> R`.
///
/// Callbacks must be pure: detected features are cached for the lifetime of
/// the graph.
pub type FunctionCallback = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Category of an automatically detected point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemarkableKind {
    Root,
    YIntercept,
    LocalMaximum,
    LocalMinimum,
    InflectionPoint,
    VerticalAsymptote,
    Discontinuity,
}

impl RemarkableKind {
    pub const ALL: [Self; 7] = [
        Self::Root,
        Self::YIntercept,
        Self::LocalMaximum,
        Self::LocalMinimum,
        Self::InflectionPoint,
        Self::VerticalAsymptote,
        Self::Discontinuity,
    ];

    /// Stable kebab-case name, also the prefix of point identifiers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::YIntercept => "y-intercept",
            Self::LocalMaximum => "local-maximum",
            Self::LocalMinimum => "local-minimum",
            Self::InflectionPoint => "inflection-point",
            Self::VerticalAsymptote => "vertical-asymptote",
            Self::Discontinuity => "discontinuity",
        }
    }

    const fn ordinal_slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for RemarkableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected point on one plotted function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemarkablePoint {
    /// `<kind>-<ordinal>`, unique within one graph.
    pub id: String,
    pub kind: RemarkableKind,
    pub function_index: usize,
    pub x: f64,
    pub y: Option<f64>,
    pub description: String,
    /// Canvas-relative position; present only when `y` is finite and inside
    /// the range.
    pub pixel: Option<PixelPoint>,
}

impl RemarkablePoint {
    fn new(
        kind: RemarkableKind,
        function_index: usize,
        x: f64,
        y: Option<f64>,
        mapper: CoordinateMapper,
    ) -> Self {
        let y = y.filter(|value| value.is_finite());
        Self {
            id: String::new(),
            kind,
            function_index,
            x,
            y,
            description: describe(kind, x, y),
            pixel: y.and_then(|value| mapper.visible_pixel(x, value)),
        }
    }
}

fn describe(kind: RemarkableKind, x: f64, y: Option<f64>) -> String {
    let x_text = format_coordinate(x);
    let at_point = |label: &str| match y {
        Some(y) => format!("{label} at ({x_text}, {})", format_coordinate(y)),
        None => format!("{label} at x = {x_text}"),
    };

    match kind {
        RemarkableKind::Root => format!("Root at x = {x_text}"),
        RemarkableKind::YIntercept => at_point("y-intercept"),
        RemarkableKind::LocalMaximum => at_point("Local maximum"),
        RemarkableKind::LocalMinimum => at_point("Local minimum"),
        RemarkableKind::InflectionPoint => at_point("Inflection point"),
        RemarkableKind::VerticalAsymptote => format!("Vertical asymptote near x = {x_text}"),
        RemarkableKind::Discontinuity => format!("Discontinuity near x = {x_text}"),
    }
}

/// Filter for [`RemarkablePointCache::query`]; `None` fields match anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemarkablePointQuery {
    pub kind: Option<RemarkableKind>,
    pub function_index: Option<usize>,
}

impl RemarkablePointQuery {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_kind(mut self, kind: RemarkableKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn with_function(mut self, function_index: usize) -> Self {
        self.function_index = Some(function_index);
        self
    }

    #[must_use]
    pub fn matches(&self, point: &RemarkablePoint) -> bool {
        self.kind.is_none_or(|kind| kind == point.kind)
            && self
                .function_index
                .is_none_or(|index| index == point.function_index)
    }
}

/// Runs every finder on one function and returns its points sorted by x.
///
/// Identifiers are left empty; [`RemarkablePointCache::build`] assigns them.
pub fn detect_remarkable_points<F>(
    f: &F,
    function_index: usize,
    mapper: CoordinateMapper,
    samples: usize,
) -> Vec<RemarkablePoint>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let domain = mapper.domain();
    let range = mapper.range();
    let mut points = Vec::new();

    let roots = find_roots(f, domain, samples);
    points.extend(roots.iter().map(|&x| {
        RemarkablePoint::new(RemarkableKind::Root, function_index, x, Some(0.0), mapper)
    }));

    if domain.contains(0.0) {
        let y = f(0.0);
        if y.is_finite() && range.contains(y) {
            points.push(RemarkablePoint::new(
                RemarkableKind::YIntercept,
                function_index,
                0.0,
                Some(y),
                mapper,
            ));
        }
    }

    let extrema = find_extrema(f, domain, samples);
    points.extend(extrema.iter().map(|extremum| {
        let kind = match extremum.kind {
            ExtremumKind::Maximum => RemarkableKind::LocalMaximum,
            ExtremumKind::Minimum => RemarkableKind::LocalMinimum,
        };
        RemarkablePoint::new(kind, function_index, extremum.x, Some(extremum.y), mapper)
    }));

    let inflections = find_inflection_points(f, domain, samples);
    points.extend(inflections.iter().map(|point| {
        RemarkablePoint::new(
            RemarkableKind::InflectionPoint,
            function_index,
            point.x,
            Some(point.y),
            mapper,
        )
    }));

    let breaks = find_breaks(f, domain, range, samples);
    points.extend(breaks.iter().map(|curve_break| {
        let kind = match curve_break.kind {
            BreakKind::VerticalAsymptote => RemarkableKind::VerticalAsymptote,
            BreakKind::Discontinuity => RemarkableKind::Discontinuity,
        };
        RemarkablePoint::new(kind, function_index, curve_break.x, None, mapper)
    }));

    trace!(
        function_index,
        roots = roots.len(),
        extrema = extrema.len(),
        inflections = inflections.len(),
        breaks = breaks.len(),
        "detected remarkable points"
    );

    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.kind.cmp(&b.kind)));
    dedup_same_kind(points)
}

fn dedup_same_kind(points: Vec<RemarkablePoint>) -> Vec<RemarkablePoint> {
    let mut kept: Vec<RemarkablePoint> = Vec::with_capacity(points.len());
    for point in points {
        let duplicate = kept
            .iter()
            .rev()
            .take_while(|previous| point.x - previous.x <= DEDUP_TOLERANCE)
            .any(|previous| previous.kind == point.kind);
        if !duplicate {
            kept.push(point);
        }
    }
    kept
}

/// Per-function remarkable points, computed once and read-only afterwards.
///
/// Indexed by function position, so lookups never allocate keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemarkablePointCache {
    per_function: Vec<Vec<RemarkablePoint>>,
}

impl RemarkablePointCache {
    /// Cache with one empty slot per function, used when detection is off.
    #[must_use]
    pub fn empty(function_count: usize) -> Self {
        Self {
            per_function: vec![Vec::new(); function_count],
        }
    }

    /// Detects points for every function and assigns stable identifiers.
    #[must_use]
    pub fn build(functions: &[FunctionCallback], mapper: CoordinateMapper, samples: usize) -> Self {
        let per_function = detect_all(functions, mapper, samples);
        let mut cache = Self { per_function };
        cache.assign_ids();
        cache
    }

    fn assign_ids(&mut self) {
        let mut ordinals = [0usize; RemarkableKind::ALL.len()];
        for point in self.per_function.iter_mut().flatten() {
            let slot = &mut ordinals[point.kind.ordinal_slot()];
            point.id = format!("{}-{}", point.kind.as_str(), *slot);
            *slot += 1;
        }
    }

    #[must_use]
    pub fn function_count(&self) -> usize {
        self.per_function.len()
    }

    /// Points of one function, empty for unknown indices.
    #[must_use]
    pub fn for_function(&self, function_index: usize) -> &[RemarkablePoint] {
        self.per_function
            .get(function_index)
            .map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemarkablePoint> {
        self.per_function.iter().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.per_function.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Points matching `query`, in function then x order.
    #[must_use]
    pub fn query(&self, query: RemarkablePointQuery) -> Vec<&RemarkablePoint> {
        match query.function_index {
            Some(index) => self
                .for_function(index)
                .iter()
                .filter(|point| query.matches(point))
                .collect(),
            None => self.iter().filter(|point| query.matches(point)).collect(),
        }
    }
}

#[cfg(not(feature = "parallel-analysis"))]
fn detect_all(
    functions: &[FunctionCallback],
    mapper: CoordinateMapper,
    samples: usize,
) -> Vec<Vec<RemarkablePoint>> {
    functions
        .iter()
        .enumerate()
        .map(|(index, f)| detect_remarkable_points(f.as_ref(), index, mapper, samples))
        .collect()
}

#[cfg(feature = "parallel-analysis")]
fn detect_all(
    functions: &[FunctionCallback],
    mapper: CoordinateMapper,
    samples: usize,
) -> Vec<Vec<RemarkablePoint>> {
    use rayon::prelude::*;

    functions
        .par_iter()
        .enumerate()
        .map(|(index, f)| detect_remarkable_points(f.as_ref(), index, mapper, samples))
        .collect()
}
