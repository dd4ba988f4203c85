use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::grid::DEFAULT_MIN_LABEL_DENSITY_PX;
use crate::core::sampler::DEFAULT_SAMPLE_COUNT;
use crate::core::{GridSpacing, Interval, Viewport};
use crate::render::Color;

use super::{ElementStyle, PlottedFunction};

/// Fill between two plotted functions.
///
/// A missing `top` means the top of the visible range; a missing `bottom`
/// means the x-axis (or the range edge nearest to it when zero is not
/// visible).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadedRegion {
    #[serde(default)]
    pub top: Option<usize>,
    #[serde(default)]
    pub bottom: Option<usize>,
    /// Overrides the graph domain for this region only.
    #[serde(default)]
    pub domain: Option<Interval>,
    #[serde(default)]
    pub fill: Option<Color>,
}

impl ShadedRegion {
    /// Region between two functions.
    #[must_use]
    pub fn between(top: usize, bottom: usize) -> Self {
        Self {
            top: Some(top),
            bottom: Some(bottom),
            ..Self::default()
        }
    }

    /// Region between a function and the x-axis.
    #[must_use]
    pub fn under(top: usize) -> Self {
        Self {
            top: Some(top),
            ..Self::default()
        }
    }

    /// Region between a function and the top of the visible range.
    #[must_use]
    pub fn above(bottom: usize) -> Self {
        Self {
            bottom: Some(bottom),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_domain(mut self, start: f64, end: f64) -> Self {
        self.domain = Some(Interval::new(start, end));
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// Serializable graph settings, resolved once when the graph is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphOptions {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_domain")]
    pub domain: Interval,
    /// Visible y-interval; derived from sampled values when `None`.
    #[serde(default)]
    pub range: Option<Interval>,
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Tick spacing; chosen from the label density when `None`.
    #[serde(default)]
    pub grid_spacing: Option<GridSpacing>,
    #[serde(default = "default_min_label_density_px")]
    pub min_label_density_px: f64,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default = "default_true")]
    pub show_axes: bool,
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(default = "default_true")]
    pub detect_remarkable_points: bool,
    #[serde(default)]
    pub show_remarkable_points: bool,
    #[serde(default)]
    pub shaded_regions: Vec<ShadedRegion>,
    /// Style overrides keyed by element id (`grid`, `axis-x`, `function-0`, ...).
    ///
    /// `IndexMap` keeps insertion order so serialized options stay stable.
    #[serde(default)]
    pub element_styles: IndexMap<String, ElementStyle>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            domain: default_domain(),
            range: None,
            samples: default_samples(),
            grid_spacing: None,
            min_label_density_px: default_min_label_density_px(),
            show_grid: true,
            show_axes: true,
            show_labels: true,
            detect_remarkable_points: true,
            show_remarkable_points: false,
            shaded_regions: Vec::new(),
            element_styles: IndexMap::new(),
        }
    }
}

impl GraphOptions {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_domain(mut self, start: f64, end: f64) -> Self {
        self.domain = Interval::new(start, end);
        self
    }

    #[must_use]
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.range = Some(Interval::new(start, end));
        self
    }

    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    #[must_use]
    pub fn with_grid_spacing(mut self, dx: f64, dy: f64) -> Self {
        self.grid_spacing = Some(GridSpacing::new(dx, dy));
        self
    }

    #[must_use]
    pub fn with_min_label_density(mut self, min_label_density_px: f64) -> Self {
        self.min_label_density_px = min_label_density_px;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    #[must_use]
    pub fn with_axes(mut self, show: bool) -> Self {
        self.show_axes = show;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    #[must_use]
    pub fn with_remarkable_point_detection(mut self, detect: bool) -> Self {
        self.detect_remarkable_points = detect;
        self
    }

    #[must_use]
    pub fn with_remarkable_points_shown(mut self, show: bool) -> Self {
        self.show_remarkable_points = show;
        self
    }

    #[must_use]
    pub fn with_shaded_region(mut self, region: ShadedRegion) -> Self {
        self.shaded_regions.push(region);
        self
    }

    #[must_use]
    pub fn with_element_style(mut self, element: impl Into<String>, style: ElementStyle) -> Self {
        self.element_styles.insert(element.into(), style);
        self
    }

    #[must_use]
    pub fn element_style(&self, element: &str) -> Option<ElementStyle> {
        self.element_styles.get(element).copied()
    }
}

/// Functions plus options: everything a graph is built from.
#[derive(Debug, Clone, Default)]
pub struct GraphConfig {
    pub functions: Vec<PlottedFunction>,
    pub options: GraphOptions,
}

impl GraphConfig {
    #[must_use]
    pub fn new(options: GraphOptions) -> Self {
        Self {
            functions: Vec::new(),
            options,
        }
    }

    /// Appends a function; its index is its position in the list.
    #[must_use]
    pub fn with_function(mut self, function: PlottedFunction) -> Self {
        self.functions.push(function);
        self
    }

    /// Shorthand for `with_function(PlottedFunction::new(f))`.
    #[must_use]
    pub fn plot<F>(self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.with_function(PlottedFunction::new(f))
    }
}

fn default_domain() -> Interval {
    Interval::new(-10.0, 10.0)
}

fn default_samples() -> usize {
    DEFAULT_SAMPLE_COUNT
}

fn default_min_label_density_px() -> f64 {
    DEFAULT_MIN_LABEL_DENSITY_PX
}

fn default_true() -> bool {
    true
}
