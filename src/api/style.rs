use serde::{Deserialize, Serialize};

use crate::analysis::RemarkableKind;
use crate::error::{GraphError, GraphResult};
use crate::render::{Color, Stroke};

/// Element id of the background grid.
pub const GRID_ELEMENT: &str = "grid";
/// Element id of the horizontal (x) axis line and its tick marks.
pub const X_AXIS_ELEMENT: &str = "axis-x";
/// Element id of the vertical (y) axis line and its tick marks.
pub const Y_AXIS_ELEMENT: &str = "axis-y";
/// Element id of the tick labels.
pub const LABELS_ELEMENT: &str = "labels";

/// Curve colors assigned by function index when no style is given.
pub const CURVE_PALETTE: [(u8, u8, u8); 8] = [
    (31, 119, 180),
    (214, 39, 40),
    (44, 160, 44),
    (255, 127, 14),
    (148, 103, 189),
    (23, 190, 207),
    (140, 86, 75),
    (227, 119, 194),
];

pub const DEFAULT_CURVE_WIDTH_PX: f64 = 2.0;
pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 11.0;
pub const DEFAULT_POINT_RADIUS_PX: f64 = 4.0;
pub const DEFAULT_SAMPLE_RADIUS_PX: f64 = 2.0;
pub const DEFAULT_SHADE_ALPHA: f64 = 0.25;

#[must_use]
pub fn function_element(function_index: usize) -> String {
    format!("function-{function_index}")
}

#[must_use]
pub fn shaded_element(region_index: usize) -> String {
    format!("shaded-{region_index}")
}

#[must_use]
pub fn point_element(kind: RemarkableKind) -> String {
    format!("point-{kind}")
}

/// Partial style override keyed by element id in the graph options.
///
/// Unset fields keep the resolved default for that element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementStyle {
    #[serde(default)]
    pub stroke: Option<Color>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
    #[serde(default)]
    pub fill: Option<Color>,
    #[serde(default)]
    pub font_size_px: Option<f64>,
    #[serde(default)]
    pub radius_px: Option<f64>,
}

impl ElementStyle {
    #[must_use]
    pub fn stroke(color: Color) -> Self {
        Self {
            stroke: Some(color),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size_px: f64) -> Self {
        self.font_size_px = Some(font_size_px);
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius_px: f64) -> Self {
        self.radius_px = Some(radius_px);
        self
    }

    #[must_use]
    pub fn apply_stroke(self, base: Stroke) -> Stroke {
        Stroke::new(
            self.stroke.unwrap_or(base.color),
            self.stroke_width.unwrap_or(base.width),
        )
    }

    pub fn validate(self, element: &str) -> GraphResult<()> {
        for color in [self.stroke, self.fill].into_iter().flatten() {
            color.validate()?;
        }
        for (value, name) in [
            (self.stroke_width, "stroke_width"),
            (self.font_size_px, "font_size_px"),
            (self.radius_px, "radius_px"),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(GraphError::InvalidConfig(format!(
                        "style `{element}.{name}` must be finite and > 0"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Default curve stroke for the function at `function_index`.
#[must_use]
pub fn default_curve_stroke(function_index: usize) -> Stroke {
    let (red, green, blue) = CURVE_PALETTE[function_index % CURVE_PALETTE.len()];
    Stroke::new(Color::rgb8(red, green, blue), DEFAULT_CURVE_WIDTH_PX)
}

#[must_use]
pub fn default_grid_stroke() -> Stroke {
    Stroke::new(Color::rgb(0.88, 0.88, 0.88), 1.0)
}

#[must_use]
pub fn default_axis_stroke() -> Stroke {
    Stroke::new(Color::rgb(0.2, 0.2, 0.2), 1.5)
}

#[must_use]
pub fn default_label_color() -> Color {
    Color::rgb(0.25, 0.25, 0.25)
}

#[must_use]
pub fn default_point_color(kind: RemarkableKind) -> Color {
    match kind {
        RemarkableKind::Root => Color::rgb8(214, 39, 40),
        RemarkableKind::YIntercept => Color::rgb8(31, 119, 180),
        RemarkableKind::LocalMaximum | RemarkableKind::LocalMinimum => Color::rgb8(44, 160, 44),
        RemarkableKind::InflectionPoint => Color::rgb8(148, 103, 189),
        RemarkableKind::VerticalAsymptote | RemarkableKind::Discontinuity => {
            Color::rgb8(255, 127, 14)
        }
    }
}
