use serde::{Deserialize, Serialize};

use crate::analysis::RemarkablePoint;
use crate::core::{GraphAxis, GridSpacing, Interval, Viewport};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
///
/// Curve geometry is left out; it is a pure function of the fields below and
/// the plotted callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub viewport: Viewport,
    pub domain: Interval,
    pub range: Interval,
    pub samples: usize,
    pub grid_spacing: GridSpacing,
    pub x_axis: GraphAxis,
    pub y_axis: GraphAxis,
    pub remarkable_points: Vec<RemarkablePoint>,
}
