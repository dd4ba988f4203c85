use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, Viewport};
use crate::error::GraphResult;
use crate::render::{LinePrimitive, MarkerPrimitive, PathPrimitive, TextPrimitive};

/// Backend-agnostic scene for one graph draw pass.
///
/// Coordinates are absolute: the layout origin is already applied. Backends
/// paint the collections in field order, back to front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub origin: PixelPoint,
    pub shaded_regions: Vec<PathPrimitive>,
    pub grid_lines: Vec<LinePrimitive>,
    pub axis_lines: Vec<LinePrimitive>,
    pub curves: Vec<PathPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub markers: Vec<MarkerPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, origin: PixelPoint) -> Self {
        Self {
            viewport,
            origin,
            shaded_regions: Vec::new(),
            grid_lines: Vec::new(),
            axis_lines: Vec::new(),
            curves: Vec::new(),
            texts: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        self.viewport.validate()?;

        for path in self.shaded_regions.iter().chain(&self.curves) {
            path.validate()?;
        }
        for line in self.grid_lines.iter().chain(&self.axis_lines) {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shaded_regions.is_empty()
            && self.grid_lines.is_empty()
            && self.axis_lines.is_empty()
            && self.curves.is_empty()
            && self.texts.is_empty()
            && self.markers.is_empty()
    }

    #[must_use]
    pub fn marker(&self, id: &str) -> Option<&MarkerPrimitive> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    #[must_use]
    pub fn curve(&self, id: &str) -> Option<&PathPrimitive> {
        self.curves.iter().find(|curve| curve.id == id)
    }
}
