use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Canvas size in pixels supplied by the layout collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> GraphResult<Self> {
        if !self.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(600, 400)
    }
}

/// Closed interval `[start, end]` used for both the domain and the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Builds an interval, rejecting non-finite bounds and `start >= end`.
    pub fn checked(start: f64, end: f64, name: &str) -> GraphResult<Self> {
        Self::new(start, end).validate(name)
    }

    pub fn validate(self, name: &str) -> GraphResult<Self> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(GraphError::InvalidConfig(format!(
                "{name} bounds must be finite"
            )));
        }
        if self.start >= self.end {
            return Err(GraphError::InvalidConfig(format!(
                "{name} start must be < end (got [{}, {}])",
                self.start, self.end
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.start, self.end)
    }

    /// Returns the `index`-th of `steps + 1` evenly spaced positions.
    ///
    /// Computed as `start + span * index / steps` so both endpoints are hit
    /// exactly and positions do not accumulate rounding drift.
    #[must_use]
    pub fn lerp_step(self, index: usize, steps: usize) -> f64 {
        if index >= steps {
            return self.end;
        }
        self.start + self.span() * (index as f64) / (steps as f64)
    }
}

/// A point in the mathematical plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in canvas-relative pixel space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, origin: PixelPoint) -> Self {
        Self::new(self.x + origin.x, self.y + origin.y)
    }
}
