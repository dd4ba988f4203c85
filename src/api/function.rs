use std::sync::Arc;

use crate::analysis::FunctionCallback;
use crate::render::Stroke;

/// A real function registered on a graph.
///
/// Its identity is its position in the graph's function list; remarkable
/// points, element ids and shaded regions refer to it by that index.
#[derive(Clone)]
pub struct PlottedFunction {
    callback: FunctionCallback,
    pub label: Option<String>,
    pub style: Option<Stroke>,
    pub show_points: bool,
}

impl PlottedFunction {
    /// Wraps a pure callback. It may return NaN or infinities where the
    /// function is undefined.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::from_callback(Arc::new(f))
    }

    #[must_use]
    pub fn from_callback(callback: FunctionCallback) -> Self {
        Self {
            callback,
            label: None,
            style: None,
            show_points: false,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Stroke) -> Self {
        self.style = Some(style);
        self
    }

    /// Draws a marker on every visible sample.
    #[must_use]
    pub fn with_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    #[must_use]
    pub fn callback(&self) -> &FunctionCallback {
        &self.callback
    }

    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.callback)(x)
    }
}

impl std::fmt::Debug for PlottedFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlottedFunction")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("show_points", &self.show_points)
            .finish_non_exhaustive()
    }
}
