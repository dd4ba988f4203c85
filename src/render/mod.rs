mod frame;
mod null_renderer;
pub mod path;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use path::{PathCommand, PathData};
pub use primitives::{
    Color, LinePrimitive, MarkerPrimitive, PathPrimitive, Stroke, TextAnchor, TextPrimitive,
};
pub use svg_renderer::SvgRenderer;

use crate::error::GraphResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from sampling and detection logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()>;
}
