use crate::error::GraphResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so invalid geometry is caught without a
/// drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_curve_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_marker_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_curve_count = frame.curves.len();
        self.last_line_count = frame.grid_lines.len() + frame.axis_lines.len();
        self.last_text_count = frame.texts.len();
        self.last_marker_count = frame.markers.len();
        Ok(())
    }
}
