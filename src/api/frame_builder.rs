use crate::analysis::RemarkablePointQuery;
use crate::core::{AxisDirection, GraphAxis, PixelPoint, Sample};
use crate::error::GraphResult;
use crate::render::{
    Color, LinePrimitive, MarkerPrimitive, PathPrimitive, RenderFrame, Stroke, TextAnchor,
    TextPrimitive,
};

use super::FunctionGraph;
use super::style::{
    DEFAULT_LABEL_FONT_SIZE_PX, DEFAULT_POINT_RADIUS_PX, DEFAULT_SAMPLE_RADIUS_PX,
    DEFAULT_SHADE_ALPHA, ElementStyle, GRID_ELEMENT, LABELS_ELEMENT, X_AXIS_ELEMENT,
    Y_AXIS_ELEMENT, default_axis_stroke, default_curve_stroke, default_grid_stroke,
    default_label_color, default_point_color, function_element, point_element, shaded_element,
};

const TICK_MARK_HALF_PX: f64 = 3.0;
const LABEL_GAP_PX: f64 = 4.0;

/// Turns graph state into one [`RenderFrame`].
pub(super) struct FrameBuilder<'a> {
    graph: &'a FunctionGraph,
    origin: PixelPoint,
    frame: RenderFrame,
}

impl<'a> FrameBuilder<'a> {
    pub(super) fn new(graph: &'a FunctionGraph, origin: PixelPoint) -> Self {
        Self {
            graph,
            origin,
            frame: RenderFrame::new(graph.viewport(), origin),
        }
    }

    pub(super) fn build(mut self) -> GraphResult<RenderFrame> {
        self.push_shaded_regions()?;
        let options = self.graph.options();
        if options.show_grid {
            self.push_grid();
        }
        if options.show_axes {
            self.push_axis(self.graph.x_axis(), X_AXIS_ELEMENT);
            self.push_axis(self.graph.y_axis(), Y_AXIS_ELEMENT);
        }
        self.push_curves();
        if options.show_labels {
            self.push_tick_labels();
        }
        if options.show_remarkable_points {
            self.push_remarkable_markers();
        }
        Ok(self.frame)
    }

    fn style(&self, element: &str) -> ElementStyle {
        self.graph.options().element_style(element).unwrap_or_default()
    }

    fn at(&self, x: f64, y: f64) -> PixelPoint {
        PixelPoint::new(x, y).offset(self.origin)
    }

    fn push_line(lines: &mut Vec<LinePrimitive>, from: PixelPoint, to: PixelPoint, stroke: Stroke) {
        lines.push(LinePrimitive::new(from.x, from.y, to.x, to.y, stroke));
    }

    fn push_shaded_regions(&mut self) -> GraphResult<()> {
        for (index, region) in self.graph.options().shaded_regions.iter().enumerate() {
            let path = self.graph.shaded_path(region)?;
            if path.is_empty() {
                continue;
            }

            let element = shaded_element(index);
            let base = region.fill.unwrap_or_else(|| {
                let curve = region.top.or(region.bottom).unwrap_or(0);
                default_curve_stroke(curve).color.with_alpha(DEFAULT_SHADE_ALPHA)
            });
            let fill = self.style(&element).fill.unwrap_or(base);
            self.frame.shaded_regions.push(PathPrimitive::filled(
                element,
                path.translated(self.origin),
                fill,
            ));
        }
        Ok(())
    }

    fn push_grid(&mut self) {
        let stroke = self.style(GRID_ELEMENT).apply_stroke(default_grid_stroke());
        let mapper = self.graph.mapper();
        let (width, height) = (mapper.width_px(), mapper.height_px());

        for tick in &self.graph.x_axis().ticks {
            let from = self.at(tick.position_px, 0.0);
            let to = self.at(tick.position_px, height);
            Self::push_line(&mut self.frame.grid_lines, from, to, stroke);
        }
        for tick in &self.graph.y_axis().ticks {
            let from = self.at(0.0, tick.position_px);
            let to = self.at(width, tick.position_px);
            Self::push_line(&mut self.frame.grid_lines, from, to, stroke);
        }
    }

    fn push_axis(&mut self, axis: &GraphAxis, element: &str) {
        let stroke = self.style(element).apply_stroke(default_axis_stroke());
        let start = axis.start_px.offset(self.origin);
        let end = axis.end_px.offset(self.origin);
        Self::push_line(&mut self.frame.axis_lines, start, end, stroke);

        for tick in &axis.ticks {
            let (from, to) = match axis.direction {
                AxisDirection::Horizontal => (
                    self.at(tick.position_px, axis.start_px.y - TICK_MARK_HALF_PX),
                    self.at(tick.position_px, axis.start_px.y + TICK_MARK_HALF_PX),
                ),
                AxisDirection::Vertical => (
                    self.at(axis.start_px.x - TICK_MARK_HALF_PX, tick.position_px),
                    self.at(axis.start_px.x + TICK_MARK_HALF_PX, tick.position_px),
                ),
            };
            Self::push_line(&mut self.frame.axis_lines, from, to, stroke);
        }
    }

    fn push_curves(&mut self) {
        for (index, function) in self.graph.functions().iter().enumerate() {
            let element = function_element(index);
            let base = function.style.unwrap_or_else(|| default_curve_stroke(index));
            let stroke = self.style(&element).apply_stroke(base);

            if let Some(path) = self.graph.function_path(index) {
                self.frame.curves.push(PathPrimitive::stroked(
                    element.clone(),
                    path.translated(self.origin),
                    stroke,
                ));
            }

            if function.show_points {
                self.push_sample_markers(index, stroke.color);
            }
        }
    }

    fn push_sample_markers(&mut self, function_index: usize, color: Color) {
        let Some(samples) = self.graph.sample(function_index) else {
            return;
        };
        let radius = self
            .style(&function_element(function_index))
            .radius_px
            .unwrap_or(DEFAULT_SAMPLE_RADIUS_PX);
        let mapper = self.graph.mapper();

        for (sample_index, sample) in samples.iter().enumerate() {
            let Sample::Point(point) = sample else {
                continue;
            };
            let pixel = mapper.point_to_pixel(*point).offset(self.origin);
            self.frame.markers.push(MarkerPrimitive::new(
                format!("sample-{function_index}-{sample_index}"),
                pixel.x,
                pixel.y,
                radius,
                color,
            ));
        }
    }

    fn push_tick_labels(&mut self) {
        let style = self.style(LABELS_ELEMENT);
        let color = style.fill.or(style.stroke).unwrap_or_else(default_label_color);
        let font_size = style.font_size_px.unwrap_or(DEFAULT_LABEL_FONT_SIZE_PX);
        let mapper = self.graph.mapper();
        let (width, height) = (mapper.width_px(), mapper.height_px());

        let x_axis = self.graph.x_axis();
        let y_axis = self.graph.y_axis();
        let label_y = (x_axis.start_px.y + LABEL_GAP_PX + font_size).min(height - LABEL_GAP_PX);
        for tick in &x_axis.ticks {
            let at = self.at(tick.position_px, label_y);
            self.frame.texts.push(TextPrimitive::new(
                tick.label.clone(),
                at.x,
                at.y,
                font_size,
                color,
                TextAnchor::Middle,
            ));
        }

        // The origin label is already drawn by the x-axis when both axes cross at zero.
        let skip_origin = x_axis.crossing == 0.0 && y_axis.crossing == 0.0;
        let axis_x = y_axis.start_px.x;
        let (label_x, anchor) = if axis_x - LABEL_GAP_PX < 3.0 * font_size {
            (axis_x + LABEL_GAP_PX, TextAnchor::Start)
        } else {
            (axis_x - LABEL_GAP_PX, TextAnchor::End)
        };
        for tick in &y_axis.ticks {
            if skip_origin && tick.value == 0.0 {
                continue;
            }
            let at = self.at(label_x.min(width), tick.position_px + 0.35 * font_size);
            self.frame.texts.push(TextPrimitive::new(
                tick.label.clone(),
                at.x,
                at.y,
                font_size,
                color,
                anchor,
            ));
        }
    }

    fn push_remarkable_markers(&mut self) {
        for point in self.graph.remarkable_points(RemarkablePointQuery::all()) {
            let Some(pixel) = point.pixel else {
                continue;
            };
            let style = self.style(&point_element(point.kind));
            let pixel = pixel.offset(self.origin);
            self.frame.markers.push(MarkerPrimitive::new(
                point.id.clone(),
                pixel.x,
                pixel.y,
                style.radius_px.unwrap_or(DEFAULT_POINT_RADIUS_PX),
                style.fill.unwrap_or_else(|| default_point_color(point.kind)),
            ));
        }
    }
}
