use std::fmt::Write as _;

use crate::error::GraphResult;
use crate::render::path::svg_number;
use crate::render::{
    LinePrimitive, PathPrimitive, RenderFrame, Renderer, TextAnchor, TextPrimitive,
};

/// Renders frames into a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the last successful `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;

        let width = f64::from(frame.viewport.width) + frame.origin.x.max(0.0);
        let height = f64::from(frame.viewport.height) + frame.origin.y.max(0.0);
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = svg_number(width),
            h = svg_number(height),
        );

        for region in &frame.shaded_regions {
            write_path(&mut out, region);
        }
        for line in frame.grid_lines.iter().chain(&frame.axis_lines) {
            write_line(&mut out, line);
        }
        for curve in &frame.curves {
            write_path(&mut out, curve);
        }
        for text in &frame.texts {
            write_text(&mut out, text);
        }
        for marker in &frame.markers {
            let _ = writeln!(
                out,
                r#"  <circle id="{}" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                escape_xml(&marker.id),
                svg_number(marker.x),
                svg_number(marker.y),
                svg_number(marker.radius),
                marker.color.to_css(),
            );
        }

        out.push_str("</svg>\n");
        self.document = out;
        Ok(())
    }
}

fn write_path(out: &mut String, path: &PathPrimitive) {
    if path.path.is_empty() {
        return;
    }
    let fill = path
        .fill
        .map_or_else(|| "none".to_owned(), |color| color.to_css());
    let _ = write!(
        out,
        r#"  <path id="{}" d="{}" fill="{}""#,
        escape_xml(&path.id),
        path.path.to_svg(),
        fill,
    );
    if let Some(stroke) = path.stroke {
        let _ = write!(
            out,
            r#" stroke="{}" stroke-width="{}" stroke-linejoin="round""#,
            stroke.color.to_css(),
            svg_number(stroke.width),
        );
    }
    out.push_str("/>\n");
}

fn write_line(out: &mut String, line: &LinePrimitive) {
    let _ = writeln!(
        out,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        svg_number(line.x1),
        svg_number(line.y1),
        svg_number(line.x2),
        svg_number(line.y2),
        line.stroke.color.to_css(),
        svg_number(line.stroke.width),
    );
}

fn write_text(out: &mut String, text: &TextPrimitive) {
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}">{}</text>"#,
        svg_number(text.x),
        svg_number(text.y),
        svg_number(text.font_size_px),
        text.color.to_css(),
        escape_xml(&text.text),
    );
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
