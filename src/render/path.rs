use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::error::{GraphError, GraphResult};

/// One vector path command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    Close,
}

/// Ordered path commands, serializable to SVG path syntax.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: PixelPoint) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: PixelPoint) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// One subpath per run; each run opens with a move.
    pub fn from_runs<I, R>(runs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = PixelPoint>,
    {
        let mut path = Self::new();
        for run in runs {
            for (index, point) in run.into_iter().enumerate() {
                if index == 0 {
                    path.move_to(point);
                } else {
                    path.line_to(point);
                }
            }
        }
        path
    }

    /// A single closed subpath through `points`; empty input gives an empty path.
    pub fn closed_polygon<I>(points: I) -> Self
    where
        I: IntoIterator<Item = PixelPoint>,
    {
        let mut path = Self::from_runs(std::iter::once(points));
        if !path.is_empty() {
            path.close();
        }
        path
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of vertices (moves and lines).
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| !matches!(command, PathCommand::Close))
            .count()
    }

    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::MoveTo(_)))
            .count()
    }

    /// Copy shifted by `origin`, used to place canvas-relative geometry.
    #[must_use]
    pub fn translated(&self, origin: PixelPoint) -> Self {
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(point) => PathCommand::MoveTo(point.offset(origin)),
                PathCommand::LineTo(point) => PathCommand::LineTo(point.offset(origin)),
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Self { commands }
    }

    /// SVG path string, e.g. `"M0 10 L5 2.5 Z"`.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 16);
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            match command {
                PathCommand::MoveTo(point) => {
                    let _ = write!(out, "M{} {}", svg_number(point.x), svg_number(point.y));
                }
                PathCommand::LineTo(point) => {
                    let _ = write!(out, "L{} {}", svg_number(point.x), svg_number(point.y));
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }

    pub fn validate(&self) -> GraphResult<()> {
        let all_finite = self.commands.iter().all(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => {
                point.x.is_finite() && point.y.is_finite()
            }
            PathCommand::Close => true,
        });
        if !all_finite {
            return Err(GraphError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if matches!(self.commands.first(), Some(PathCommand::LineTo(_) | PathCommand::Close)) {
            return Err(GraphError::InvalidData(
                "path must start with a move command".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Pixel coordinate rounded to two decimals with trailing zeros removed.
#[must_use]
pub fn svg_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
