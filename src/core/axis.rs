use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::label_format::format_tick_label;
use crate::core::mapper::CoordinateMapper;
use crate::core::types::{Interval, PixelPoint};

/// Upper bound on ticks generated for one axis.
pub const MAX_TICKS_PER_AXIS: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisDirection {
    Horizontal,
    Vertical,
}

/// Labelled tick on an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    /// Pixel coordinate along the axis direction.
    pub position_px: f64,
    pub label: String,
}

/// One axis line with its ticks, in canvas-relative pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphAxis {
    pub direction: AxisDirection,
    /// Value on the perpendicular axis where this axis is drawn: zero clamped
    /// into the perpendicular interval.
    pub crossing: f64,
    pub start_px: PixelPoint,
    pub end_px: PixelPoint,
    pub ticks: SmallVec<[Tick; 16]>,
}

impl GraphAxis {
    /// Horizontal x-axis drawn at `y = 0` (clamped into the range).
    #[must_use]
    pub fn horizontal(mapper: CoordinateMapper, spacing: f64) -> Self {
        let crossing = mapper.range().clamp(0.0);
        let y_px = mapper.y_to_pixel(crossing);
        let ticks = tick_values(mapper.domain(), spacing)
            .into_iter()
            .map(|value| Tick {
                value,
                position_px: mapper.x_to_pixel(value),
                label: format_tick_label(value),
            })
            .collect();

        Self {
            direction: AxisDirection::Horizontal,
            crossing,
            start_px: PixelPoint::new(0.0, y_px),
            end_px: PixelPoint::new(mapper.width_px(), y_px),
            ticks,
        }
    }

    /// Vertical y-axis drawn at `x = 0` (clamped into the domain).
    #[must_use]
    pub fn vertical(mapper: CoordinateMapper, spacing: f64) -> Self {
        let crossing = mapper.domain().clamp(0.0);
        let x_px = mapper.x_to_pixel(crossing);
        let ticks = tick_values(mapper.range(), spacing)
            .into_iter()
            .map(|value| Tick {
                value,
                position_px: mapper.y_to_pixel(value),
                label: format_tick_label(value),
            })
            .collect();

        Self {
            direction: AxisDirection::Vertical,
            crossing,
            start_px: PixelPoint::new(x_px, mapper.height_px()),
            end_px: PixelPoint::new(x_px, 0.0),
            ticks,
        }
    }
}

/// Multiples of `spacing` inside `interval`, ascending.
///
/// Values are computed as `k * spacing` from an integer `k` so they carry no
/// accumulated drift; values within `1e-9 * spacing` of zero snap to `0.0`.
#[must_use]
pub fn tick_values(interval: Interval, spacing: f64) -> Vec<f64> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Vec::new();
    }

    let slack = spacing * 1e-9;
    let first = ((interval.start - slack) / spacing).ceil();
    let last = ((interval.end + slack) / spacing).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return Vec::new();
    }

    let count = ((last - first) as usize + 1).min(MAX_TICKS_PER_AXIS);
    (0..count)
        .map(|offset| {
            let value = (first + offset as f64) * spacing;
            if value.abs() < slack { 0.0 } else { value }
        })
        .collect()
}
