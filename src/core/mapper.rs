use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::{DataPoint, Interval, PixelPoint, Viewport};
use crate::error::GraphResult;

/// Bidirectional map between the mathematical plane and the canvas.
///
/// Pixel y decreases as mathematical y increases: the top of the range sits
/// at pixel row 0 and the bottom at `viewport.height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl CoordinateMapper {
    pub fn new(domain: Interval, range: Interval, viewport: Viewport) -> GraphResult<Self> {
        let viewport = viewport.validate()?;
        Ok(Self {
            x_scale: LinearScale::new(domain, f64::from(viewport.width))?,
            y_scale: LinearScale::new(range, f64::from(viewport.height))?,
        })
    }

    #[must_use]
    pub fn domain(self) -> Interval {
        self.x_scale.domain()
    }

    #[must_use]
    pub fn range(self) -> Interval {
        self.y_scale.domain()
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.x_scale.extent_px()
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        self.y_scale.extent_px()
    }

    #[must_use]
    pub fn x_to_pixel(self, x: f64) -> f64 {
        self.x_scale.domain_to_pixel(x)
    }

    #[must_use]
    pub fn y_to_pixel(self, y: f64) -> f64 {
        self.y_scale.extent_px() - self.y_scale.domain_to_pixel(y)
    }

    #[must_use]
    pub fn math_to_pixel(self, x: f64, y: f64) -> PixelPoint {
        PixelPoint::new(self.x_to_pixel(x), self.y_to_pixel(y))
    }

    #[must_use]
    pub fn point_to_pixel(self, point: DataPoint) -> PixelPoint {
        self.math_to_pixel(point.x, point.y)
    }

    #[must_use]
    pub fn pixel_to_math(self, pixel: PixelPoint) -> DataPoint {
        DataPoint::new(
            self.x_scale.pixel_to_domain(pixel.x),
            self.y_scale
                .pixel_to_domain(self.y_scale.extent_px() - pixel.y),
        )
    }

    /// Pixel position of `(x, y)` when `y` is finite and inside the range.
    #[must_use]
    pub fn visible_pixel(self, x: f64, y: f64) -> Option<PixelPoint> {
        if !x.is_finite() || !y.is_finite() || !self.range().contains(y) {
            return None;
        }
        Some(self.math_to_pixel(x, y))
    }

    #[must_use]
    pub fn x_scale(self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(self) -> LinearScale {
        self.y_scale
    }
}
