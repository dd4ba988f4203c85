use serde::{Deserialize, Serialize};

use crate::core::types::Interval;
use crate::error::{GraphError, GraphResult};

/// Affine map from a mathematical interval onto `[0, extent_px]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    extent_px: f64,
}

impl LinearScale {
    pub fn new(interval: Interval, extent_px: f64) -> GraphResult<Self> {
        let interval = interval.validate("scale domain")?;
        if !extent_px.is_finite() || extent_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "scale pixel extent must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: interval.start,
            domain_end: interval.end,
            extent_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> Interval {
        Interval::new(self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn extent_px(self) -> f64 {
        self.extent_px
    }

    /// Position of `value` normalized to `[0, 1]` over the domain.
    ///
    /// Values outside the domain extrapolate linearly; non-finite input
    /// propagates unchanged.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        (value - self.domain_start) / (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        self.normalize(value) * self.extent_px
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = pixel / self.extent_px;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Pixels covered by `units` of the mathematical axis.
    #[must_use]
    pub fn units_to_pixels(self, units: f64) -> f64 {
        units / (self.domain_end - self.domain_start) * self.extent_px
    }
}
