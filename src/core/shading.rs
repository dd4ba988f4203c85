use crate::core::types::{DataPoint, Interval};

/// Lower bound on samples taken along a shaded region.
pub const MIN_SHADING_SAMPLES: usize = 100;

/// One edge of a shaded region.
#[derive(Clone, Copy)]
pub enum RegionBound<'a> {
    Curve(&'a dyn Fn(f64) -> f64),
    Level(f64),
}

impl RegionBound<'_> {
    /// Ceiling used when a region has no top curve.
    #[must_use]
    pub fn visible_top(range: Interval) -> Self {
        Self::Level(range.end)
    }

    /// Floor used when a region has no bottom curve: the x-axis when it is
    /// visible, otherwise the nearest range edge.
    #[must_use]
    pub fn axis_floor(range: Interval) -> Self {
        Self::Level(range.clamp(0.0))
    }

    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        match self {
            Self::Curve(f) => f(x),
            Self::Level(level) => *level,
        }
    }
}

impl std::fmt::Debug for RegionBound<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Curve(_) => f.write_str("Curve(..)"),
            Self::Level(level) => f.debug_tuple("Level").field(level).finish(),
        }
    }
}

/// Closed outline between two bounds, in mathematical coordinates.
///
/// `top` and `bottom` are sampled at the same x positions; the outline runs
/// forward along `top` and back along `bottom`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShadedPolygon {
    pub top: Vec<DataPoint>,
    pub bottom: Vec<DataPoint>,
}

impl ShadedPolygon {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.top.len() + self.bottom.len()
    }

    /// Outline vertices: top edge left-to-right, then bottom edge right-to-left.
    pub fn outline(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.top.iter().chain(self.bottom.iter().rev()).copied()
    }
}

/// Samples both bounds over `domain` and builds the fill outline.
///
/// At least [`MIN_SHADING_SAMPLES`] positions are used. Positions where either
/// bound is non-finite are dropped; kept values are clamped into `range`.
#[must_use]
pub fn build_shaded_polygon(
    top: RegionBound<'_>,
    bottom: RegionBound<'_>,
    domain: Interval,
    range: Interval,
    samples: usize,
) -> ShadedPolygon {
    let count = samples.max(MIN_SHADING_SAMPLES);
    let mut polygon = ShadedPolygon {
        top: Vec::with_capacity(count),
        bottom: Vec::with_capacity(count),
    };

    for index in 0..count {
        let x = domain.lerp_step(index, count - 1);
        let upper = top.value_at(x);
        let lower = bottom.value_at(x);
        if !upper.is_finite() || !lower.is_finite() {
            continue;
        }
        polygon.top.push(DataPoint::new(x, range.clamp(upper)));
        polygon.bottom.push(DataPoint::new(x, range.clamp(lower)));
    }

    polygon
}
