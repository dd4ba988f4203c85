use serde::{Deserialize, Serialize};

use crate::core::types::{Interval, Viewport};

/// Human-friendly spacing multipliers, ascending.
pub const NICE_MULTIPLIERS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];
/// Default minimum pixel distance between neighbouring labels.
pub const DEFAULT_MIN_LABEL_DENSITY_PX: f64 = 50.0;
/// Fraction of the requested density below which the spacing is escalated.
pub const MIN_DENSITY_RATIO: f64 = 0.8;

// Relative slack when comparing normalized spacings, absorbs `rough / magnitude`
// landing a few ulps above an exact multiplier.
const NICE_MATCH_SLACK: f64 = 1e-9;
const MAX_ESCALATIONS: usize = 8;

/// Tick spacing for both axes, in mathematical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpacing {
    pub dx: f64,
    pub dy: f64,
}

impl GridSpacing {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Spacing for the canvas, domain and range under one label density.
    #[must_use]
    pub fn optimal(
        viewport: Viewport,
        domain: Interval,
        range: Interval,
        min_label_density_px: f64,
    ) -> Self {
        Self {
            dx: optimal_spacing(
                f64::from(viewport.width),
                domain.span(),
                min_label_density_px,
            ),
            dy: optimal_spacing(
                f64::from(viewport.height),
                range.span(),
                min_label_density_px,
            ),
        }
    }
}

/// Picks a "nice" tick spacing for one axis.
///
/// At most `floor(pixel_extent / min_label_density_px)` labels fit. The rough
/// spacing for that many labels is rounded up to the next value of
/// [`NICE_MULTIPLIERS`] times a power of ten; if the resulting label density
/// still drops under [`MIN_DENSITY_RATIO`] of the requested one, the next
/// larger nice value is taken (wrapping `5 -> 10`).
#[must_use]
pub fn optimal_spacing(pixel_extent: f64, math_extent: f64, min_label_density_px: f64) -> f64 {
    if !pixel_extent.is_finite()
        || !math_extent.is_finite()
        || math_extent <= 0.0
        || !min_label_density_px.is_finite()
        || min_label_density_px <= 0.0
    {
        return math_extent;
    }

    let max_labels = (pixel_extent / min_label_density_px).floor();
    if max_labels < 1.0 {
        return math_extent;
    }

    let rough = math_extent / max_labels;
    let mut magnitude = 10f64.powf(rough.log10().floor());
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return math_extent;
    }

    let normalized = rough / magnitude;
    let mut index = NICE_MULTIPLIERS
        .iter()
        .position(|&multiplier| multiplier >= normalized * (1.0 - NICE_MATCH_SLACK))
        .unwrap_or(NICE_MULTIPLIERS.len() - 1);

    let px_per_unit = pixel_extent / math_extent;
    let min_density = MIN_DENSITY_RATIO * min_label_density_px;
    let mut spacing = NICE_MULTIPLIERS[index] * magnitude;

    for _ in 0..MAX_ESCALATIONS {
        if px_per_unit * spacing >= min_density {
            break;
        }
        if index + 1 < NICE_MULTIPLIERS.len() {
            index += 1;
        } else {
            index = 0;
            magnitude *= 10.0;
        }
        spacing = NICE_MULTIPLIERS[index] * magnitude;
    }

    spacing
}

/// Whether `value` is one of the nice multipliers times a power of ten.
#[must_use]
pub fn is_nice_spacing(value: f64) -> bool {
    if !value.is_finite() || value <= 0.0 {
        return false;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let normalized = value / magnitude;
    NICE_MULTIPLIERS
        .iter()
        .chain(std::iter::once(&10.0))
        .any(|multiplier| (normalized - multiplier).abs() <= 1e-9 * multiplier)
}

#[cfg(test)]
mod tests {
    use super::{is_nice_spacing, optimal_spacing};

    #[test]
    fn exact_nice_rough_spacing_is_kept() {
        assert_eq!(optimal_spacing(500.0, 2.0, 50.0), 0.2);
    }

    #[test]
    fn normalized_above_five_escalates_to_next_decade() {
        // rough = 0.7 -> falls back to 5 * 0.1 = 0.5 -> 35.7 px, under 40 px.
        let spacing = optimal_spacing(500.0, 7.0, 50.0);
        assert!((spacing - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn too_narrow_axis_uses_full_extent() {
        assert_eq!(optimal_spacing(30.0, 12.0, 50.0), 12.0);
    }

    #[test]
    fn nice_values_are_recognized() {
        assert!(is_nice_spacing(0.25));
        assert!(is_nice_spacing(5_000.0));
        assert!(!is_nice_spacing(3.0));
    }
}
