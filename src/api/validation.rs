use crate::core::axis::MAX_TICKS_PER_AXIS;
use crate::core::sampler::MIN_SAMPLE_COUNT;
use crate::core::{GridSpacing, Interval};
use crate::error::{GraphError, GraphResult};

use super::{GraphOptions, ShadedRegion};

/// Largest accepted sample count; detection scans twice as many points.
pub const MAX_SAMPLE_COUNT: usize = 1_000_000;

pub(super) fn validate_options(options: &GraphOptions, function_count: usize) -> GraphResult<()> {
    options.viewport.validate()?;
    options.domain.validate("domain")?;
    if let Some(range) = options.range {
        range.validate("range")?;
    }
    validate_samples(options.samples)?;

    if !options.min_label_density_px.is_finite() || options.min_label_density_px <= 0.0 {
        return Err(GraphError::InvalidConfig(
            "min label density must be finite and > 0".to_owned(),
        ));
    }

    for (index, region) in options.shaded_regions.iter().enumerate() {
        validate_shaded_region(index, region, function_count)?;
    }
    for (element, style) in &options.element_styles {
        style.validate(element)?;
    }

    Ok(())
}

pub(super) fn validate_samples(samples: usize) -> GraphResult<usize> {
    if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&samples) {
        return Err(GraphError::InvalidConfig(format!(
            "sample count must be in [{MIN_SAMPLE_COUNT}, {MAX_SAMPLE_COUNT}], got {samples}"
        )));
    }
    Ok(samples)
}

fn validate_shaded_region(
    index: usize,
    region: &ShadedRegion,
    function_count: usize,
) -> GraphResult<()> {
    for (side, function_index) in [("top", region.top), ("bottom", region.bottom)] {
        if let Some(function_index) = function_index {
            if function_index >= function_count {
                return Err(GraphError::InvalidConfig(format!(
                    "shaded region {index} {side} refers to function {function_index}, \
                     but only {function_count} are plotted"
                )));
            }
        }
    }
    if let Some(domain) = region.domain {
        domain.validate("shaded region domain")?;
    }
    if let Some(fill) = region.fill {
        fill.validate()?;
    }
    Ok(())
}

/// Rejects non-positive spacings and spacings that would produce an
/// unreasonable number of ticks.
pub(super) fn validate_grid_spacing(
    spacing: GridSpacing,
    domain: Interval,
    range: Interval,
) -> GraphResult<GridSpacing> {
    for (name, value) in [("dx", spacing.dx), ("dy", spacing.dy)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "grid spacing {name} must be finite and > 0"
            )));
        }
    }

    let max_ticks = MAX_TICKS_PER_AXIS as f64;
    let too_dense = |extent: f64, step: f64| extent / step > max_ticks;
    if too_dense(domain.span(), spacing.dx) || too_dense(range.span(), spacing.dy) {
        return Err(GraphError::InvalidConfig(format!(
            "grid spacing produces more than {MAX_TICKS_PER_AXIS} ticks per axis"
        )));
    }

    Ok(spacing)
}
