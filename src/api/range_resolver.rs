use tracing::warn;

use crate::analysis::FunctionCallback;
use crate::core::Interval;
use crate::core::sampler::finite_value_bounds;

/// Fraction of the sampled span added above and below an auto range.
pub const AUTO_RANGE_PADDING_RATIO: f64 = 0.10;
/// Padding used when every sampled value is identical.
pub const FLAT_RANGE_PADDING: f64 = 1.0;
/// Range used when no function produces a finite sample.
pub const FALLBACK_RANGE: Interval = Interval::new(-10.0, 10.0);

/// Derives the visible y-interval from sampled function values.
pub(super) fn resolve_auto_range(
    functions: &[FunctionCallback],
    domain: Interval,
    samples: usize,
) -> Interval {
    let bounds = functions
        .iter()
        .filter_map(|f| finite_value_bounds(f.as_ref(), domain, samples))
        .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)));

    let Some((min, max)) = bounds else {
        warn!(
            functions = functions.len(),
            "no finite samples for auto range, using fallback"
        );
        return FALLBACK_RANGE;
    };

    padded_range(min, max)
}

pub(super) fn padded_range(min: f64, max: f64) -> Interval {
    let span = max - min;
    if !span.is_finite() {
        return FALLBACK_RANGE;
    }
    let padding = if span > 0.0 {
        span * AUTO_RANGE_PADDING_RATIO
    } else {
        FLAT_RANGE_PADDING
    };
    let range = Interval::new(min - padding, max + padding);
    if range.start.is_finite() && range.end.is_finite() && range.start < range.end {
        range
    } else {
        FALLBACK_RANGE
    }
}
