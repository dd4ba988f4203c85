use crate::core::types::{DataPoint, Interval};

/// Default number of sampling steps across the domain.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;
/// Smallest accepted sample count.
pub const MIN_SAMPLE_COUNT: usize = 2;

/// One element of a sampled curve.
///
/// `Break` marks an x where the function is undefined or leaves the range;
/// path assembly starts a new subpath at the next `Point`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Point(DataPoint),
    Break,
}

impl Sample {
    #[must_use]
    pub fn point(self) -> Option<DataPoint> {
        match self {
            Self::Point(point) => Some(point),
            Self::Break => None,
        }
    }
}

/// Step width between consecutive samples for `samples` steps.
#[must_use]
pub fn sample_step(domain: Interval, samples: usize) -> f64 {
    domain.span() / (samples.max(1) as f64)
}

/// Evaluates `f` at `steps + 1` evenly spaced x positions, endpoints included.
///
/// Raw values are returned; undefined results stay NaN/infinite so callers
/// decide how to treat them.
pub fn evaluate_grid<F>(f: &F, domain: Interval, steps: usize) -> Vec<(f64, f64)>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let steps = steps.max(1);
    (0..=steps)
        .map(|index| {
            let x = domain.lerp_step(index, steps);
            (x, f(x))
        })
        .collect()
}

/// Samples `f` for drawing.
///
/// A sample is kept only when finite and inside `range`; every other sample
/// becomes a [`Sample::Break`].
pub fn sample_function<F>(f: &F, domain: Interval, range: Interval, samples: usize) -> Vec<Sample>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    evaluate_grid(f, domain, samples)
        .into_iter()
        .map(|(x, y)| {
            if y.is_finite() && range.contains(y) {
                Sample::Point(DataPoint::new(x, y))
            } else {
                Sample::Break
            }
        })
        .collect()
}

/// Splits sampled output into contiguous runs of visible points.
#[must_use]
pub fn split_runs(samples: &[Sample]) -> Vec<Vec<DataPoint>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for sample in samples {
        match sample {
            Sample::Point(point) => current.push(*point),
            Sample::Break => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Finite min/max of `f` over the sampled domain, or `None` when no sample
/// is finite.
pub fn finite_value_bounds<F>(f: &F, domain: Interval, samples: usize) -> Option<(f64, f64)>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    evaluate_grid(f, domain, samples)
        .into_iter()
        .map(|(_, y)| y)
        .filter(|y| y.is_finite())
        .fold(None, |bounds, y| match bounds {
            None => Some((y, y)),
            Some((min, max)) => Some((min.min(y), max.max(y))),
        })
}
