//! Finite-difference derivatives and sign-change bracketing shared by the
//! feature finders.

use ordered_float::OrderedFloat;

/// Offset used by the central-difference first derivative.
pub const FIRST_DERIVATIVE_STEP: f64 = 1e-5;
/// Offset used by the central-difference second derivative.
///
/// Larger than the first-derivative step: the second difference divides by
/// `h^2`, and `1e-4` keeps cancellation noise near `1e-8 * |f|`.
pub const SECOND_DERIVATIVE_STEP: f64 = 1e-4;
/// Newton refinements stop after this many updates.
pub const MAX_NEWTON_ITERATIONS: usize = 20;
/// Derivatives smaller than this abort a Newton update.
pub const DERIVATIVE_FLOOR: f64 = 1e-10;
/// Features closer than this along x are merged.
pub const DEDUP_TOLERANCE: f64 = 1e-6;
/// Relative threshold under which a second derivative counts as zero.
pub const CURVATURE_EPSILON: f64 = 1e-5;

/// Central-difference first derivative.
pub fn first_derivative<F>(f: &F, x: f64) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let h = FIRST_DERIVATIVE_STEP;
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Central-difference second derivative.
pub fn second_derivative<F>(f: &F, x: f64) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let h = SECOND_DERIVATIVE_STEP;
    (f(x + h) - 2.0 * f(x) + f(x - h)) / (h * h)
}

/// Whether a second derivative is distinguishable from rounding noise at a
/// point where the function value is `value`.
#[must_use]
pub fn is_significant_curvature(curvature: f64, value: f64) -> bool {
    curvature.is_finite() && curvature.abs() > CURVATURE_EPSILON * (1.0 + value.abs())
}

/// Intervals `(x_left, x_right)` across which the sampled values change sign.
///
/// Exact zeros are skipped so a sign change straddling a sample that lands
/// on zero is still bracketed. A non-finite value resets the scan: no
/// bracket ever spans an undefined sample.
#[must_use]
pub fn sign_change_brackets(samples: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut brackets = Vec::new();
    let mut last_signed: Option<(f64, bool)> = None;

    for &(x, value) in samples {
        if !value.is_finite() {
            last_signed = None;
            continue;
        }
        if value == 0.0 {
            continue;
        }

        let positive = value > 0.0;
        if let Some((last_x, last_positive)) = last_signed {
            if last_positive != positive {
                brackets.push((last_x, x));
            }
        }
        last_signed = Some((x, positive));
    }

    brackets
}

/// Sorts ascending and drops values within `tolerance` of the last kept one.
#[must_use]
pub fn dedup_sorted(mut values: Vec<f64>, tolerance: f64) -> Vec<f64> {
    values.retain(|value| value.is_finite());
    values.sort_by_key(|value| OrderedFloat(*value));

    let mut kept: Vec<f64> = Vec::with_capacity(values.len());
    for value in values {
        match kept.last() {
            Some(last) if value - last <= tolerance => {}
            _ => kept.push(value),
        }
    }
    kept
}
