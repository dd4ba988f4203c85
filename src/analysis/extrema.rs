use serde::{Deserialize, Serialize};

use crate::analysis::derivative::{
    DEDUP_TOLERANCE, DERIVATIVE_FLOOR, MAX_NEWTON_ITERATIONS, first_derivative,
    second_derivative, sign_change_brackets,
};
use crate::core::Interval;
use crate::core::sampler::evaluate_grid;

/// `|f'(x)|` under which `x` counts as a critical point.
pub const CRITICAL_SLOPE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtremumKind {
    Maximum,
    Minimum,
}

/// A classified local extremum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub x: f64,
    pub y: f64,
    pub kind: ExtremumKind,
}

/// Finds local extrema of `f` inside `domain`, ascending by x.
///
/// Sign changes of the first derivative over a `2 * samples` scan seed a
/// Newton iteration on `f'`. Candidates whose curvature is inconclusive or
/// whose value is undefined are dropped.
pub fn find_extrema<F>(f: &F, domain: Interval, samples: usize) -> Vec<Extremum>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let slopes: Vec<(f64, f64)> = evaluate_grid(f, domain, samples.saturating_mul(2))
        .into_iter()
        .map(|(x, _)| (x, first_derivative(f, x)))
        .collect();

    let mut extrema: Vec<Extremum> = sign_change_brackets(&slopes)
        .into_iter()
        .filter_map(|(left, right)| refine_extremum(f, 0.5 * (left + right), domain))
        .collect();

    extrema.sort_by(|a, b| a.x.total_cmp(&b.x));
    extrema.dedup_by(|next, kept| (next.x - kept.x).abs() <= DEDUP_TOLERANCE);
    extrema
}

/// Newton iteration on `f'` from `seed`, then classification by `f''`.
pub fn refine_extremum<F>(f: &F, seed: f64, domain: Interval) -> Option<Extremum>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let mut x = seed;
    let mut converged = false;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let slope = first_derivative(f, x);
        if !slope.is_finite() {
            return None;
        }
        if slope.abs() < CRITICAL_SLOPE_TOLERANCE {
            converged = true;
            break;
        }

        let curvature = second_derivative(f, x);
        if !curvature.is_finite() || curvature.abs() < DERIVATIVE_FLOOR {
            return None;
        }
        x -= slope / curvature;
        if !x.is_finite() {
            return None;
        }
    }

    if !converged && first_derivative(f, x).abs() >= CRITICAL_SLOPE_TOLERANCE {
        return None;
    }
    if !domain.contains(x) {
        return None;
    }

    let y = f(x);
    let curvature = second_derivative(f, x);
    if !y.is_finite() || !curvature.is_finite() || curvature.abs() < DERIVATIVE_FLOOR {
        return None;
    }

    let kind = if curvature < 0.0 {
        ExtremumKind::Maximum
    } else {
        ExtremumKind::Minimum
    };
    Some(Extremum { x, y, kind })
}
