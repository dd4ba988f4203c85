use crate::analysis::derivative::{
    DEDUP_TOLERANCE, DERIVATIVE_FLOOR, MAX_NEWTON_ITERATIONS, dedup_sorted, first_derivative,
    sign_change_brackets,
};
use crate::core::Interval;
use crate::core::sampler::evaluate_grid;

/// `|f(x)|` under which `x` is accepted as a root.
pub const ROOT_TOLERANCE: f64 = 1e-6;

/// Finds roots of `f` inside `domain`, ascending and deduplicated.
///
/// The domain is scanned at `2 * samples` steps for sign changes; each
/// bracket seeds a Newton-Raphson refinement at its midpoint. Samples that
/// evaluate to exactly zero next to a non-zero neighbour are roots as is.
pub fn find_roots<F>(f: &F, domain: Interval, samples: usize) -> Vec<f64>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let grid = evaluate_grid(f, domain, samples.saturating_mul(2));

    let mut roots: Vec<f64> = sign_change_brackets(&grid)
        .into_iter()
        .filter_map(|(left, right)| refine_root(f, 0.5 * (left + right), domain))
        .collect();
    roots.extend(exact_zero_samples(&grid));

    dedup_sorted(roots, DEDUP_TOLERANCE)
}

/// Newton-Raphson from `seed`; `None` when it does not land on a root inside
/// `domain`.
pub fn refine_root<F>(f: &F, seed: f64, domain: Interval) -> Option<f64>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let mut x = seed;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let value = f(x);
        if !value.is_finite() {
            return None;
        }
        if value.abs() < ROOT_TOLERANCE {
            break;
        }

        let slope = first_derivative(f, x);
        if !slope.is_finite() || slope.abs() < DERIVATIVE_FLOOR {
            break;
        }
        x -= value / slope;
        if !x.is_finite() {
            return None;
        }
    }

    let value = f(x);
    (domain.contains(x) && value.is_finite() && value.abs() < ROOT_TOLERANCE).then_some(x)
}

fn exact_zero_samples(grid: &[(f64, f64)]) -> impl Iterator<Item = f64> + '_ {
    grid.iter().enumerate().filter_map(move |(index, &(x, value))| {
        if value != 0.0 {
            return None;
        }
        let neighbour_nonzero = |offset: Option<usize>| {
            offset
                .and_then(|i| grid.get(i))
                .is_some_and(|&(_, v)| v.is_finite() && v != 0.0)
        };
        (neighbour_nonzero(index.checked_sub(1)) || neighbour_nonzero(index.checked_add(1)))
            .then_some(x)
    })
}
