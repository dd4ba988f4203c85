use crate::analysis::derivative::{
    DEDUP_TOLERANCE, is_significant_curvature, second_derivative, sign_change_brackets,
};
use crate::core::sampler::evaluate_grid;
use crate::core::{DataPoint, Interval};

/// Finds inflection points of `f` inside `domain`, ascending by x.
///
/// The second derivative is scanned at `2 * samples` steps; values lost in
/// rounding noise count as zero. Each sign change reports the midpoint of its
/// bracket without further refinement.
pub fn find_inflection_points<F>(f: &F, domain: Interval, samples: usize) -> Vec<DataPoint>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let curvature: Vec<(f64, f64)> = evaluate_grid(f, domain, samples.saturating_mul(2))
        .into_iter()
        .map(|(x, y)| {
            if !y.is_finite() {
                return (x, f64::NAN);
            }
            let value = second_derivative(f, x);
            if !value.is_finite() || is_significant_curvature(value, y) {
                (x, value)
            } else {
                (x, 0.0)
            }
        })
        .collect();

    let mut points: Vec<DataPoint> = sign_change_brackets(&curvature)
        .into_iter()
        .filter_map(|(left, right)| {
            let x = 0.5 * (left + right);
            let y = f(x);
            y.is_finite().then_some(DataPoint::new(x, y))
        })
        .collect();

    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    points.dedup_by(|next, kept| (next.x - kept.x).abs() <= DEDUP_TOLERANCE);
    points
}
