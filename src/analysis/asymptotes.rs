use serde::{Deserialize, Serialize};

use crate::core::Interval;
use crate::core::sampler::{evaluate_grid, sample_step};

/// Jump between neighbouring samples, as a fraction of the range height,
/// above which a finite pair is reported as a discontinuity.
///
/// Heuristic: steep but continuous curves can exceed it, and small jumps
/// stay below it. Precision depends on the sample density.
pub const JUMP_RANGE_FRACTION: f64 = 0.5;
/// Breaks closer than this many sampling steps are merged.
pub const BREAK_MERGE_STEPS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakKind {
    VerticalAsymptote,
    Discontinuity,
}

/// Location where a sampled curve stops being continuous.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveBreak {
    pub x: f64,
    pub kind: BreakKind,
}

/// Scans neighbouring sample pairs at `2 * samples` steps.
///
/// Exactly one undefined side marks a vertical asymptote at the pair's
/// midpoint; two defined sides further apart than
/// [`JUMP_RANGE_FRACTION`] of the range height mark a discontinuity.
/// Breaks within [`BREAK_MERGE_STEPS`] of the previous one form a single
/// cluster, reported as an asymptote if any member is one.
pub fn find_breaks<F>(f: &F, domain: Interval, range: Interval, samples: usize) -> Vec<CurveBreak>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let steps = samples.saturating_mul(2);
    let grid = evaluate_grid(f, domain, steps);
    let jump_threshold = JUMP_RANGE_FRACTION * range.span();
    let merge_distance = BREAK_MERGE_STEPS * sample_step(domain, steps);

    let mut breaks: Vec<CurveBreak> = Vec::new();
    let mut cluster_end = f64::NEG_INFINITY;
    for pair in grid.windows(2) {
        let (left_x, left_y) = pair[0];
        let (right_x, right_y) = pair[1];
        let kind = match (left_y.is_finite(), right_y.is_finite()) {
            (true, false) | (false, true) => BreakKind::VerticalAsymptote,
            (true, true) if (right_y - left_y).abs() > jump_threshold => {
                BreakKind::Discontinuity
            }
            _ => continue,
        };

        let x = 0.5 * (left_x + right_x);
        let joins_cluster = x - cluster_end <= merge_distance;
        cluster_end = x;
        match breaks.last_mut() {
            Some(last) if joins_cluster => {
                // A pole is usually flanked by large finite jumps; the pole wins.
                if kind == BreakKind::VerticalAsymptote && last.kind == BreakKind::Discontinuity {
                    *last = CurveBreak { x, kind };
                }
            }
            _ => breaks.push(CurveBreak { x, kind }),
        }
    }

    breaks
}
