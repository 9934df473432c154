//! Sampling and near-zero classification.
//!
//! Threshold detection reports every grid point whose magnitude falls below
//! the cutoff. It can miss zeros that fall between samples and can report
//! several adjacent samples for one zero. Refined detection starts from the
//! local minima of the sampled magnitudes and narrows each one with a
//! golden-section search inside its neighbouring grid points.

use std::time::Instant;

use critline_core::errors::ScanError;
use critline_core::models::ZeroCandidate;
use rayon::prelude::*;
use tracing::trace;

use crate::control::ScanControl;
use crate::refine::{minimize_golden, GoldenOptions};
use crate::zeta::LineEvaluator;

/// Smallest bracket width the refinement narrows to.
const MIN_REFINE_TOLERANCE: f64 = 1e-12;

/// `|ζ(1/2 + i t)|` at every grid point, in grid order.
///
/// The control is checked before each evaluation. Parallel evaluation
/// preserves order, so it yields the same vector as the serial path.
pub fn sample_magnitudes(
    evaluator: &LineEvaluator,
    grid: &[f64],
    parallel: bool,
    control: &ScanControl,
    started: Instant,
) -> Result<Vec<f64>, ScanError> {
    let sample = |t: f64| -> Result<f64, ScanError> {
        control.check(started)?;
        Ok(evaluator.magnitude(t)?)
    };
    if parallel {
        grid.par_iter().map(|&t| sample(t)).collect()
    } else {
        grid.iter().map(|&t| sample(t)).collect()
    }
}

/// Grid points whose magnitude is strictly below `threshold`.
pub fn threshold_candidates(grid: &[f64], magnitudes: &[f64], threshold: f64) -> Vec<ZeroCandidate> {
    grid.iter()
        .zip(magnitudes)
        .filter(|&(_, &m)| m < threshold)
        .map(|(&t, _)| ZeroCandidate::on_critical_line(t))
        .collect()
}

/// Indices of local minima in a sampled sequence.
///
/// A point qualifies when it is strictly below its left neighbour and no
/// greater than its right one. Endpoints compare against their single
/// neighbour. A flat run yields only its first index.
pub fn local_minima(values: &[f64]) -> Vec<usize> {
    let n = values.len();
    (0..n)
        .filter(|&k| {
            let left = k == 0 || values[k] < values[k - 1];
            let right = k + 1 == n || values[k] <= values[k + 1];
            left && right
        })
        .collect()
}

/// Bracket width at which refinement stops for a precision of `digits`.
pub fn refine_tolerance(digits: u32) -> f64 {
    10f64.powi(-(digits.min(300) as i32)).max(MIN_REFINE_TOLERANCE)
}

/// Refines each sampled local minimum and keeps those below `threshold`.
///
/// The reported point is the better of the refined minimum and the grid
/// sample it started from, so refinement never loses a threshold hit.
pub fn refined_candidates(
    evaluator: &LineEvaluator,
    grid: &[f64],
    magnitudes: &[f64],
    threshold: f64,
    max_iterations: usize,
    control: &ScanControl,
    started: Instant,
) -> Result<Vec<ZeroCandidate>, ScanError> {
    let options = GoldenOptions {
        max_iter: max_iterations,
        tol: refine_tolerance(evaluator.precision().digits()),
    };

    let mut candidates: Vec<ZeroCandidate> = Vec::new();
    for k in local_minima(magnitudes) {
        let lo = grid[k.saturating_sub(1)];
        let hi = grid[(k + 1).min(grid.len() - 1)];

        let (t, magnitude) = if hi > lo {
            let refined = minimize_golden(
                |t| -> Result<f64, ScanError> {
                    control.check(started)?;
                    Ok(evaluator.magnitude(t)?)
                },
                lo,
                hi,
                &options,
            )?;
            trace!(
                sample = grid[k],
                refined = refined.x,
                iterations = refined.iterations,
                magnitude = refined.f_min,
                "refined local minimum"
            );
            if refined.f_min < magnitudes[k] {
                (refined.x, refined.f_min)
            } else {
                (grid[k], magnitudes[k])
            }
        } else {
            (grid[k], magnitudes[k])
        };

        if magnitude < threshold && candidates.last().map_or(true, |last| last.im < t) {
            candidates.push(ZeroCandidate::on_critical_line(t));
        }
    }
    Ok(candidates)
}
