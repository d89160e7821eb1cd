//! Two-variable ordinary least squares.
//!
//! All non-linear families in this project (logarithmic, power, exponential)
//! are fitted by a monotonic change of variables followed by a straight-line
//! fit, so this solver is deliberately a standalone pure function over any
//! point slice: callers hand it raw or transformed points alike.
//!
//! Implementation choices:
//! - Closed-form normal equations from the running sums `Σx, Σy, Σxy, Σx²`.
//!   Datasets here are tiny (human-entered, a few dozen points at most), so
//!   there is no need for anything fancier.
//! - A denominator below `DEGENERATE_EPS` (all x equal) yields `None` rather
//!   than exploding coefficients.

use crate::domain::SamplePoint;
use crate::math::DEGENERATE_EPS;

/// A fitted straight line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Fit `y = m·x + b` by ordinary least squares.
///
/// Returns `None` when fewer than 2 points are given or the system is
/// degenerate (all x identical).
pub fn fit_line(points: &[SamplePoint]) -> Option<LineFit> {
    let n = points.len();
    if n < 2 {
        return None;
    }

    let n_f = n as f64;
    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut sxy = 0.0;
    let mut sx2 = 0.0;
    for p in points {
        sx += p.x;
        sy += p.y;
        sxy += p.x * p.y;
        sx2 += p.x * p.x;
    }

    let denom = n_f * sx2 - sx * sx;
    if denom.abs() < DEGENERATE_EPS {
        return None;
    }

    let slope = (n_f * sxy - sx * sy) / denom;
    let intercept = (sy - slope * sx) / n_f;
    Some(LineFit { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(pairs: &[(f64, f64)]) -> Vec<SamplePoint> {
        pairs.iter().map(|&(x, y)| SamplePoint { x, y }).collect()
    }

    #[test]
    fn fit_line_recovers_exact_coefficients() {
        let line = fit_line(&pts(&[(0.0, 3.0), (1.0, 5.0), (2.0, 7.0), (3.0, 9.0)])).unwrap();
        assert_eq!(line.slope, 2.0);
        assert_eq!(line.intercept, 3.0);
    }

    #[test]
    fn fit_line_rejects_identical_x() {
        assert!(fit_line(&pts(&[(2.0, 1.0), (2.0, 3.0), (2.0, 5.0)])).is_none());
    }

    #[test]
    fn fit_line_rejects_single_point() {
        assert!(fit_line(&pts(&[(1.0, 1.0)])).is_none());
    }
}
