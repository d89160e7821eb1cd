//! Goodness-of-fit scoring.
//!
//! R² is clamped at 0 from below; a dataset with zero total variance scores 1
//! for any candidate (the `ssTot = 0` branch short-circuits — intentional
//! simplification, not variance-normalized). A single non-finite prediction
//! degrades the whole fit to worst-case scores instead of propagating NaN.

use crate::domain::{Coefficients, SamplePoint};
use crate::models::predict;

/// R² and RMSE for one candidate against one dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitMetrics {
    pub r_squared: f64,
    pub rmse: f64,
}

/// Score `coefficients` against `points`.
pub fn compute_metrics(points: &[SamplePoint], coefficients: &Coefficients) -> FitMetrics {
    let n = points.len();
    if n == 0 {
        return FitMetrics { r_squared: 0.0, rmse: 0.0 };
    }

    let y_mean = points.iter().map(|p| p.y).sum::<f64>() / n as f64;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for p in points {
        let y_pred = predict(coefficients, p.x);
        if !y_pred.is_finite() {
            return FitMetrics { r_squared: 0.0, rmse: f64::INFINITY };
        }
        ss_res += (p.y - y_pred) * (p.y - y_pred);
        ss_tot += (p.y - y_mean) * (p.y - y_mean);
    }

    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        (1.0 - ss_res / ss_tot).max(0.0)
    };
    let rmse = (ss_res / n as f64).sqrt();

    FitMetrics { r_squared, rmse }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(pairs: &[(f64, f64)]) -> Vec<SamplePoint> {
        pairs.iter().map(|&(x, y)| SamplePoint { x, y }).collect()
    }

    #[test]
    fn perfect_fit_scores_exactly_one() {
        let points = pts(&[(0.0, 3.0), (1.0, 5.0), (2.0, 7.0)]);
        let line = Coefficients::Linear { slope: 2.0, intercept: 3.0 };
        let m = compute_metrics(&points, &line);
        assert_eq!(m.r_squared, 1.0);
        assert_eq!(m.rmse, 0.0);
    }

    #[test]
    fn r_squared_is_clamped_at_zero() {
        // A predictor much worse than the mean would go negative unclamped.
        let points = pts(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        let bad = Coefficients::Linear { slope: -50.0, intercept: 0.0 };
        let m = compute_metrics(&points, &bad);
        assert_eq!(m.r_squared, 0.0);
        assert!(m.rmse > 0.0);
    }

    #[test]
    fn constant_dataset_short_circuits_to_one() {
        let points = pts(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)]);
        // Even a predictor with residuals scores 1 when total variance is zero.
        let off = Coefficients::Linear { slope: 0.0, intercept: 4.0 };
        let m = compute_metrics(&points, &off);
        assert_eq!(m.r_squared, 1.0);
        assert!(m.rmse > 0.0);
    }

    #[test]
    fn non_finite_prediction_degrades_to_worst_case() {
        let points = pts(&[(-1.0, 1.0), (1.0, 2.0)]);
        let log = Coefficients::Logarithmic { scale: 1.0, offset: 0.0 };
        let m = compute_metrics(&points, &log);
        assert_eq!(m.r_squared, 0.0);
        assert!(m.rmse.is_infinite());
    }

    #[test]
    fn empty_dataset_scores_zero() {
        let m = compute_metrics(&[], &Coefficients::Linear { slope: 1.0, intercept: 0.0 });
        assert_eq!(m.r_squared, 0.0);
        assert_eq!(m.rmse, 0.0);
    }
}
