//! Reporting utilities: residuals and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod describe;
pub mod format;

pub use describe::*;
pub use format::*;

use crate::domain::{FitResult, PointResidual, SamplePoint};
use crate::error::AppError;

/// Compute fitted values and residuals for each point.
pub fn compute_residuals(
    points: &[SamplePoint],
    fit: &FitResult,
) -> Result<Vec<PointResidual>, AppError> {
    let mut out = Vec::with_capacity(points.len());
    for p in points {
        let y_fit = fit.predict(p.x);
        if !y_fit.is_finite() {
            return Err(AppError::new(
                4,
                "Non-finite model prediction during residual computation.",
            ));
        }
        out.push(PointResidual {
            point: *p,
            y_fit,
            residual: p.y - y_fit,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fitter::fit_linear;

    #[test]
    fn compute_residuals_basic() {
        let points = vec![
            SamplePoint { x: 0.0, y: 3.0 },
            SamplePoint { x: 1.0, y: 5.5 },
            SamplePoint { x: 2.0, y: 7.0 },
        ];
        let fit = fit_linear(&[
            SamplePoint { x: 0.0, y: 3.0 },
            SamplePoint { x: 1.0, y: 5.0 },
            SamplePoint { x: 2.0, y: 7.0 },
        ]);

        let residuals = compute_residuals(&points, &fit).unwrap();
        assert_eq!(residuals.len(), 3);
        assert!((residuals[0].residual).abs() < 1e-12);
        assert!((residuals[1].residual - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_predictor_residuals_are_the_observations() {
        let points = vec![SamplePoint { x: 1.0, y: 4.0 }];
        let fit = crate::fit::fitter::not_applicable(crate::domain::ModelFamily::Linear, 1);
        let residuals = compute_residuals(&points, &fit).unwrap();
        assert_eq!(residuals[0].y_fit, 0.0);
        assert_eq!(residuals[0].residual, 4.0);
    }
}
