//! Model selection across the five families.
//!
//! Selection rules:
//! 1. Fewer than 2 points: return the (non-applicable) linear fit.
//! 2. If the linear fit is applicable and R² > 0.999, return it immediately —
//!    the simplest model already explains the data almost perfectly.
//! 3. Otherwise fit every family, drop inapplicable or non-finite-R²
//!    candidates, and stable-sort by descending R².
//! 4. R² differences below 0.001 count as ties; the stable sort over the fixed
//!    fitting order (Linear, Logarithmic, Quadratic, Exponential, Power) makes
//!    the outcome deterministic: the first-listed of tied candidates wins.
//! 5. No applicable candidate at all: fall back to the linear fit.

use std::cmp::Ordering;

use crate::domain::{FitResult, ModelChoice, ModelFamily, SamplePoint};
use crate::fit::fitter::{fit_family, fit_linear};

/// R² above which the linear fit wins outright.
const EARLY_EXIT_R2: f64 = 0.999;

/// R² differences below this are treated as equal during ranking.
const R2_TIE_EPS: f64 = 0.001;

/// Fitting (and tie-break) order for automatic selection.
pub const FIT_ORDER: [ModelFamily; 5] = [
    ModelFamily::Linear,
    ModelFamily::Logarithmic,
    ModelFamily::Quadratic,
    ModelFamily::Exponential,
    ModelFamily::Power,
];

/// Output of fitting + selection.
#[derive(Debug, Clone)]
pub struct ModelSelection {
    pub best: FitResult,
    /// Applicable fits, in fitting order (for diagnostics).
    pub fits: Vec<FitResult>,
    /// Families that could not be fitted and why (for diagnostics).
    pub skipped: Vec<(ModelFamily, String)>,
}

/// Return the single fit judged the best explanation of the dataset.
///
/// Pure and total: insufficient or degenerate input yields a non-applicable
/// linear result, never an error.
pub fn select_best_model(points: &[SamplePoint]) -> FitResult {
    if points.len() < 2 {
        return fit_linear(points);
    }

    let linear = fit_linear(points);
    if linear.applicable && linear.quality.r_squared > EARLY_EXIT_R2 {
        return linear;
    }

    let mut candidates: Vec<FitResult> = FIT_ORDER
        .iter()
        .map(|&family| {
            if family == ModelFamily::Linear {
                linear.clone()
            } else {
                fit_family(family, points)
            }
        })
        .filter(|fit| fit.applicable && fit.quality.r_squared.is_finite())
        .collect();

    if candidates.is_empty() {
        return linear;
    }

    // Vec::sort_by is stable, so near-equal scores keep the fitting order.
    candidates.sort_by(|a, b| {
        let diff = b.quality.r_squared - a.quality.r_squared;
        if diff.abs() < R2_TIE_EPS {
            Ordering::Equal
        } else if diff > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    });
    candidates.remove(0)
}

/// Fit per the requested mode and collect diagnostics.
///
/// A single-family request returns that family's fit as `best` even when it is
/// not applicable; `Auto`/`All` run the full selection.
pub fn fit_and_select(points: &[SamplePoint], choice: ModelChoice) -> ModelSelection {
    if let Some(family) = choice.family() {
        let fit = fit_family(family, points);
        let (fits, skipped) = if fit.applicable {
            (vec![fit.clone()], Vec::new())
        } else {
            (Vec::new(), vec![(family, skip_reason(family, points))])
        };
        return ModelSelection { best: fit, fits, skipped };
    }

    let mut fits = Vec::new();
    let mut skipped = Vec::new();
    for family in FIT_ORDER {
        let fit = fit_family(family, points);
        if fit.applicable {
            fits.push(fit);
        } else {
            skipped.push((family, skip_reason(family, points)));
        }
    }

    ModelSelection {
        best: select_best_model(points),
        fits,
        skipped,
    }
}

/// Human-readable reason a family was not applicable to this dataset.
fn skip_reason(family: ModelFamily, points: &[SamplePoint]) -> String {
    if points.len() < family.min_points() {
        return format!("needs at least {} points", family.min_points());
    }
    match family {
        ModelFamily::Logarithmic if points.iter().any(|p| p.x <= 0.0) => {
            "requires every x > 0".to_string()
        }
        ModelFamily::Power if points.iter().any(|p| p.x <= 0.0 || p.y <= 0.0) => {
            "requires every x > 0 and every y > 0".to_string()
        }
        ModelFamily::Exponential if points.iter().any(|p| p.y <= 0.0) => {
            "requires every y > 0".to_string()
        }
        _ => "degenerate normal equations (no x variation)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(pairs: &[(f64, f64)]) -> Vec<SamplePoint> {
        pairs.iter().map(|&(x, y)| SamplePoint { x, y }).collect()
    }

    #[test]
    fn selector_prefers_quadratic_on_exact_parabola() {
        // The linear fit scores R²=0 here, well below the early-exit bar.
        let points = pts(&[(-2.0, 4.0), (-1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
        let best = select_best_model(&points);
        assert_eq!(best.family, ModelFamily::Quadratic);
        assert_eq!(best.quality.r_squared, 1.0);
        assert_eq!(best.formula, "y = x²");
    }

    #[test]
    fn selector_early_exits_on_near_perfect_linear() {
        let points = pts(&[(1.0, 5.0), (2.0, 7.0), (3.0, 9.0), (4.0, 11.0)]);
        let best = select_best_model(&points);
        assert_eq!(best.family, ModelFamily::Linear);
        assert_eq!(best.quality.r_squared, 1.0);
    }

    #[test]
    fn selector_degrades_gracefully_below_two_points() {
        let best = select_best_model(&pts(&[(1.0, 1.0)]));
        assert_eq!(best.family, ModelFamily::Linear);
        assert!(!best.applicable);
        assert_eq!(best.predict(3.0), 0.0);
    }

    #[test]
    fn selector_falls_back_to_linear_when_nothing_applies() {
        // All x identical: every family is degenerate or out of domain.
        let points = pts(&[(2.0, 1.0), (2.0, 2.0), (2.0, 3.0)]);
        let best = select_best_model(&points);
        assert_eq!(best.family, ModelFamily::Linear);
        assert!(!best.applicable);
    }

    #[test]
    fn selection_is_idempotent() {
        let points = pts(&[(1.0, 2.1), (2.0, 3.9), (3.0, 9.2), (4.0, 15.8), (5.0, 26.0)]);
        let first = select_best_model(&points);
        let second = select_best_model(&points);
        assert_eq!(first, second);
    }

    #[test]
    fn ties_keep_the_fitting_order() {
        // A constant dataset scores R²=1 for every applicable family (the
        // zero-variance short-circuit), so everything ties. But the linear fit
        // also hits the early exit, which is the same first-listed answer.
        let points = pts(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
        let best = select_best_model(&points);
        assert_eq!(best.family, ModelFamily::Linear);
    }

    #[test]
    fn single_family_request_is_returned_even_when_inapplicable() {
        let points = pts(&[(1.0, -1.0), (2.0, -2.0), (3.0, -3.0)]);
        let selection = fit_and_select(&points, ModelChoice::Exponential);
        assert_eq!(selection.best.family, ModelFamily::Exponential);
        assert!(!selection.best.applicable);
        assert_eq!(selection.fits.len(), 0);
        assert_eq!(selection.skipped.len(), 1);
        assert!(selection.skipped[0].1.contains("y > 0"));
    }

    #[test]
    fn auto_selection_reports_skipped_families() {
        // Negative x knocks out logarithmic and power; zero y knocks out
        // exponential as well.
        let points = pts(&[(-2.0, 4.0), (-1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
        let selection = fit_and_select(&points, ModelChoice::Auto);
        assert_eq!(selection.best.family, ModelFamily::Quadratic);
        assert_eq!(selection.fits.len(), 2); // linear + quadratic
        let skipped: Vec<ModelFamily> = selection.skipped.iter().map(|s| s.0).collect();
        assert_eq!(
            skipped,
            vec![ModelFamily::Logarithmic, ModelFamily::Exponential, ModelFamily::Power]
        );
    }
}
