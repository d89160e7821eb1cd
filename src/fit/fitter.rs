//! Closed-form fitting routines, one per family.
//!
//! All five fitters share the same contract:
//!
//! - a pure function of the input points
//! - inapplicable inputs (too few points, domain violations, singular normal
//!   equations) produce a non-applicable `FitResult` with the zero predictor —
//!   never an error
//! - the logarithmic / power / exponential fits linearize and delegate to the
//!   shared straight-line solver in `math::ols`

use crate::domain::{Coefficients, FitQuality, FitResult, ModelFamily, SamplePoint};
use crate::fit::metrics::compute_metrics;
use crate::math::{fit_line, solve_quadratic_normal};
use crate::report::format::render_formula;

/// A fitted `|a|` below this is reported as linear rather than as numerically
/// negligible curvature.
const NEGLIGIBLE_CURVATURE: f64 = 1e-4;

/// Fit one family to the dataset.
pub fn fit_family(family: ModelFamily, points: &[SamplePoint]) -> FitResult {
    match family {
        ModelFamily::Linear => fit_linear(points),
        ModelFamily::Quadratic => fit_quadratic(points),
        ModelFamily::Logarithmic => fit_logarithmic(points),
        ModelFamily::Power => fit_power(points),
        ModelFamily::Exponential => fit_exponential(points),
    }
}

/// Fit `y = m·x + b`.
pub fn fit_linear(points: &[SamplePoint]) -> FitResult {
    let Some(line) = fit_line(points) else {
        return not_applicable(ModelFamily::Linear, points.len());
    };
    let coefficients = Coefficients::Linear {
        slope: line.slope,
        intercept: line.intercept,
    };
    applicable(ModelFamily::Linear, coefficients, points)
}

/// Fit `y = a·x² + b·x + c` (requires ≥3 points).
///
/// A negligible fitted curvature degrades to the linear fit relabelled as
/// quadratic, so callers never see a meaningless `a ≈ 0` term.
pub fn fit_quadratic(points: &[SamplePoint]) -> FitResult {
    let Some(q) = solve_quadratic_normal(points) else {
        return not_applicable(ModelFamily::Quadratic, points.len());
    };

    if q.a.abs() < NEGLIGIBLE_CURVATURE {
        let mut fit = fit_linear(points);
        fit.family = ModelFamily::Quadratic;
        return fit;
    }

    let coefficients = Coefficients::Quadratic { a: q.a, b: q.b, c: q.c };
    applicable(ModelFamily::Quadratic, coefficients, points)
}

/// Fit `y = a·ln(x) + c` (requires every x > 0).
pub fn fit_logarithmic(points: &[SamplePoint]) -> FitResult {
    if points.len() < 2 || points.iter().any(|p| p.x <= 0.0) {
        return not_applicable(ModelFamily::Logarithmic, points.len());
    }

    let transformed: Vec<SamplePoint> = points
        .iter()
        .map(|p| SamplePoint { x: p.x.ln(), y: p.y })
        .collect();
    let Some(line) = fit_line(&transformed) else {
        return not_applicable(ModelFamily::Logarithmic, points.len());
    };

    let coefficients = Coefficients::Logarithmic {
        scale: line.slope,
        offset: line.intercept,
    };
    applicable(ModelFamily::Logarithmic, coefficients, points)
}

/// Fit `y = A·x^p` (requires every x > 0 and every y > 0).
pub fn fit_power(points: &[SamplePoint]) -> FitResult {
    if points.len() < 2 || points.iter().any(|p| p.x <= 0.0 || p.y <= 0.0) {
        return not_applicable(ModelFamily::Power, points.len());
    }

    let transformed: Vec<SamplePoint> = points
        .iter()
        .map(|p| SamplePoint { x: p.x.ln(), y: p.y.ln() })
        .collect();
    let Some(line) = fit_line(&transformed) else {
        return not_applicable(ModelFamily::Power, points.len());
    };

    let coefficients = Coefficients::Power {
        scale: line.intercept.exp(),
        exponent: line.slope,
    };
    applicable(ModelFamily::Power, coefficients, points)
}

/// Fit `y = A·r^x` (requires every y > 0; x unconstrained).
pub fn fit_exponential(points: &[SamplePoint]) -> FitResult {
    if points.len() < 2 || points.iter().any(|p| p.y <= 0.0) {
        return not_applicable(ModelFamily::Exponential, points.len());
    }

    let transformed: Vec<SamplePoint> = points
        .iter()
        .map(|p| SamplePoint { x: p.x, y: p.y.ln() })
        .collect();
    let Some(line) = fit_line(&transformed) else {
        return not_applicable(ModelFamily::Exponential, points.len());
    };

    let coefficients = Coefficients::Exponential {
        scale: line.intercept.exp(),
        base: line.slope.exp(),
    };
    applicable(ModelFamily::Exponential, coefficients, points)
}

fn applicable(family: ModelFamily, coefficients: Coefficients, points: &[SamplePoint]) -> FitResult {
    let metrics = compute_metrics(points, &coefficients);
    FitResult {
        family,
        formula: render_formula(&coefficients),
        coefficients,
        quality: FitQuality {
            r_squared: metrics.r_squared,
            rmse: metrics.rmse,
            n: points.len(),
        },
        applicable: true,
    }
}

/// The deterministic empty result: zero predictor, worst R², no formula.
pub fn not_applicable(family: ModelFamily, n: usize) -> FitResult {
    FitResult {
        family,
        formula: String::new(),
        coefficients: Coefficients::Linear { slope: 0.0, intercept: 0.0 },
        quality: FitQuality { r_squared: 0.0, rmse: 0.0, n },
        applicable: false,
    }
}
