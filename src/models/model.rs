//! Predictor evaluation for the five fitted families.
//!
//! `predict` is the only place curve shapes are evaluated; the metrics,
//! residual, export, and grid code all route through it.

use crate::domain::Coefficients;

/// Predict `y(x)` for the given coefficients.
///
/// Domain violations are not masked: a logarithmic predictor evaluated at
/// `x <= 0` returns NaN/-∞, which the metrics layer maps to worst-case scores.
pub fn predict(coefficients: &Coefficients, x: f64) -> f64 {
    match *coefficients {
        Coefficients::Linear { slope, intercept } => slope * x + intercept,
        Coefficients::Quadratic { a, b, c } => a * x * x + b * x + c,
        Coefficients::Logarithmic { scale, offset } => scale * x.ln() + offset,
        Coefficients::Power { scale, exponent } => scale * x.powf(exponent),
        Coefficients::Exponential { scale, base } => scale * base.powf(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_dispatches_per_shape() {
        let line = Coefficients::Linear { slope: 2.0, intercept: 3.0 };
        assert_eq!(predict(&line, 4.0), 11.0);

        let quad = Coefficients::Quadratic { a: 1.0, b: -2.0, c: 1.0 };
        assert_eq!(predict(&quad, 3.0), 4.0);

        let log = Coefficients::Logarithmic { scale: 2.0, offset: 1.0 };
        assert!((predict(&log, std::f64::consts::E) - 3.0).abs() < 1e-12);

        let pow = Coefficients::Power { scale: 2.0, exponent: 3.0 };
        assert!((predict(&pow, 2.0) - 16.0).abs() < 1e-12);

        let exp = Coefficients::Exponential { scale: 100.0, base: 1.5 };
        assert!((predict(&exp, 2.0) - 225.0).abs() < 1e-9);
    }

    #[test]
    fn zero_line_is_the_trivial_fallback_predictor() {
        let zero = Coefficients::Linear { slope: 0.0, intercept: 0.0 };
        for x in [-10.0, 0.0, 3.5] {
            assert_eq!(predict(&zero, x), 0.0);
        }
    }

    #[test]
    fn log_predictor_is_non_finite_outside_domain() {
        let log = Coefficients::Logarithmic { scale: 1.0, offset: 0.0 };
        assert!(!predict(&log, 0.0).is_finite());
        assert!(predict(&log, -1.0).is_nan());
    }
}
