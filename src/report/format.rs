//! Numeral formatting, formula rendering, and the terminal run summary.
//!
//! The numeral formatter only ever feeds display strings (formulas, tables);
//! it never touches the numeric coefficients or predictions.

use crate::domain::{Coefficients, FitConfig, PointResidual};
use crate::fit::selection::ModelSelection;
use crate::io::ingest::IngestedData;

/// Decimal digits used in formulas unless a caller asks otherwise.
pub const DEFAULT_PRECISION: usize = 2;

/// Tolerance for recognizing log₂ / log₁₀ / ln coefficients.
const LOG_BASE_TOL: f64 = 0.01;

/// Compact display form of a coefficient with the default precision.
pub fn format_value(value: f64) -> String {
    format_value_prec(value, DEFAULT_PRECISION)
}

/// Compact display form of a coefficient.
///
/// - NaN renders as `"?"`.
/// - Magnitudes below 1e-4 render as `"0"`.
/// - Values within 0.005 of an integer snap to that integer.
/// - Everything else renders with `precision` decimals, then drops trailing
///   zeros (and a dangling decimal point).
pub fn format_value_prec(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "?".to_string();
    }
    if value.abs() < 1e-4 {
        return "0".to_string();
    }

    let rounded = value.round();
    if (value - rounded).abs() < 0.005 {
        // Small negatives round to -0.0; display that as plain "0".
        if rounded == 0.0 {
            return "0".to_string();
        }
        return format!("{rounded}");
    }

    let s = format!("{value:.precision$}");
    if let Some(stripped) = s.strip_suffix(".00") {
        return stripped.to_string();
    }
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Render the display formula for a set of fitted coefficients.
pub fn render_formula(coefficients: &Coefficients) -> String {
    match *coefficients {
        Coefficients::Linear { slope, intercept } => render_linear(slope, intercept),
        Coefficients::Quadratic { a, b, c } => render_quadratic(a, b, c),
        Coefficients::Logarithmic { scale, offset } => render_logarithmic(scale, offset),
        Coefficients::Power { scale, exponent } => {
            format!("y = {} · x^({})", format_value(scale), format_value(exponent))
        }
        Coefficients::Exponential { scale, base } => render_exponential(scale, base),
    }
}

fn render_linear(m: f64, b: f64) -> String {
    let m_str = if m == 1.0 {
        "x".to_string()
    } else if m == -1.0 {
        "-x".to_string()
    } else if m == 0.0 {
        String::new()
    } else {
        format!("{} · x", format_value(m))
    };

    let b_str = if b == 0.0 {
        if m == 0.0 { "0".to_string() } else { String::new() }
    } else if b > 0.0 {
        format!("{}{}", if m == 0.0 { "" } else { " + " }, format_value(b))
    } else {
        format!(" - {}", format_value(-b))
    };

    format!("y = {m_str}{b_str}")
}

fn render_quadratic(a: f64, b: f64, c: f64) -> String {
    let a_str = if a == 0.0 {
        String::new()
    } else if a == 1.0 {
        "x²".to_string()
    } else if a == -1.0 {
        "-x²".to_string()
    } else {
        format!("{}·x²", format_value(a))
    };

    let b_str = if b == 0.0 {
        String::new()
    } else if b > 0.0 {
        format!(" + {}·x", format_value(b))
    } else {
        format!(" - {}·x", format_value(-b))
    };

    format!("y = {a_str}{b_str}{}", signed_term(c))
}

fn render_logarithmic(a: f64, c: f64) -> String {
    let c_str = signed_term(c);
    let ln2 = std::f64::consts::LN_2;
    let ln10 = std::f64::consts::LN_10;

    if (a - 1.0 / ln2).abs() < LOG_BASE_TOL {
        format!("y = log₂(x){c_str}")
    } else if (a - 1.0 / ln10).abs() < LOG_BASE_TOL {
        format!("y = log₁₀(x){c_str}")
    } else if (a - 1.0).abs() < LOG_BASE_TOL {
        format!("y = ln(x){c_str}")
    } else {
        format!("y = {} · ln(x){c_str}", format_value(a))
    }
}

fn render_exponential(scale: f64, base: f64) -> String {
    // Near-unity growth factors need 3 decimals to stay distinguishable from 1.
    let base_str = if base > 1.01 || base < 0.99 {
        format_value(base)
    } else {
        format!("{base:.3}")
    };
    format!("y = {} · ({base_str})^x", format_value(scale))
}

/// Trailing `" + v"` / `" - v"` term, empty when the value is exactly zero.
fn signed_term(v: f64) -> String {
    if v == 0.0 {
        String::new()
    } else if v > 0.0 {
        format!(" + {}", format_value(v))
    } else {
        format!(" - {}", format_value(-v))
    }
}

/// Format the full run summary (dataset stats + fit diagnostics + chosen model).
pub fn format_run_summary(
    ingest: &IngestedData,
    selection: &ModelSelection,
    config: &FitConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== bestfit - Automatic Curve Fit ===\n");
    out.push_str(&format!(
        "Input: {} | rows read={} used={}\n",
        config.csv_path.display(),
        ingest.rows_read,
        ingest.rows_used,
    ));
    out.push_str(&format!(
        "Points: n={} | x=[{:.3}, {:.3}] | y=[{:.3}, {:.3}]\n",
        ingest.stats.n_points,
        ingest.stats.x_min,
        ingest.stats.x_max,
        ingest.stats.y_min,
        ingest.stats.y_max
    ));
    for err in &ingest.row_errors {
        out.push_str(&format!("  (skipped row {}) {}\n", err.line, err.message));
    }

    out.push_str("\nModel diagnostics:\n");
    for fit in &selection.fits {
        let chosen = if fit.family == selection.best.family && selection.best.applicable {
            "*"
        } else {
            " "
        };
        out.push_str(&format!(
            "{chosen} {:<12} R²={:.4} RMSE={:.4}\n",
            fit.family.display_name(),
            fit.quality.r_squared,
            fit.quality.rmse
        ));
    }
    for (family, reason) in &selection.skipped {
        out.push_str(&format!("  (skipped {}) {reason}\n", family.display_name()));
    }

    out.push_str("\nBest model:\n");
    if selection.best.applicable {
        out.push_str(&format!("- family : {}\n", selection.best.family.display_name()));
        out.push_str(&format!("- formula: {}\n", selection.best.formula));
        let params: Vec<String> = selection
            .best
            .parameters()
            .iter()
            .map(|(name, value)| format!("{name}={value:.6}"))
            .collect();
        out.push_str(&format!("- params : {}\n", params.join(", ")));
        out.push_str(&format!(
            "- quality: R²={:.4} RMSE={:.4} (n={})\n",
            selection.best.quality.r_squared,
            selection.best.quality.rmse,
            selection.best.quality.n
        ));
    } else {
        out.push_str("- no applicable model (need at least 2 points with varying x)\n");
    }

    out
}

/// Format the per-point table (observed vs fitted).
pub fn format_point_table(residuals: &[PointResidual]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>12} {:>12} {:>12} {:>12}\n",
        "x", "y", "y_fit", "residual"
    ));
    out.push_str(&format!("{:-<12} {:-<12} {:-<12} {:-<12}\n", "", "", "", ""));
    for r in residuals {
        out.push_str(&format!(
            "{:>12.4} {:>12.4} {:>12.4} {:>12.4}\n",
            r.point.x, r.point.y, r.y_fit, r.residual
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_snaps_and_strips() {
        assert_eq!(format_value(2.999), "3");
        assert_eq!(format_value(0.00001), "0");
        assert_eq!(format_value(1.5), "1.5");
        assert_eq!(format_value(2.0), "2");
        assert_eq!(format_value(-2.5), "-2.5");
        assert_eq!(format_value(-0.002), "0");
        assert_eq!(format_value(f64::NAN), "?");
        assert_eq!(format_value(0.12), "0.12");
    }

    #[test]
    fn format_value_prec_widens_cleanly() {
        assert_eq!(format_value_prec(1.2345, 3), "1.234");
        assert_eq!(format_value_prec(1.2000, 4), "1.2");
    }

    #[test]
    fn linear_formula_special_cases() {
        let f = |m, b| render_formula(&Coefficients::Linear { slope: m, intercept: b });
        assert_eq!(f(2.0, 3.0), "y = 2 · x + 3");
        assert_eq!(f(1.0, 0.0), "y = x");
        assert_eq!(f(-1.0, 2.0), "y = -x + 2");
        assert_eq!(f(0.0, 0.0), "y = 0");
        assert_eq!(f(0.0, 4.0), "y = 4");
        assert_eq!(f(2.0, -3.0), "y = 2 · x - 3");
    }

    #[test]
    fn quadratic_formula_omits_zero_terms() {
        let f = |a, b, c| render_formula(&Coefficients::Quadratic { a, b, c });
        assert_eq!(f(1.0, 0.0, 0.0), "y = x²");
        assert_eq!(f(-1.0, 2.0, -1.0), "y = -x² + 2·x - 1");
        assert_eq!(f(2.5, 0.0, 3.0), "y = 2.5·x² + 3");
    }

    #[test]
    fn logarithmic_formula_detects_common_bases() {
        let f = |a, c| render_formula(&Coefficients::Logarithmic { scale: a, offset: c });
        assert_eq!(f(1.0 / std::f64::consts::LN_2, 1.0), "y = log₂(x) + 1");
        assert_eq!(f(1.0 / std::f64::consts::LN_10, 0.0), "y = log₁₀(x)");
        assert_eq!(f(1.0, -2.0), "y = ln(x) - 2");
        assert_eq!(f(3.0, 0.0), "y = 3 · ln(x)");
    }

    #[test]
    fn exponential_formula_widens_near_unity_bases() {
        let f = |scale, base| render_formula(&Coefficients::Exponential { scale, base });
        assert_eq!(f(100.0, 1.5), "y = 100 · (1.5)^x");
        assert_eq!(f(50.0, 1.005), "y = 50 · (1.005)^x");
        assert_eq!(f(50.0, 0.995), "y = 50 · (0.995)^x");
    }
}
