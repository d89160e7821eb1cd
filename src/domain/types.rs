//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single observation: an immutable `(x, y)` pair.
///
/// A dataset is an ordered `Vec<SamplePoint>`; insertion order is preserved for
/// display even though the math does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// The closed set of function families the engine can fit.
///
/// "Automatic" is deliberately *not* a family: it is a selection mode
/// (`ModelChoice::Auto`) and never a fit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    Linear,
    Quadratic,
    Logarithmic,
    Power,
    Exponential,
}

impl ModelFamily {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelFamily::Linear => "Linear",
            ModelFamily::Quadratic => "Quadratic",
            ModelFamily::Logarithmic => "Logarithmic",
            ModelFamily::Power => "Power",
            ModelFamily::Exponential => "Exponential",
        }
    }

    /// Minimum number of points required for the family to be fittable at all.
    pub fn min_points(self) -> usize {
        match self {
            ModelFamily::Quadratic => 3,
            _ => 2,
        }
    }
}

/// Which model(s) to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelChoice {
    /// Fit all families and keep the best-explaining one.
    Auto,
    Linear,
    Quadratic,
    Logarithmic,
    Power,
    Exponential,
    /// Fit all families and report every diagnostic (best still chosen as in `Auto`).
    All,
}

impl ModelChoice {
    /// The single family requested, or `None` for `Auto`/`All`.
    pub fn family(self) -> Option<ModelFamily> {
        match self {
            ModelChoice::Auto | ModelChoice::All => None,
            ModelChoice::Linear => Some(ModelFamily::Linear),
            ModelChoice::Quadratic => Some(ModelFamily::Quadratic),
            ModelChoice::Logarithmic => Some(ModelFamily::Logarithmic),
            ModelChoice::Power => Some(ModelFamily::Power),
            ModelChoice::Exponential => Some(ModelFamily::Exponential),
        }
    }
}

/// Fitted coefficients, tagged by the shape they parameterize.
///
/// Keeping this a plain tagged union (instead of storing predictor closures in
/// fit results) makes `FitResult` serializable and trivially comparable; the
/// single dispatch point is `models::predict`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Coefficients {
    /// `y = m·x + b`
    Linear { slope: f64, intercept: f64 },
    /// `y = a·x² + b·x + c`
    Quadratic { a: f64, b: f64, c: f64 },
    /// `y = a·ln(x) + c`
    Logarithmic { scale: f64, offset: f64 },
    /// `y = A·x^p`
    Power { scale: f64, exponent: f64 },
    /// `y = A·r^x`
    Exponential { scale: f64, base: f64 },
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    /// Coefficient of determination, clamped to `[0, 1]`.
    pub r_squared: f64,
    /// Root-mean-square error; `+∞` when a prediction was non-finite.
    pub rmse: f64,
    /// Number of points the fit was scored against.
    pub n: usize,
}

/// Output of fitting one family to one dataset.
///
/// Produced fresh on every fit call; holds no reference back to the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub family: ModelFamily,
    /// Rendered formula, e.g. `y = 2 · x + 3`. Empty when not applicable.
    pub formula: String,
    pub coefficients: Coefficients,
    pub quality: FitQuality,
    /// Whether the family's domain preconditions held and the normal equations
    /// were well-conditioned. A non-applicable result carries the zero
    /// predictor, not an error.
    pub applicable: bool,
}

impl FitResult {
    /// Predicted y at `x` under the fitted coefficients.
    pub fn predict(&self, x: f64) -> f64 {
        crate::models::predict(&self.coefficients, x)
    }

    /// Named coefficients in family-conventional order (`m`/`b`, `a`/`b`/`c`,
    /// `a`/`c`, `A`/`p`, `A`/`r`).
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        match self.coefficients {
            Coefficients::Linear { slope, intercept } => vec![("m", slope), ("b", intercept)],
            Coefficients::Quadratic { a, b, c } => vec![("a", a), ("b", b), ("c", c)],
            Coefficients::Logarithmic { scale, offset } => vec![("a", scale), ("c", offset)],
            Coefficients::Power { scale, exponent } => vec![("A", scale), ("p", exponent)],
            Coefficients::Exponential { scale, base } => vec![("A", scale), ("r", base)],
        }
    }
}

/// A per-point fitted result (used for tables and exports).
#[derive(Debug, Clone)]
pub struct PointResidual {
    pub point: SamplePoint,
    pub y_fit: f64,
    pub residual: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub csv_path: PathBuf,
    pub model: ModelChoice,
    pub x_label: String,
    pub y_label: String,
    pub show_points: bool,
    pub export_results: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}
