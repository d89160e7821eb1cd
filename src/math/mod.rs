//! Mathematical utilities: closed-form least squares solvers.

pub mod cramer;
pub mod ols;

pub use cramer::*;
pub use ols::*;

/// Threshold below which a normal-equation denominator or determinant is
/// treated as singular.
pub const DEGENERATE_EPS: f64 = 1e-12;
