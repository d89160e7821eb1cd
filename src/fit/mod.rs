//! Curve fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit each family by closed-form least squares (`fitter`)
//! - score candidates with R² / RMSE (`metrics`)
//! - select the best-explaining model deterministically (`selection`)

pub mod fitter;
pub mod metrics;
pub mod selection;

pub use fitter::*;
pub use metrics::*;
pub use selection::*;
