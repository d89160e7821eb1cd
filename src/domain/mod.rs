//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input configuration enums (`ModelChoice`)
//! - sample points (`SamplePoint`)
//! - fit outputs (`FitResult`, `Coefficients`, `FitQuality`)

pub mod types;

pub use types::*;
