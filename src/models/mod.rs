//! Model family evaluation.
//!
//! Predictors are implemented as a single pure dispatch over `Coefficients` so
//! that fitting, scoring, and reporting code can all stay generic.

pub mod model;

pub use model::*;
