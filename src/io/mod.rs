//! Input/output helpers.
//!
//! - CSV ingest + validation (`ingest`)
//! - per-point result export (CSV) (`export`)
//! - fitted curve export (JSON) (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
