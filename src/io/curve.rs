//! Fitted curve JSON export.
//!
//! The exported document is self-describing: it carries the chosen model
//! (family, formula, coefficients, quality) plus a fitted grid sampled across
//! the observed x range, so downstream tooling can re-plot the curve without
//! re-deriving the engine's math.

use std::fs::File;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::FitResult;
use crate::error::AppError;
use crate::io::ingest::DatasetStats;

/// Number of grid samples across the observed x range.
const GRID_STEPS: usize = 100;

/// Fitted values on an x-grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated: NaiveDate,
    pub x_label: String,
    pub y_label: String,
    pub fit: FitResult,
    pub grid: CurveGrid,
}

/// Build the export document for a fit.
pub fn build_curve_file(
    fit: &FitResult,
    stats: &DatasetStats,
    x_label: &str,
    y_label: &str,
) -> CurveFile {
    CurveFile {
        tool: "bestfit".to_string(),
        generated: Local::now().date_naive(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        fit: fit.clone(),
        grid: fitted_grid(fit, stats.x_min, stats.x_max),
    }
}

/// Write the curve JSON to disk.
pub fn write_curve_json(
    path: &Path,
    fit: &FitResult,
    stats: &DatasetStats,
    x_label: &str,
    y_label: &str,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(4, format!("Failed to create curve JSON '{}': {e}", path.display()))
    })?;

    let doc = build_curve_file(fit, stats, x_label, y_label);
    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::new(4, format!("Failed to write curve JSON: {e}")))?;
    Ok(())
}

/// Sample the fitted curve on an evenly spaced grid over `[x_min, x_max]`.
pub fn fitted_grid(fit: &FitResult, x_min: f64, x_max: f64) -> CurveGrid {
    let mut xs = Vec::with_capacity(GRID_STEPS + 1);
    let mut ys = Vec::with_capacity(GRID_STEPS + 1);

    let span = x_max - x_min;
    for i in 0..=GRID_STEPS {
        let x = x_min + span * i as f64 / GRID_STEPS as f64;
        xs.push(x);
        ys.push(fit.predict(x));
    }

    CurveGrid { x: xs, y: ys }
}
