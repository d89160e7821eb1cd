//! CSV ingest and normalization.
//!
//! This module turns a small user-authored CSV into a clean, ordered set of
//! `SamplePoint`s that are safe to fit.
//!
//! Design goals:
//! - **Lenient rows, strict file**: malformed rows are skipped and reported,
//!   but a file with no usable rows is a hard error (exit code 3)
//! - **Deterministic behavior**: points keep file order
//! - **Separation of concerns**: no fitting logic here

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::SamplePoint;
use crate::error::AppError;

/// Summary stats about the points actually used for fitting.
#[derive(Debug, Clone, Copy)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    /// 1-based line number in the input (header is line 1).
    pub line: usize,
    pub message: String,
}

/// Ingest output: normalized points + stats + row errors.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub points: Vec<SamplePoint>,
    pub stats: DatasetStats,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load and normalize a CSV file of `(x, y)` points.
pub fn load_points(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_points(file)
}

/// Read and normalize `(x, y)` points from any reader.
///
/// The header must contain `x` and `y` columns (matched case-insensitively).
pub fn read_points<R: Read>(reader: R) -> Result<IngestedData, AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let (x_idx, y_idx) = resolve_columns(&headers)?;

    let mut points = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (i, record) in rdr.records().enumerate() {
        // Header occupies line 1; data starts at line 2.
        let line = i + 2;
        rows_read += 1;

        let record = match record {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError { line, message: format!("unreadable row: {e}") });
                continue;
            }
        };

        match parse_row(&record, x_idx, y_idx) {
            Ok(point) => points.push(point),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    if points.is_empty() {
        return Err(AppError::new(3, "No usable data points in input."));
    }

    let stats = compute_stats(&points);
    let rows_used = points.len();
    Ok(IngestedData { points, stats, row_errors, rows_read, rows_used })
}

fn resolve_columns(headers: &StringRecord) -> Result<(usize, usize), AppError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    };

    match (find("x"), find("y")) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(AppError::new(
            2,
            "CSV must have 'x' and 'y' columns (case-insensitive).",
        )),
    }
}

fn parse_row(record: &StringRecord, x_idx: usize, y_idx: usize) -> Result<SamplePoint, String> {
    let field = |idx: usize, name: &str| -> Result<f64, String> {
        let raw = record
            .get(idx)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("missing {name} value"))?;
        let value: f64 = raw
            .parse()
            .map_err(|_| format!("invalid {name} value '{raw}'"))?;
        if !value.is_finite() {
            return Err(format!("non-finite {name} value '{raw}'"));
        }
        Ok(value)
    };

    Ok(SamplePoint { x: field(x_idx, "x")?, y: field(y_idx, "y")? })
}

fn compute_stats(points: &[SamplePoint]) -> DatasetStats {
    let mut stats = DatasetStats {
        n_points: points.len(),
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
    };
    for p in points {
        stats.x_min = stats.x_min.min(p.x);
        stats.x_max = stats.x_max.max(p.x);
        stats.y_min = stats.y_min.min(p.y);
        stats.y_max = stats.y_max.max(p.y);
    }
    stats
}
