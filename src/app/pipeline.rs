//! Shared "fit pipeline" logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV ingest -> fit/selection -> residuals
//!
//! The CLI can then focus on presentation (printing and exports).

use crate::domain::{FitConfig, PointResidual};
use crate::error::AppError;
use crate::fit::selection::ModelSelection;
use crate::io::ingest::IngestedData;

/// All computed outputs of a single `bestfit fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub selection: ModelSelection,
    pub residuals: Vec<PointResidual>,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    // 1) Ingest and validate the CSV.
    let ingest = crate::io::ingest::load_points(&config.csv_path)?;

    // 2) Fit the requested model(s) and select the best.
    let selection = crate::fit::selection::fit_and_select(&ingest.points, config.model);

    // 3) Compute residuals against the chosen model.
    let residuals = crate::report::compute_residuals(&ingest.points, &selection.best)?;

    Ok(RunOutput { ingest, selection, residuals })
}
