//! Command-line parsing for the curve-fitting tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{ModelChoice, ModelFamily};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bestfit", version, about = "Automatic least-squares curve fitting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a CSV of (x, y) points, print diagnostics, and optionally export.
    Fit(FitArgs),
    /// Generate a synthetic noisy dataset for a chosen family.
    Sample(SampleArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// CSV file with 'x' and 'y' columns.
    pub csv: PathBuf,

    /// Which model(s) to fit.
    #[arg(long, value_enum, default_value_t = ModelChoice::Auto)]
    pub model: ModelChoice,

    /// Name of the x axis (used in the prose description).
    #[arg(long, default_value = "X")]
    pub x_label: String,

    /// Name of the y axis (used in the prose description).
    #[arg(long, default_value = "Y")]
    pub y_label: String,

    /// Print the per-point table (observed vs fitted).
    #[arg(long)]
    pub show_points: bool,

    /// Export per-point results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the fitted curve (model + params + grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

/// Options for sample generation.
#[derive(Debug, Parser, Clone)]
pub struct SampleArgs {
    /// Family to draw the sample from.
    #[arg(long, value_enum, default_value_t = ModelFamily::Linear)]
    pub family: ModelFamily,

    /// Number of points to generate.
    #[arg(short = 'n', long, default_value_t = 20)]
    pub count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Noise standard deviation (log-space for power/exponential).
    #[arg(long, default_value_t = 0.1)]
    pub noise: f64,

    /// Minimum x value.
    #[arg(long, default_value_t = 1.0)]
    pub x_min: f64,

    /// Maximum x value.
    #[arg(long, default_value_t = 10.0)]
    pub x_max: f64,

    /// Output CSV path (stdout when omitted).
    #[arg(long)]
    pub out: Option<PathBuf>,
}
