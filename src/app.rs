//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs ingest + fitting + selection
//! - prints reports
//! - writes optional exports

use std::io::Write;

use clap::Parser;

use crate::cli::{Command, FitArgs, SampleArgs};
use crate::data::sample::{SampleConfig, generate_sample};
use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `bestfit` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&run.ingest, &run.selection, &config)
    );

    if run.selection.best.applicable {
        println!(
            "{}",
            crate::report::describe_model(&config.x_label, &config.y_label, &run.selection.best)
        );
    }

    if config.show_points {
        println!();
        println!("{}", crate::report::format_point_table(&run.residuals));
    }

    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, &run.residuals)?;
    }
    if let Some(path) = &config.export_curve {
        crate::io::curve::write_curve_json(
            path,
            &run.selection.best,
            &run.ingest.stats,
            &config.x_label,
            &config.y_label,
        )?;
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = SampleConfig {
        family: args.family,
        count: args.count,
        seed: args.seed,
        noise: args.noise,
        x_min: args.x_min,
        x_max: args.x_max,
    };
    let points = generate_sample(&config)?;

    let mut csv = String::from("x,y\n");
    for p in &points {
        csv.push_str(&format!("{},{}\n", p.x, p.y));
    }

    match &args.out {
        Some(path) => std::fs::write(path, csv).map_err(|e| {
            AppError::new(4, format!("Failed to write sample CSV '{}': {e}", path.display()))
        }),
        None => std::io::stdout()
            .write_all(csv.as_bytes())
            .map_err(|e| AppError::new(4, format!("Failed to write sample CSV to stdout: {e}"))),
    }
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        csv_path: args.csv.clone(),
        model: args.model,
        x_label: args.x_label.clone(),
        y_label: args.y_label.clone(),
        show_points: args.show_points,
        export_results: args.export.clone(),
        export_curve: args.export_curve.clone(),
    }
}
