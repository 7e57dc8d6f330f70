//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults and parses CLI arguments
//! - runs the fit pipeline
//! - prints reports
//! - writes optional exports

use clap::Parser;
use tracing::warn;

use crate::cli::{Cli, Command, OutputArgs, RankArgs, SizeArgs};
use crate::domain::{FitMode, FitOptions, RunConfig};
use crate::error::AppError;
use crate::report::FitOutcome;

pub mod pipeline;

/// Entry point for the `zipf` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may carry ZIPF_STRICT_EMPTY; clap reads it from the environment.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match cli.command {
        Command::Rank(args) => config_from_rank_args(args),
        Command::Size(args) => config_from_size_args(args),
    };
    handle_fit(&config)
}

fn handle_fit(config: &RunConfig) -> Result<(), AppError> {
    let run = pipeline::run_fit(config)?;
    if let Some(err) = single_failure(&run) {
        return Err(err);
    }
    let reports = crate::report::collect_reports(&run.outcomes);

    if config.json {
        println!("{}", crate::io::export::reports_to_json(&reports)?);
    } else {
        print!("{}", crate::report::format_summary(&run.outcomes));
    }

    if let Some(path) = &config.export {
        crate::io::export::write_reports_json(path, &reports)?;
    }

    exit_status(&run)
}

/// A run with one input that failed reports only that error (printed once, by `main`).
fn single_failure(run: &pipeline::RunOutput) -> Option<AppError> {
    let [FitOutcome { source, result: Err(err), .. }] = run.outcomes.as_slice() else {
        return None;
    };
    let app: AppError = err.clone().into();
    Some(AppError::new(app.exit_code(), format!("{source}: {app}")))
}

/// Failures inside a batch exit with code 4 after the summary is printed.
fn exit_status(run: &pipeline::RunOutput) -> Result<(), AppError> {
    let failed = run.failed();
    if failed == 0 {
        return Ok(());
    }

    warn!(failed, total = run.outcomes.len(), "some inputs could not be fitted");
    Err(AppError::new(
        4,
        format!("{failed} of {} inputs failed to fit.", run.outcomes.len()),
    ))
}

pub fn config_from_rank_args(args: RankArgs) -> RunConfig {
    build_config(FitMode::Rank, args.files, Vec::new(), args.counts, args.output)
}

pub fn config_from_size_args(args: SizeArgs) -> RunConfig {
    build_config(FitMode::Size, args.files, args.sizes, args.counts, args.output)
}

fn build_config(
    mode: FitMode,
    files: Vec<std::path::PathBuf>,
    inline_sizes: Vec<f64>,
    inline_counts: Vec<f64>,
    output: OutputArgs,
) -> RunConfig {
    if !files.is_empty() && !(inline_sizes.is_empty() && inline_counts.is_empty()) {
        warn!("inline values are ignored when CSV files are given");
    }
    RunConfig {
        mode,
        files,
        inline_sizes,
        inline_counts,
        options: FitOptions {
            strict_empty_check: output.strict_empty,
        },
        json: output.json,
        export: output.export,
    }
}
