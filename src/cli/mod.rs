//! Command-line parsing for the `zipf` binary.
//!
//! Argument parsing and dispatch stay here, away from the fitting code.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "zipf",
    version,
    about = "Power-law (Zipf) trendline fits for frequency distributions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank-frequency fit: ranks are generated from the counts (rank 1 = most frequent).
    Rank(RankArgs),
    /// Size-frequency fit: each count is paired with a caller-supplied size.
    Size(SizeArgs),
}

/// Options for rank-frequency fits.
#[derive(Debug, Parser, Clone)]
pub struct RankArgs {
    /// CSV files with a `count` column (one row per distinct item).
    #[arg(value_name = "CSV")]
    pub files: Vec<PathBuf>,

    /// Inline counts, comma-separated (used when no files are given).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub counts: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options for size-frequency fits.
#[derive(Debug, Parser, Clone)]
pub struct SizeArgs {
    /// CSV files with `size` and `count` columns.
    #[arg(value_name = "CSV")]
    pub files: Vec<PathBuf>,

    /// Inline sizes, comma-separated, paired with `--counts` by position.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub sizes: Vec<f64>,

    /// Inline counts, comma-separated (used when no files are given).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub counts: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Validation policy and output options shared by both modes.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Fail on empty input instead of reporting slope=0, r2=0.
    #[arg(long, env = "ZIPF_STRICT_EMPTY", value_parser = FalseyValueParser::new())]
    pub strict_empty: bool,

    /// Print results as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Write successful fits to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
