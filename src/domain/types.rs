//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - returned from the fitting functions
//! - exported to JSON
//! - printed in terminal reports

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which x-axis the regression runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Ranks are generated from the sorted counts (rank 1 = most frequent).
    Rank,
    /// Keys (sizes) are supplied alongside the counts.
    Size,
}

impl FitMode {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            FitMode::Rank => "byRank",
            FitMode::Size => "bySize",
        }
    }
}

/// Validation policy knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitOptions {
    /// Treat an empty input as `ZipfError::EmptyInput` instead of a zero result.
    pub strict_empty_check: bool,
}

impl FitOptions {
    pub fn strict() -> Self {
        Self {
            strict_empty_check: true,
        }
    }
}

/// Trendline parameters in log10-log10 space.
///
/// The fitted line is `log10(y) = slope * log10(x) + y_intercept`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub slope: f64,
    /// Squared Pearson correlation of the log-log points, in `[0, 1]`.
    pub r2: f64,
    pub y_intercept: f64,
}

impl FitResult {
    /// Evaluate the power-law trendline at `key`: `10^y_intercept * key^slope`.
    pub fn trendline(&self, key: f64) -> f64 {
        10f64.powf(self.y_intercept) * key.powf(self.slope)
    }
}

/// One fitted input, as reported and exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    /// Where the data came from (file path or `inline`).
    pub source: String,
    pub mode: FitMode,
    pub n: usize,
    pub fit: FitResult,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus `.env` / environment defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: FitMode,
    /// CSV inputs; each one is fitted independently.
    pub files: Vec<PathBuf>,
    /// Inline sizes (size mode only).
    pub inline_sizes: Vec<f64>,
    /// Inline counts, fitted when no files are given.
    pub inline_counts: Vec<f64>,
    pub options: FitOptions,
    pub json: bool,
    pub export: Option<PathBuf>,
}
