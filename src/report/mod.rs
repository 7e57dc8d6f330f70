//! Reporting utilities: per-input outcomes and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{FitMode, FitReport, FitResult};
use crate::error::ZipfError;

/// The outcome of fitting one input (successful or not).
#[derive(Debug, Clone)]
pub struct FitOutcome {
    pub source: String,
    pub mode: FitMode,
    pub n: usize,
    pub result: Result<FitResult, ZipfError>,
}

impl FitOutcome {
    /// Exportable record, if the fit succeeded.
    pub fn report(&self) -> Option<FitReport> {
        let fit = self.result.as_ref().ok()?;
        Some(FitReport {
            source: self.source.clone(),
            mode: self.mode,
            n: self.n,
            fit: *fit,
        })
    }
}

/// Collect the successful outcomes as reports, in input order.
pub fn collect_reports(outcomes: &[FitOutcome]) -> Vec<FitReport> {
    outcomes.iter().filter_map(FitOutcome::report).collect()
}
