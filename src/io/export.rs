//! Export fit reports to JSON.
//!
//! The export is a pretty-printed JSON array of `FitReport`, one entry per
//! successfully fitted input, in input order.

use std::fs::File;
use std::path::Path;

use crate::domain::FitReport;
use crate::error::AppError;

/// Write reports to a JSON file.
pub fn write_reports_json(path: &Path, reports: &[FitReport]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, reports)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

/// Read reports back from a JSON file.
pub fn read_reports_json(path: &Path) -> Result<Vec<FitReport>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open export JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid export JSON: {e}")))
}

/// Render reports as pretty JSON for stdout.
pub fn reports_to_json(reports: &[FitReport]) -> Result<String, AppError> {
    serde_json::to_string_pretty(reports)
        .map_err(|e| AppError::new(2, format!("Failed to serialize reports: {e}")))
}
