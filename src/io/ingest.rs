//! CSV ingest for already-aggregated frequency tables.
//!
//! Expected layout (header row required, extra columns ignored):
//!
//! ```text
//! label,size,count
//! the,3,120
//! of,2,87
//! ```
//!
//! - `count` is always required
//! - `size` is required for size-frequency fits and ignored for rank fits
//!
//! No aggregation happens here: every row is one distinct item.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::domain::FitMode;
use crate::error::AppError;
use crate::fit::Distribution;

const COUNT_COLUMN: &str = "count";
const SIZE_COLUMN: &str = "size";

/// A distribution plus a label describing where it came from.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub source: String,
    pub distribution: Distribution,
}

/// Load a frequency table from a CSV file.
pub fn load_distribution(path: &Path, mode: FitMode) -> Result<LoadedInput, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;

    let source = path.display().to_string();
    let distribution = read_distribution(file, mode)
        .map_err(|e| AppError::new(e.exit_code(), format!("{source}: {e}")))?;
    debug!(%source, rows = distribution.counts.len(), "loaded frequency table");

    Ok(LoadedInput {
        source,
        distribution,
    })
}

/// Parse a frequency table from any reader.
pub fn read_distribution<R: Read>(reader: R, mode: FitMode) -> Result<Distribution, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let count_idx = *header_map
        .get(COUNT_COLUMN)
        .ok_or_else(|| AppError::new(2, "Missing required column: `count`"))?;
    let size_idx = match mode {
        FitMode::Rank => None,
        FitMode::Size => Some(
            *header_map
                .get(SIZE_COLUMN)
                .ok_or_else(|| AppError::new(2, "Missing required column for size fits: `size`"))?,
        ),
    };

    let mut counts = Vec::new();
    let mut sizes = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| AppError::new(2, format!("CSV parse error: {e}")))?;
        let line = record.position().map_or(0, |pos| pos.line());

        if record.iter().all(str::is_empty) {
            continue;
        }

        counts.push(parse_cell(&record, count_idx, COUNT_COLUMN, line)?);
        if let Some(size_idx) = size_idx {
            sizes.push(parse_cell(&record, size_idx, SIZE_COLUMN, line)?);
        }
    }

    Ok(match mode {
        FitMode::Rank => Distribution::from_counts(counts),
        FitMode::Size => Distribution::from_pairs(sizes, counts),
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_cell(record: &StringRecord, idx: usize, column: &str, line: u64) -> Result<f64, AppError> {
    let raw = record.get(idx).unwrap_or("");
    if raw.is_empty() {
        return Err(AppError::new(2, format!("Line {line}: missing `{column}` value.")));
    }
    raw.parse::<f64>()
        .map_err(|e| AppError::new(2, format!("Line {line}: invalid `{column}` value '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_counts_for_rank_fits() {
        let csv = "label,count\nthe,120\nof,87\n\nand,40\n";
        let d = read_distribution(csv.as_bytes(), FitMode::Rank).unwrap();
        assert_eq!(d.counts, vec![120.0, 87.0, 40.0]);
        assert!(d.sizes.is_none());
    }

    #[test]
    fn reads_size_count_pairs_in_file_order() {
        let csv = "\u{feff}Size, COUNT\n3,5\n1,9\n2,7\n";
        let d = read_distribution(csv.as_bytes(), FitMode::Size).unwrap();
        assert_eq!(d.sizes, Some(vec![3.0, 1.0, 2.0]));
        assert_eq!(d.counts, vec![5.0, 9.0, 7.0]);
    }

    #[test]
    fn missing_size_column_fails_for_size_fits() {
        let err = read_distribution("count\n1\n".as_bytes(), FitMode::Size).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("`size`"));
    }

    #[test]
    fn bad_cell_reports_line() {
        let err = read_distribution("count\n4\nabc\n".as_bytes(), FitMode::Rank).unwrap_err();
        assert!(err.to_string().contains("Line 3"), "{err}");
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");
        std::fs::write(&path, "count\n10\n5\n").unwrap();

        let loaded = load_distribution(&path, FitMode::Rank).unwrap();
        assert_eq!(loaded.distribution.counts, vec![10.0, 5.0]);
        assert!(loaded.source.ends_with("words.csv"));
    }
}
