//! Terminal formatting of fit outcomes.
//!
//! Kept separate from the fitting code so output changes stay localized.

use crate::report::FitOutcome;

/// Format a table of outcomes followed by any failures.
pub fn format_summary(outcomes: &[FitOutcome]) -> String {
    let mut out = String::new();

    out.push_str(
        format!(
            "{:<32} {:<7} {:>6} {:>10} {:>8} {:>12}\n",
            "source", "mode", "n", "slope", "r2", "y_intercept"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<32} {:-<7} {:->6} {:->10} {:->8} {:->12}\n",
            "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    let mut failures = Vec::new();
    for o in outcomes {
        match &o.result {
            Ok(fit) => {
                out.push_str(
                    format!(
                        "{:<32} {:<7} {:>6} {:>10.4} {:>8.4} {:>12.4}\n",
                        truncate(&o.source, 32),
                        o.mode.display_name(),
                        o.n,
                        fit.slope,
                        fit.r2,
                        fit.y_intercept,
                    )
                    .trim_end(),
                );
                out.push('\n');
            }
            Err(e) => failures.push((o.source.as_str(), e)),
        }
    }

    if !failures.is_empty() {
        out.push_str("\nFailed inputs:\n");
        for (source, err) in failures {
            out.push_str(&format!("- {source}: {err}\n"));
        }
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    // Keep the tail: file names are more informative than leading directories.
    let skip = s.chars().count() - (max - 1);
    format!("…{}", s.chars().skip(skip).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitMode, FitResult};
    use crate::error::ZipfError;

    #[test]
    fn summary_lists_fits_and_failures() {
        let outcomes = vec![
            FitOutcome {
                source: "inline".to_string(),
                mode: FitMode::Rank,
                n: 3,
                result: Ok(FitResult {
                    slope: 0.0,
                    r2: 1.0,
                    y_intercept: 0.60206,
                }),
            },
            FitOutcome {
                source: "bad.csv".to_string(),
                mode: FitMode::Size,
                n: 4,
                result: Err(ZipfError::LengthMismatch { keys: 3, values: 4 }),
            },
        ];

        let text = format_summary(&outcomes);
        assert!(text.contains("inline"));
        assert!(text.contains("byRank"));
        assert!(text.contains("1.0000"));
        assert!(text.contains("Failed inputs:"));
        assert!(text.contains("- bad.csv: Keys and values must have the same length"));
        assert!(!text.contains("bySize"));
    }

    #[test]
    fn truncate_keeps_tail() {
        let t = truncate("/very/long/path/to/words.csv", 12);
        assert_eq!(t.chars().count(), 12);
        assert!(t.ends_with("words.csv"));
    }
}
