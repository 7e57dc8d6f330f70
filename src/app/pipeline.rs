//! Shared "fit pipeline": load inputs -> fit (parallel) -> outcomes.
//!
//! The CLI handler focuses on presentation; everything that touches data lives here.

use tracing::info;

use crate::domain::{FitMode, RunConfig};
use crate::error::AppError;
use crate::fit::{Distribution, fit_batch};
use crate::io::ingest::{LoadedInput, load_distribution};
use crate::report::FitOutcome;

/// Source label for values passed on the command line.
pub const INLINE_SOURCE: &str = "inline";

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub outcomes: Vec<FitOutcome>,
}

impl RunOutput {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// Execute the full pipeline and return the computed outcomes.
pub fn run_fit(config: &RunConfig) -> Result<RunOutput, AppError> {
    let inputs = load_inputs(config)?;
    Ok(fit_inputs(config.mode, inputs, config))
}

/// Fit already-loaded inputs.
pub fn fit_inputs(mode: FitMode, inputs: Vec<LoadedInput>, config: &RunConfig) -> RunOutput {
    let distributions: Vec<Distribution> = inputs.iter().map(|i| i.distribution.clone()).collect();
    let results = fit_batch(mode, &distributions, &config.options);

    let outcomes: Vec<FitOutcome> = inputs
        .into_iter()
        .zip(results)
        .map(|(input, result)| FitOutcome {
            n: input.distribution.counts.len(),
            source: input.source,
            mode,
            result,
        })
        .collect();

    let output = RunOutput { outcomes };
    info!(
        inputs = output.outcomes.len(),
        failed = output.failed(),
        mode = mode.display_name(),
        "fit run complete"
    );
    output
}

fn load_inputs(config: &RunConfig) -> Result<Vec<LoadedInput>, AppError> {
    if config.files.is_empty() {
        let distribution = match config.mode {
            FitMode::Rank => Distribution::from_counts(config.inline_counts.clone()),
            FitMode::Size => {
                Distribution::from_pairs(config.inline_sizes.clone(), config.inline_counts.clone())
            }
        };
        return Ok(vec![LoadedInput {
            source: INLINE_SOURCE.to_string(),
            distribution,
        }]);
    }

    config
        .files
        .iter()
        .map(|path| load_distribution(path, config.mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FitOptions;
    use crate::error::ZipfError;

    fn config(mode: FitMode) -> RunConfig {
        RunConfig {
            mode,
            files: Vec::new(),
            inline_sizes: Vec::new(),
            inline_counts: Vec::new(),
            options: FitOptions::default(),
            json: false,
            export: None,
        }
    }

    #[test]
    fn inline_counts_are_fitted() {
        let mut cfg = config(FitMode::Rank);
        cfg.inline_counts = vec![4.0, 4.0, 4.0];

        let run = run_fit(&cfg).unwrap();
        assert_eq!(run.outcomes.len(), 1);
        assert_eq!(run.outcomes[0].source, INLINE_SOURCE);
        assert_eq!(run.outcomes[0].n, 3);
        assert_eq!(run.outcomes[0].result.as_ref().unwrap().r2, 1.0);
        assert_eq!(run.failed(), 0);
    }

    #[test]
    fn empty_inline_input_follows_policy() {
        let cfg = config(FitMode::Rank);
        let run = run_fit(&cfg).unwrap();
        assert!(run.outcomes[0].result.is_ok());

        let mut strict = config(FitMode::Rank);
        strict.options = FitOptions::strict();
        let run = run_fit(&strict).unwrap();
        assert_eq!(run.outcomes[0].result, Err(ZipfError::EmptyInput));
        assert_eq!(run.failed(), 1);
    }

    #[test]
    fn files_are_fitted_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        std::fs::write(&a, "size,count\n1,100\n2,50\n3,33\n4,25\n").unwrap();
        std::fs::write(&b, "size,count\n1,5\n2,0\n").unwrap();

        let mut cfg = config(FitMode::Size);
        cfg.files = vec![a, b];

        let run = run_fit(&cfg).unwrap();
        assert_eq!(run.outcomes.len(), 2);
        assert!(run.outcomes[0].source.ends_with("a.csv"));
        let fit = run.outcomes[0].result.as_ref().unwrap();
        assert!(fit.slope < -0.8 && fit.slope > -1.2);
        assert!(matches!(
            run.outcomes[1].result,
            Err(ZipfError::NonPositiveValue { index: 1, .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut cfg = config(FitMode::Rank);
        cfg.files = vec!["/definitely/not/here.csv".into()];
        let err = run_fit(&cfg).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
