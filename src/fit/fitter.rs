//! Public fitting entry points.
//!
//! - `by_rank`: ranks are generated from the counts
//! - `by_size`: keys (sizes) are supplied by the caller
//! - `fit_batch`: many independent inputs, fitted in parallel
//!
//! Every call is self-contained: inputs are borrowed, never mutated, and no
//! state survives between calls.

use rayon::prelude::*;
use tracing::debug;

use crate::domain::{FitMode, FitOptions, FitResult};
use crate::error::ZipfError;
use crate::fit::rank::assign_ranks;
use crate::fit::validate::check_keys_and_values;
use crate::math::log_log_regression;

/// Rank-frequency fit with the default (lenient) options.
pub fn by_rank(counts: &[f64]) -> Result<FitResult, ZipfError> {
    by_rank_with(counts, &FitOptions::default())
}

/// Size-frequency fit with the default (lenient) options.
pub fn by_size(sizes: &[f64], counts: &[f64]) -> Result<FitResult, ZipfError> {
    by_size_with(sizes, counts, &FitOptions::default())
}

/// Rank-frequency fit.
///
/// Counts are sorted (on a private copy) and paired with ranks `n..=1`, then
/// validated and regressed in log-log space. Validation errors carry the
/// caller's index of the offending count; `key` is the rank it was given.
pub fn by_rank_with(counts: &[f64], opts: &FitOptions) -> Result<FitResult, ZipfError> {
    let ranked = assign_ranks(counts);
    check_keys_and_values(&ranked.ranks, &ranked.counts, opts)
        .map_err(|err| to_caller_index(err, &ranked.order))?;

    let fit = log_log_regression(&ranked.ranks, &ranked.counts);
    debug!(n = counts.len(), slope = fit.slope, r2 = fit.r2, "byRank fit");
    Ok(fit)
}

fn to_caller_index(err: ZipfError, order: &[usize]) -> ZipfError {
    match err {
        ZipfError::NonPositiveValue { index, key, value } => ZipfError::NonPositiveValue {
            index: order[index],
            key,
            value,
        },
        ZipfError::NonFiniteValue { index, key, value } => ZipfError::NonFiniteValue {
            index: order[index],
            key,
            value,
        },
        other => other,
    }
}

/// Size-frequency fit over caller-supplied `(sizes[i], counts[i])` pairs.
pub fn by_size_with(sizes: &[f64], counts: &[f64], opts: &FitOptions) -> Result<FitResult, ZipfError> {
    check_keys_and_values(sizes, counts, opts)?;

    let fit = log_log_regression(sizes, counts);
    debug!(n = counts.len(), slope = fit.slope, r2 = fit.r2, "bySize fit");
    Ok(fit)
}

/// One input to `fit_batch`.
///
/// `sizes` is ignored in `FitMode::Rank` and required in `FitMode::Size`
/// (a missing `sizes` is treated as an empty key sequence).
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    pub sizes: Option<Vec<f64>>,
    pub counts: Vec<f64>,
}

impl Distribution {
    pub fn from_counts(counts: Vec<f64>) -> Self {
        Self { sizes: None, counts }
    }

    pub fn from_pairs(sizes: Vec<f64>, counts: Vec<f64>) -> Self {
        Self {
            sizes: Some(sizes),
            counts,
        }
    }

    /// Fit this distribution in the given mode.
    pub fn fit(&self, mode: FitMode, opts: &FitOptions) -> Result<FitResult, ZipfError> {
        match mode {
            FitMode::Rank => by_rank_with(&self.counts, opts),
            FitMode::Size => {
                let sizes = self.sizes.as_deref().unwrap_or(&[]);
                by_size_with(sizes, &self.counts, opts)
            }
        }
    }
}

/// Fit many independent distributions in parallel.
///
/// Output order matches input order; one failing input does not affect the others.
pub fn fit_batch(
    mode: FitMode,
    inputs: &[Distribution],
    opts: &FitOptions,
) -> Vec<Result<FitResult, ZipfError>> {
    inputs.par_iter().map(|d| d.fit(mode, opts)).collect()
}
