//! Closed-form least squares in log10-log10 space.
//!
//! With `X_i = log10(key_i)` and `Y_i = log10(value_i)` we fit
//!
//! ```text
//! Y = slope * X + y_intercept
//! ```
//!
//! using the classic one-variable sums (Σx, Σy, Σxy, Σx², Σy²). Two degenerate
//! phenomena short-circuit the general formulas:
//!
//! - a single category (monotonous): slope 0, r2 0
//! - all counts equal (uniform / white noise): slope 0, r2 1
//! - all keys equal: slope 0, r2 0
//!
//! The intercept is always derived from the accumulated sums and whichever slope
//! the branch produced.

use tracing::{debug, trace};

use crate::domain::FitResult;

/// Running sums over the log-transformed points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogSums {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_x2: f64,
    pub sum_y2: f64,
}

impl LogSums {
    /// Accumulate sums for parallel, strictly positive `keys` and `values`.
    pub fn accumulate(keys: &[f64], values: &[f64]) -> Self {
        let mut sums = LogSums::default();
        for (&key, &value) in keys.iter().zip(values) {
            let x = key.log10();
            let y = value.log10();
            sums.n += 1;
            sums.sum_x += x;
            sums.sum_y += y;
            sums.sum_xy += x * y;
            sums.sum_x2 += x * x;
            sums.sum_y2 += y * y;
        }
        sums
    }

    /// `n·Σx² − (Σx)²`
    fn spread_x(&self) -> f64 {
        self.n as f64 * self.sum_x2 - self.sum_x * self.sum_x
    }

    /// `n·Σy² − (Σy)²`
    fn spread_y(&self) -> f64 {
        self.n as f64 * self.sum_y2 - self.sum_y * self.sum_y
    }

    /// `n·Σxy − Σx·Σy`
    fn covariance(&self) -> f64 {
        self.n as f64 * self.sum_xy - self.sum_x * self.sum_y
    }

    /// Least-squares slope, or 0 when every `X` is identical.
    pub fn slope(&self) -> f64 {
        let denom = self.spread_x();
        if denom == 0.0 {
            return 0.0;
        }
        self.covariance() / denom
    }

    /// Squared Pearson correlation, or 0 when either axis has no spread.
    pub fn r2(&self) -> f64 {
        let denom = (self.spread_x() * self.spread_y()).sqrt();
        if denom == 0.0 || !denom.is_finite() {
            return 0.0;
        }
        let r = self.covariance() / denom;
        (r * r).clamp(0.0, 1.0)
    }

    /// `(Σy − slope·Σx) / n`; zero when there are no points.
    pub fn y_intercept(&self, slope: f64) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        (self.sum_y - slope * self.sum_x) / self.n as f64
    }
}

/// Fit the log-log trendline for already validated `keys` and `values`.
///
/// Callers are expected to have checked equal lengths and strict positivity
/// (see `fit::validate`).
pub fn log_log_regression(keys: &[f64], values: &[f64]) -> FitResult {
    debug_assert_eq!(keys.len(), values.len());

    let sums = LogSums::accumulate(keys, values);
    trace!(?sums, "accumulated log sums");

    let (slope, r2) = match sums.n {
        1 => {
            debug!("monotonous phenomenon (single category)");
            (0.0, 0.0)
        }
        0 => {
            debug!("empty input");
            (0.0, 0.0)
        }
        _ if all_equal(values) => {
            debug!(n = sums.n, "uniformly distributed phenomenon");
            (0.0, 1.0)
        }
        // Rounding keeps `n·Σx² − (Σx)²` from reaching exactly zero here.
        _ if all_equal(keys) => {
            debug!(n = sums.n, "all keys identical");
            (0.0, 0.0)
        }
        _ => (sums.slope(), sums.r2()),
    };

    FitResult {
        slope,
        r2,
        y_intercept: sums.y_intercept(slope),
    }
}

/// Adjacent-pair equality scan over raw (untransformed) values.
fn all_equal(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_power_law_is_recovered() {
        // y = 1000 * x^-2
        let keys = [1.0, 10.0, 100.0];
        let values = [1000.0, 10.0, 0.1];
        let fit = log_log_regression(&keys, &values);
        assert!((fit.slope + 2.0).abs() < 1e-12);
        assert!((fit.r2 - 1.0).abs() < 1e-12);
        assert!((fit.y_intercept - 3.0).abs() < 1e-12);
    }

    #[test]
    fn single_point_keeps_its_intercept() {
        let fit = log_log_regression(&[3.0], &[100.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r2, 0.0);
        assert!((fit.y_intercept - 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_is_all_zero() {
        assert_eq!(log_log_regression(&[], &[]), FitResult::default());
    }

    #[test]
    fn uniform_values_give_horizontal_line() {
        let fit = log_log_regression(&[1.0, 2.0, 3.0], &[10.0, 10.0, 10.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r2, 1.0);
        assert!((fit.y_intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn identical_keys_guard_both_denominators() {
        // Every X is equal: no slope, no correlation.
        let fit = log_log_regression(&[2.0, 2.0, 2.0], &[1.0, 10.0, 100.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r2, 0.0);
        assert!((fit.y_intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn identical_keys_never_produce_a_slope() {
        for &key in &[1.0, 1.7, 2.0, 3.0, 10.0, 123.456, 1e6] {
            for n in [2usize, 3, 5, 8, 9, 11, 40] {
                let keys = vec![key; n];
                let values: Vec<f64> = (1..=n).map(|i| 3.0 * i as f64).collect();
                let fit = log_log_regression(&keys, &values);
                assert_eq!(fit.slope, 0.0, "key={key} n={n}");
                assert_eq!(fit.r2, 0.0, "key={key} n={n}");

                let mean_y = values.iter().map(|v| v.log10()).sum::<f64>() / n as f64;
                assert!((fit.y_intercept - mean_y).abs() < 1e-12, "key={key} n={n}");
            }
        }
    }

    #[test]
    fn sums_match_hand_computation() {
        let sums = LogSums::accumulate(&[10.0, 100.0], &[1.0, 10.0]);
        assert_eq!(sums.n, 2);
        assert!((sums.sum_x - 3.0).abs() < 1e-12);
        assert!((sums.sum_y - 1.0).abs() < 1e-12);
        assert!((sums.sum_xy - 2.0).abs() < 1e-12);
        assert!((sums.sum_x2 - 5.0).abs() < 1e-12);
        assert!((sums.sum_y2 - 1.0).abs() < 1e-12);
        assert!((sums.slope() - 1.0).abs() < 1e-12);
    }
}
