//! Input validation for parallel key/value sequences.

use crate::domain::FitOptions;
use crate::error::ZipfError;

/// Check that `keys` and `values` can be regressed in log-log space.
///
/// Rules, in order:
/// 1. equal lengths, else `LengthMismatch`
/// 2. non-empty when `opts.strict_empty_check`, else `EmptyInput`
/// 3. every key and value `> 0` (NaN included), else `NonPositiveValue`
/// 4. every key and value finite, else `NonFiniteValue`
///
/// The first offending index is reported.
pub fn check_keys_and_values(
    keys: &[f64],
    values: &[f64],
    opts: &FitOptions,
) -> Result<(), ZipfError> {
    if keys.len() != values.len() {
        return Err(ZipfError::LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }

    if values.is_empty() && opts.strict_empty_check {
        return Err(ZipfError::EmptyInput);
    }

    for (index, (&key, &value)) in keys.iter().zip(values).enumerate() {
        if !(key > 0.0 && value > 0.0) {
            return Err(ZipfError::NonPositiveValue { index, key, value });
        }
        if !(key.is_finite() && value.is_finite()) {
            return Err(ZipfError::NonFiniteValue { index, key, value });
        }
    }

    Ok(())
}
