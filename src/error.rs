//! Error types.
//!
//! - `ZipfError`: recoverable, per-call failures of the fitting library
//! - `AppError`: binary-level failure carrying the process exit code

use thiserror::Error;

/// Validation failures reported by `by_rank` / `by_size`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZipfError {
    #[error("Keys and values must have the same length (keys: {keys}, values: {values}).")]
    LengthMismatch { keys: usize, values: usize },

    /// For rank fits `index` is the caller's position and `key` the generated rank.
    #[error("Data must be strictly positive: keys[{index}] was {key} and values[{index}] was {value}.")]
    NonPositiveValue { index: usize, key: f64, value: f64 },

    #[error("Data must be finite: keys[{index}] was {key} and values[{index}] was {value}.")]
    NonFiniteValue { index: usize, key: f64, value: f64 },

    /// Only raised when `FitOptions::strict_empty_check` is set.
    #[error("Counts should contain at least one element.")]
    EmptyInput,
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ZipfError> for AppError {
    fn from(err: ZipfError) -> Self {
        let exit_code = match err {
            ZipfError::EmptyInput => 3,
            _ => 2,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zipf_errors_map_to_exit_codes() {
        let empty: AppError = ZipfError::EmptyInput.into();
        assert_eq!(empty.exit_code(), 3);

        let mismatch: AppError = ZipfError::LengthMismatch { keys: 3, values: 4 }.into();
        assert_eq!(mismatch.exit_code(), 2);
        assert!(mismatch.to_string().contains("keys: 3, values: 4"));
    }
}
