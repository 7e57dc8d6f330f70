//! Mathematical core: log-log least squares.

pub mod ols;

pub use ols::*;
