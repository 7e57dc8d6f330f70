//! `zipf-fit` library crate.
//!
//! Fits a power-law (Zipf) trendline to a frequency distribution in log10-log10
//! space and reports its slope, R² and y-intercept.
//!
//! ```
//! use zipf_fit::{by_rank, by_size};
//!
//! let fit = by_size(&[1.0, 2.0, 3.0, 4.0], &[100.0, 50.0, 33.0, 25.0]).unwrap();
//! assert!(fit.slope < -0.8 && fit.r2 > 0.99);
//!
//! // Uniformly distributed phenomenon: horizontal trendline.
//! let fit = by_rank(&[4.0, 4.0, 4.0]).unwrap();
//! assert_eq!((fit.slope, fit.r2), (0.0, 1.0));
//! ```
//!
//! The binary (`zipf`) is a thin wrapper around this library.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;

pub use domain::{FitMode, FitOptions, FitResult};
pub use error::ZipfError;
pub use fit::{Distribution, by_rank, by_rank_with, by_size, by_size_with, fit_batch};
