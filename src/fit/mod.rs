//! Zipf fitting orchestration.
//!
//! Responsibilities:
//!
//! - validate key/count sequences
//! - generate ranks for rank-frequency fits
//! - run single fits and parallel batches

pub mod fitter;
pub mod rank;
pub mod validate;

pub use fitter::*;
pub use rank::*;
pub use validate::*;
