//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the regression mode (`FitMode`) and policy (`FitOptions`)
//! - fit outputs (`FitResult`, `FitReport`)

pub mod types;

pub use types::*;
