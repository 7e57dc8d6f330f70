//! Input/output helpers.
//!
//! - CSV ingest of frequency tables (`ingest`)
//! - JSON export of fit reports (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
