//! # Palate Shared
//!
//! Wire models and telemetry shared across the Palate client crates.

pub mod telemetry;
pub mod types;

pub use types::*;
