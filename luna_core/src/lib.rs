#![forbid(unsafe_code)]

//! Core domain model and business logic for the Luna cycle tracker.
//!
//! This crate provides:
//! - Domain types (cycles, predictions, fertility windows, advisories)
//! - The cycle log with its running average and irregularity checks
//! - Period prediction chained from the last recorded cycle
//! - Symptom advisories
//! - Date parsing in the dd-mm-yyyy convention

pub mod types;
pub mod error;
pub mod advisory;
pub mod config;
pub mod date;
pub mod logging;
pub mod prediction;
pub mod tracker;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use advisory::{advisory_for, AdvisorySink};
pub use config::Config;
pub use date::{format_date, parse_date};
pub use prediction::fertility_for;
pub use tracker::{advance_average, CycleTracker};
