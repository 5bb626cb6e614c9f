//! Output writers for report data.
//!
//! This module handles writing data to disk:
//! - Per-algorithm CSV files (the primary artifact, consumed by plotting)
//! - An optional JSON summary of the whole grid

pub mod csv;
pub mod json;

// Re-export main functions
pub use csv::write_report;
pub use json::{read_summary, write_summary, ReportSummary};
