//! Aggregation of test-result files into per-algorithm averages.
//!
//! This module transforms parsed test runs into:
//! - Deadline-hit rates normalized by workload size
//! - Context-switch averages normalized by workload size
//! - The 3x3 report grid handed to the writers

pub mod averages;

// Re-export main types and functions
pub use averages::{averages_for_algorithm, Algorithm, AlgorithmAverages, ReportGrid};
