//! Sched Trace Report
//!
//! Aggregates simulation-output trace files from a process-scheduling
//! experiment into summary CSV files suitable for plotting.
//!
//! This crate provides the core implementation for the
//! `sched-report` CLI tool.
//!
//! ## Getting Started
//!
//! Run the CLI from the experiment root (the directory holding
//! `input/` and `output/`):
//!
//! ```bash
//! sched-report
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
