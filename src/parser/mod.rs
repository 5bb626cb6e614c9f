//! Trace parsing and workload data model.
//!
//! This module handles:
//! - Loading input trace files into workload tables
//! - Decoding per-test result files (records + trailing switch count)
//! - Defining the process spec and lookup-table types

pub mod test_result;
pub mod trace_file;
pub mod workload;

// Re-export main types
pub use test_result::{parse_test_file, ExecutionRecord, TestRun};
pub use trace_file::{load_workload, trace_file_path};
pub use workload::{ProcessSpec, WorkloadTable};
