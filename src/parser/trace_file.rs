//! Input trace file loader.
//!
//! Reads one `<size>.trace` file per workload size and populates a
//! name-keyed `WorkloadTable`. All format assumptions about input lines
//! live in `decode_spec_line`.

use super::workload::{ProcessSpec, WorkloadTable};
use crate::utils::config::TRACE_EXTENSION;
use crate::utils::error::ParseError;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Path of the input trace file for one workload size
///
/// **Public** - used by `validate` to report which file it is checking
pub fn trace_file_path(input_dir: &Path, size: usize) -> PathBuf {
    input_dir.join(format!("{}.{}", size, TRACE_EXTENSION))
}

/// Load the workload table for one workload size
///
/// **Public** - main entry point for the loader stage
///
/// # Arguments
/// * `input_dir` - Directory containing `<size>.trace` files
/// * `size` - Workload size selecting the input file
///
/// # Returns
/// A fully populated table; duplicate process names keep the later line
/// (last-write-wins, see `WorkloadTable::upsert`)
///
/// # Errors
/// * `ParseError::IoError` - Missing or unreadable input file
/// * `ParseError::WrongFieldCount` / `ParseError::InvalidInteger` - Malformed
///   line; the whole load fails, no partial table is returned
pub fn load_workload(input_dir: &Path, size: usize) -> Result<WorkloadTable, ParseError> {
    let path = trace_file_path(input_dir, size);
    debug!("Loading workload table from: {}", path.display());

    let contents = fs::read_to_string(&path)?;
    let mut table = WorkloadTable::new(size);

    for (index, line) in contents.lines().enumerate() {
        let spec = decode_spec_line(&path, index + 1, line)?;
        table.upsert(spec);
    }

    debug!("Loaded {} process specs for size {}", table.len(), size);
    Ok(table)
}

/// Decode one input line into a process spec
///
/// **Private** - the single place input-format assumptions live
///
/// Expects exactly four whitespace-separated fields:
/// `name deadline arrival_time burst_time`
fn decode_spec_line(path: &Path, line_no: usize, line: &str) -> Result<ProcessSpec, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() != 4 {
        return Err(ParseError::WrongFieldCount {
            path: path.display().to_string(),
            line: line_no,
            found: fields.len(),
        });
    }

    Ok(ProcessSpec {
        name: fields[0].to_string(),
        deadline: parse_field(path, line_no, fields[1])?,
        arrival_time: parse_field(path, line_no, fields[2])?,
        burst_time: parse_field(path, line_no, fields[3])?,
    })
}

/// Parse one numeric field, keeping path/line context on failure
///
/// **Private** - internal utility
pub(super) fn parse_field(path: &Path, line_no: usize, value: &str) -> Result<u64, ParseError> {
    value.parse::<u64>().map_err(|_| ParseError::InvalidInteger {
        path: path.display().to_string(),
        line: line_no,
        value: value.to_string(),
    })
}
