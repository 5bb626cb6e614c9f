//! Test-result file parser.
//!
//! One result file is one independent test run of a scheduling algorithm.
//! Every line except the last is an execution record; the last line is a
//! bare integer context-switch count for the run.

use super::trace_file::parse_field;
use crate::utils::error::ParseError;
use log::debug;
use std::fs;
use std::path::Path;

/// One execution record from a result file
///
/// Only the process name (field 0) and completion time (field 2) are
/// consulted; any other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRecord {
    pub process_name: String,
    pub completion_time: u64,
}

/// One parsed test run
///
/// **Public** - consumed by the aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRun {
    pub records: Vec<ExecutionRecord>,
    pub context_switches: u64,
}

/// Parse one result file into a test run
///
/// **Public** - called by the aggregator for every file in a result directory
///
/// # Errors
/// * `ParseError::IoError` - Unreadable file
/// * `ParseError::EmptyResultFile` - No lines at all (no switch count)
/// * `ParseError::TruncatedRecord` - Record line with fewer than 3 fields
/// * `ParseError::InvalidInteger` - Non-integer completion time or switch count
pub fn parse_test_file(path: &Path) -> Result<TestRun, ParseError> {
    let contents = fs::read_to_string(path)?;
    let lines: Vec<&str> = contents.lines().collect();

    let Some((last, record_lines)) = lines.split_last() else {
        return Err(ParseError::EmptyResultFile(path.display().to_string()));
    };

    let mut records = Vec::with_capacity(record_lines.len());
    for (index, line) in record_lines.iter().enumerate() {
        records.push(decode_record_line(path, index + 1, line)?);
    }

    let context_switches = parse_field(path, lines.len(), last.trim())?;

    debug!(
        "Parsed {}: {} records, {} context switches",
        path.display(),
        records.len(),
        context_switches
    );

    Ok(TestRun {
        records,
        context_switches,
    })
}

/// Decode one execution-record line
///
/// **Private** - the single place record-format assumptions live
fn decode_record_line(
    path: &Path,
    line_no: usize,
    line: &str,
) -> Result<ExecutionRecord, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < 3 {
        return Err(ParseError::TruncatedRecord {
            path: path.display().to_string(),
            line: line_no,
        });
    }

    Ok(ExecutionRecord {
        process_name: fields[0].to_string(),
        completion_time: parse_field(path, line_no, fields[2])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_result(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_records_and_switch_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_result(dir.path(), "run1", "p1 0 8\np2 1 9\n3\n");

        let run = parse_test_file(&path).unwrap();

        assert_eq!(run.records.len(), 2);
        assert_eq!(run.records[0].process_name, "p1");
        assert_eq!(run.records[0].completion_time, 8);
        assert_eq!(run.records[1].completion_time, 9);
        assert_eq!(run.context_switches, 3);
    }

    #[test]
    fn test_extra_record_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_result(dir.path(), "run1", "p1 0 8 extra junk\n3\n");

        let run = parse_test_file(&path).unwrap();

        assert_eq!(run.records[0].process_name, "p1");
        assert_eq!(run.records[0].completion_time, 8);
    }

    #[test]
    fn test_run_with_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_result(dir.path(), "run1", "7\n");

        let run = parse_test_file(&path).unwrap();

        assert!(run.records.is_empty());
        assert_eq!(run.context_switches, 7);
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_result(dir.path(), "run1", "");

        let err = parse_test_file(&path).unwrap_err();
        assert!(matches!(err, ParseError::EmptyResultFile(_)));
    }

    #[test]
    fn test_truncated_record_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_result(dir.path(), "run1", "p1 0\n3\n");

        let err = parse_test_file(&path).unwrap_err();
        assert!(matches!(err, ParseError::TruncatedRecord { line: 1, .. }));
    }

    #[test]
    fn test_non_integer_switch_count_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_result(dir.path(), "run1", "p1 0 8\nmany\n");

        let err = parse_test_file(&path).unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { .. }));
    }
}
