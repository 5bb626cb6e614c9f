//! Per-(algorithm, workload-size) averaging of test results.
//!
//! Tallies two counters over every result file in a directory and divides
//! by the workload size. Both sums are order-independent, so directory
//! enumeration order never affects the output.

use crate::parser::test_result::parse_test_file;
use crate::parser::workload::WorkloadTable;
use crate::utils::error::AggregateError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The scheduling algorithms under test
///
/// **Public** - identifiers match the result-directory and CSV-file names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    ShortestFirst,
    RoundRobin,
    Priority,
}

impl Algorithm {
    /// All algorithms, in the order reports are generated
    pub const ALL: [Algorithm; 3] = [
        Algorithm::ShortestFirst,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Directory / file-name identifier for this algorithm
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::ShortestFirst => "shortest_first",
            Algorithm::RoundRobin => "round_robin",
            Algorithm::Priority => "priority",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Averages for one (algorithm, workload-size) cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmAverages {
    pub algorithm: Algorithm,
    pub workload_size: usize,

    /// Deadline hits divided by workload size (not by records observed)
    pub deadline_hit_rate: f64,

    /// Context-switch total divided by workload size
    pub avg_context_switches: f64,
}

/// The full grid of averages across algorithms and workload sizes
///
/// **Public** - handed to the report writer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportGrid {
    rows: Vec<AlgorithmAverages>,
}

impl ReportGrid {
    /// Build a grid, ordering rows by algorithm then ascending workload size
    pub fn new(mut rows: Vec<AlgorithmAverages>) -> Self {
        rows.sort_by_key(|r| {
            let algo_index = Algorithm::ALL
                .iter()
                .position(|a| *a == r.algorithm)
                .unwrap_or(Algorithm::ALL.len());
            (algo_index, r.workload_size)
        });
        Self { rows }
    }

    /// Rows for one algorithm, in ascending workload-size order
    pub fn rows_for(&self, algorithm: Algorithm) -> Vec<&AlgorithmAverages> {
        self.rows.iter().filter(|r| r.algorithm == algorithm).collect()
    }

    /// All rows, algorithm-major, ascending size within each algorithm
    pub fn rows(&self) -> &[AlgorithmAverages] {
        &self.rows
    }
}

/// Compute the averages for one algorithm against one workload
///
/// **Public** - main entry point for the aggregation stage
///
/// # Arguments
/// * `algorithm` - Which algorithm's result directory to scan
/// * `table` - The workload table loaded for this size
/// * `output_dir` - Root of the result tree (`<output_dir>/<algorithm>/<size>/`)
///
/// # Returns
/// Deadline-hit rate and context-switch average, both normalized by the
/// workload size
///
/// # Errors
/// * `AggregateError::EmptyWorkload` - Zero workload size (precondition)
/// * `AggregateError::IoError` - Missing or unreadable result directory
/// * `AggregateError::UnknownProcess` - Record names a process absent from the table
/// * `AggregateError::ParseError` - Malformed result file
pub fn averages_for_algorithm(
    algorithm: Algorithm,
    table: &WorkloadTable,
    output_dir: &Path,
) -> Result<AlgorithmAverages, AggregateError> {
    if table.size == 0 {
        return Err(AggregateError::EmptyWorkload);
    }

    let tests_dir = output_dir.join(algorithm.as_str()).join(table.size.to_string());
    debug!("Scanning result directory: {}", tests_dir.display());

    let mut deadline_hits: u64 = 0;
    let mut context_switch_total: u64 = 0;
    let mut test_count: usize = 0;

    for entry in std::fs::read_dir(&tests_dir)? {
        let path = entry?.path();
        if path.is_dir() {
            continue;
        }

        let run = parse_test_file(&path)?;
        for record in &run.records {
            let spec = table.get(&record.process_name).ok_or_else(|| {
                AggregateError::UnknownProcess {
                    name: record.process_name.clone(),
                    file: path.display().to_string(),
                    size: table.size,
                }
            })?;

            if record.completion_time <= spec.deadline {
                deadline_hits += 1;
            }
        }

        context_switch_total += run.context_switches;
        test_count += 1;
    }

    debug!(
        "{} size {}: {} test runs, {} deadline hits, {} context switches",
        algorithm, table.size, test_count, deadline_hits, context_switch_total
    );

    Ok(AlgorithmAverages {
        algorithm,
        workload_size: table.size,
        deadline_hit_rate: deadline_hits as f64 / table.size as f64,
        avg_context_switches: context_switch_total as f64 / table.size as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::workload::ProcessSpec;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;

    fn two_process_table() -> WorkloadTable {
        let mut table = WorkloadTable::new(2);
        table.upsert(ProcessSpec {
            name: "p1".to_string(),
            deadline: 10,
            arrival_time: 0,
            burst_time: 4,
        });
        table.upsert(ProcessSpec {
            name: "p2".to_string(),
            deadline: 5,
            arrival_time: 1,
            burst_time: 3,
        });
        table
    }

    fn write_run(output_dir: &Path, algorithm: Algorithm, size: usize, name: &str, contents: &str) {
        let dir: PathBuf = output_dir.join(algorithm.as_str()).join(size.to_string());
        fs::create_dir_all(&dir).unwrap();
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_deadline_hit_arithmetic() {
        let dir = tempfile::tempdir().unwrap();
        let table = two_process_table();
        // p1 finishes at 8 (met, 8 <= 10), p2 at 9 (missed, 9 > 5)
        write_run(dir.path(), Algorithm::Priority, 2, "run1", "p1 0 8\np2 0 9\n3\n");

        let avg = averages_for_algorithm(Algorithm::Priority, &table, dir.path()).unwrap();

        assert_eq!(avg.deadline_hit_rate, 0.5);
        assert_eq!(avg.avg_context_switches, 1.5);
        assert_eq!(avg.workload_size, 2);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        // Same two runs under file names that reverse any name-based
        // enumeration order; the sums must come out identical.
        let forward = tempfile::tempdir().unwrap();
        let reversed = tempfile::tempdir().unwrap();
        let table = two_process_table();

        let run_met = "p1 0 8\n2\n";
        let run_missed = "p1 0 12\n4\n";

        write_run(forward.path(), Algorithm::RoundRobin, 2, "aaa", run_met);
        write_run(forward.path(), Algorithm::RoundRobin, 2, "zzz", run_missed);
        write_run(reversed.path(), Algorithm::RoundRobin, 2, "zzz", run_met);
        write_run(reversed.path(), Algorithm::RoundRobin, 2, "aaa", run_missed);

        let a = averages_for_algorithm(Algorithm::RoundRobin, &table, forward.path()).unwrap();
        let b = averages_for_algorithm(Algorithm::RoundRobin, &table, reversed.path()).unwrap();

        assert_eq!(a.deadline_hit_rate, b.deadline_hit_rate);
        assert_eq!(a.avg_context_switches, b.avg_context_switches);
        assert_eq!(a.avg_context_switches, 3.0);
    }

    #[test]
    fn test_normalizes_by_workload_size_not_record_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = WorkloadTable::new(4);
        table.upsert(ProcessSpec {
            name: "p1".to_string(),
            deadline: 10,
            arrival_time: 0,
            burst_time: 1,
        });
        // Only one record for a workload of size 4: rate is 1/4, not 1/1.
        write_run(dir.path(), Algorithm::ShortestFirst, 4, "run1", "p1 0 8\n0\n");

        let avg = averages_for_algorithm(Algorithm::ShortestFirst, &table, dir.path()).unwrap();
        assert_eq!(avg.deadline_hit_rate, 0.25);
    }

    #[test]
    fn test_unknown_process_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let table = two_process_table();
        write_run(dir.path(), Algorithm::Priority, 2, "run1", "ghost 0 8\n1\n");

        let err = averages_for_algorithm(Algorithm::Priority, &table, dir.path()).unwrap_err();
        assert!(matches!(
            err,
            AggregateError::UnknownProcess { ref name, size: 2, .. } if name == "ghost"
        ));
    }

    #[test]
    fn test_missing_result_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let table = two_process_table();

        let err = averages_for_algorithm(Algorithm::RoundRobin, &table, dir.path()).unwrap_err();
        assert!(matches!(err, AggregateError::IoError(_)));
    }

    #[test]
    fn test_zero_workload_size_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let table = WorkloadTable::new(0);

        let err = averages_for_algorithm(Algorithm::Priority, &table, dir.path()).unwrap_err();
        assert!(matches!(err, AggregateError::EmptyWorkload));
    }

    #[test]
    fn test_grid_orders_rows_by_algorithm_then_size() {
        let row = |algorithm, workload_size| AlgorithmAverages {
            algorithm,
            workload_size,
            deadline_hit_rate: 0.0,
            avg_context_switches: 0.0,
        };

        let grid = ReportGrid::new(vec![
            row(Algorithm::Priority, 500),
            row(Algorithm::ShortestFirst, 250),
            row(Algorithm::Priority, 50),
            row(Algorithm::ShortestFirst, 50),
        ]);

        let sizes: Vec<usize> = grid
            .rows_for(Algorithm::Priority)
            .iter()
            .map(|r| r.workload_size)
            .collect();
        assert_eq!(sizes, vec![50, 500]);
        assert_eq!(grid.rows()[0].algorithm, Algorithm::ShortestFirst);
    }
}
