//! CSV report writer.
//!
//! Writes two files per algorithm into the graphs directory:
//! `<algorithm>_deadline.csv` and `<algorithm>_context_switch.csv`.
//! Each has one `<size>,<average>` line per workload size, ascending,
//! no header and no trailing newline. Downstream plotting scripts rely
//! on this exact shape.

use crate::aggregator::averages::{Algorithm, ReportGrid};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Write the full CSV report for every algorithm in the grid
///
/// **Public** - main entry point for the report-writing stage
///
/// # Arguments
/// * `grid` - Averages for every (algorithm, workload-size) cell
/// * `graphs_dir` - Output directory; created (with parents) if absent
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error creating the directory or a file
pub fn write_report(grid: &ReportGrid, graphs_dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(graphs_dir)?;

    for algorithm in Algorithm::ALL {
        write_algorithm_csvs(grid, algorithm, graphs_dir)?;
    }

    info!("CSV report written to: {}", graphs_dir.display());
    Ok(())
}

/// Write the deadline and context-switch CSVs for one algorithm
///
/// **Private** - internal helper for write_report
fn write_algorithm_csvs(
    grid: &ReportGrid,
    algorithm: Algorithm,
    graphs_dir: &Path,
) -> Result<(), OutputError> {
    let rows = grid.rows_for(algorithm);

    let deadline_csv = render_csv(rows.iter().map(|r| (r.workload_size, r.deadline_hit_rate)));
    let switch_csv = render_csv(rows.iter().map(|r| (r.workload_size, r.avg_context_switches)));

    let deadline_path = graphs_dir.join(format!("{}_deadline.csv", algorithm));
    let switch_path = graphs_dir.join(format!("{}_context_switch.csv", algorithm));

    debug!("Writing {}", deadline_path.display());
    fs::write(&deadline_path, deadline_csv)?;

    debug!("Writing {}", switch_path.display());
    fs::write(&switch_path, switch_csv)?;

    Ok(())
}

/// Render `<size>,<average>` lines with no trailing newline
///
/// **Private** - internal helper for write_algorithm_csvs
fn render_csv(rows: impl Iterator<Item = (usize, f64)>) -> String {
    rows.map(|(size, average)| format!("{},{}", size, format_average(average)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format an average for CSV output
///
/// **Private** - Debug formatting keeps a trailing `.0` on whole numbers
/// (`3.0`, not `3`), which the plotting scripts expect
fn format_average(value: f64) -> String {
    format!("{:?}", value)
}
