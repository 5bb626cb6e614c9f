//! Generate command implementation.
//!
//! The generate command:
//! 1. Loads the workload table for each fixed size
//! 2. Aggregates every (algorithm, size) result directory
//! 3. Writes the per-algorithm CSV files
//! 4. Optionally writes a JSON summary of the grid
//!
//! All averages are computed before anything is written, so a parse or
//! lookup failure never leaves partial CSV output behind.

use crate::aggregator::{averages_for_algorithm, Algorithm, ReportGrid};
use crate::output::{write_report, write_summary, ReportSummary};
use crate::parser::load_workload;
use crate::utils::config::WORKLOAD_SIZES;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the generate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Directory containing `<size>.trace` input files
    pub input_dir: PathBuf,

    /// Root of the `<algorithm>/<size>/` result tree
    pub output_dir: PathBuf,

    /// Directory the CSV files are written into
    pub graphs_dir: PathBuf,

    /// Optional path for a JSON summary of the whole grid
    pub json_summary: Option<PathBuf>,
}

/// Validate generate arguments before doing any work
///
/// **Public** - called from main.rs before execute_generate
pub fn validate_args(args: &GenerateArgs) -> Result<()> {
    if !args.input_dir.is_dir() {
        bail!("Input directory does not exist: {}", args.input_dir.display());
    }
    if !args.output_dir.is_dir() {
        bail!(
            "Result directory does not exist: {}",
            args.output_dir.display()
        );
    }
    Ok(())
}

/// Execute the generate command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Ok if the full report was written, Err with context if any step fails
///
/// # Errors
/// * Input trace parse failures
/// * Missing result directories or unknown process names
/// * File write errors
pub fn execute_generate(args: GenerateArgs) -> Result<()> {
    info!("Generating report from: {}", args.output_dir.display());

    // Step 1: Load one workload table per size
    info!("Step 1/3: Loading workload tables...");
    let mut tables = Vec::with_capacity(WORKLOAD_SIZES.len());
    for size in WORKLOAD_SIZES {
        let table = load_workload(&args.input_dir, size)
            .with_context(|| format!("Failed to load the {}-process workload", size))?;
        debug!("Workload {}: {} process specs", size, table.len());
        tables.push(table);
    }

    // Step 2: Aggregate every (algorithm, size) cell
    info!("Step 2/3: Aggregating test results...");
    let mut rows = Vec::with_capacity(Algorithm::ALL.len() * tables.len());
    for algorithm in Algorithm::ALL {
        for table in &tables {
            let averages = averages_for_algorithm(algorithm, table, &args.output_dir)
                .with_context(|| {
                    format!(
                        "Failed to aggregate {} results for workload size {}",
                        algorithm, table.size
                    )
                })?;
            debug!(
                "{} size {}: hit rate {:.3}, avg switches {:.3}",
                algorithm, table.size, averages.deadline_hit_rate, averages.avg_context_switches
            );
            rows.push(averages);
        }
    }
    let grid = ReportGrid::new(rows);

    // Step 3: Write outputs
    info!("Step 3/3: Writing report files...");
    write_report(&grid, &args.graphs_dir).context("Failed to write CSV report")?;

    if let Some(json_path) = &args.json_summary {
        let summary = ReportSummary::new(grid);
        write_summary(&summary, json_path).context("Failed to write JSON summary")?;
        info!("✓ JSON summary written to: {}", json_path.display());
    }

    info!("✓ Report written to: {}", args.graphs_dir.display());
    Ok(())
}
