//! Validate command implementation.
//!
//! Parses every input trace file and reports per-size process counts
//! without touching any result files. Useful for checking freshly
//! generated workloads before a simulation batch.

use crate::parser::{load_workload, trace_file_path};
use crate::utils::config::WORKLOAD_SIZES;
use anyhow::{Context, Result};
use std::path::Path;

/// Execute the validate command
///
/// **Public** - main entry point called from main.rs
pub fn execute_validate(input_dir: &Path) -> Result<()> {
    println!("Validating input traces in: {}", input_dir.display());

    for size in WORKLOAD_SIZES {
        let path = trace_file_path(input_dir, size);
        let table = load_workload(input_dir, size)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        println!(
            "✓ {}: {} process specs (workload size {})",
            path.display(),
            table.len(),
            size
        );
        if table.len() != size {
            println!(
                "  warning: spec count differs from workload size (duplicate names?)"
            );
        }
    }

    Ok(())
}
