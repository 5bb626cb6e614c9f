//! Optional JSON summary of the report grid.
//!
//! Written only when the user asks for it; a machine-readable companion
//! to the CSV files for scripts that want the whole grid in one place.

use crate::aggregator::averages::ReportGrid;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Versioned wrapper around the report grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Schema version (e.g. "1.0.0")
    pub version: String,

    /// Full grid of per-(algorithm, size) averages
    pub grid: ReportGrid,

    /// ISO 8601 generation timestamp
    pub generated_at: String,
}

impl ReportSummary {
    /// Wrap a grid with the current schema version and timestamp
    pub fn new(grid: ReportGrid) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            grid,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Write a report summary to a JSON file
///
/// **Public** - called by the generate command when `--json` is passed
///
/// # Errors
/// * `OutputError::InvalidPath` - Empty path or path pointing at a directory
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_summary(summary: &ReportSummary, output_path: &Path) -> Result<(), OutputError> {
    info!("Writing JSON summary to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, summary).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a report summary back from a JSON file
///
/// **Public** - useful for downstream scripts and tests
pub fn read_summary(input_path: &Path) -> Result<ReportSummary, OutputError> {
    debug!("Reading JSON summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let summary: ReportSummary =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(summary)
}

/// Validate that the output path is usable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::averages::{Algorithm, AlgorithmAverages, ReportGrid};

    fn sample_summary() -> ReportSummary {
        ReportSummary::new(ReportGrid::new(vec![AlgorithmAverages {
            algorithm: Algorithm::Priority,
            workload_size: 50,
            deadline_hit_rate: 0.5,
            avg_context_switches: 1.5,
        }]))
    }

    #[test]
    fn test_write_and_read_summary() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let summary = sample_summary();

        write_summary(&summary, temp_file.path()).unwrap();
        let loaded = read_summary(temp_file.path()).unwrap();

        assert_eq!(loaded.version, summary.version);
        assert_eq!(loaded.grid, summary.grid);
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/summary.json");

        write_summary(&sample_summary(), &nested_path).unwrap();
        assert!(nested_path.exists());
    }
}
