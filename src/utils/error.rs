//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing input trace files and test-result files
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read trace file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{path}:{line}: expected 4 fields (name deadline arrival burst), found {found}")]
    WrongFieldCount {
        path: String,
        line: usize,
        found: usize,
    },

    #[error("{path}:{line}: invalid integer field '{value}'")]
    InvalidInteger {
        path: String,
        line: usize,
        value: String,
    },

    #[error("{path}:{line}: execution record is missing a completion-time field")]
    TruncatedRecord { path: String, line: usize },

    #[error("Result file is empty (no trailing context-switch count): {0}")]
    EmptyResultFile(String),
}

/// Errors that can occur during aggregation of test-result directories
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Failed to read result directory: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Process '{name}' in result file {file} is not in the {size}-process workload")]
    UnknownProcess {
        name: String,
        file: String,
        size: usize,
    },

    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("Workload size is zero, cannot compute averages")]
    EmptyWorkload,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
