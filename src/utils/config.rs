//! Configuration and constants for the CLI.

/// Conventional directory holding the per-size input trace files
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Conventional directory tree holding per-test scheduler output
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Conventional directory the CSV summaries are written into
pub const DEFAULT_GRAPHS_DIR: &str = "graphs";

/// Current JSON summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// The experiment runs each algorithm against three fixed workload sizes.
// Input files are named "<size>.trace" and result directories are keyed
// by the same size, so these constants drive both lookups.
pub const WORKLOAD_SIZES: [usize; 3] = [50, 250, 500];

/// File extension of input trace files ("<size>.trace")
pub const TRACE_EXTENSION: &str = "trace";
