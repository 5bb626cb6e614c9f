//! Sched Trace Report CLI
//!
//! Aggregates scheduler-simulation trace files into summary CSV files
//! for plotting: one deadline-analysis CSV and one context-switch CSV
//! per scheduling algorithm.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use sched_trace_report::commands::{
    execute_generate, execute_validate, validate_args, GenerateArgs,
};
use sched_trace_report::utils::config::{
    DEFAULT_GRAPHS_DIR, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, SCHEMA_VERSION, WORKLOAD_SIZES,
};

/// Sched Trace Report - CSV summaries for scheduler experiments
#[derive(Parser, Debug)]
#[command(name = "sched-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to generate)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate test results and write the CSV report
    Generate {
        /// Directory containing <size>.trace input files
        #[arg(long, default_value = DEFAULT_INPUT_DIR)]
        input_dir: PathBuf,

        /// Root of the <algorithm>/<size>/ result tree
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Directory the CSV files are written into
        #[arg(long, default_value = DEFAULT_GRAPHS_DIR)]
        graphs_dir: PathBuf,

        /// Also write a JSON summary of the whole grid to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Parse the input trace files and report process counts
    Validate {
        /// Directory containing <size>.trace input files
        #[arg(long, default_value = DEFAULT_INPUT_DIR)]
        input_dir: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // A bare invocation runs the full pipeline with the conventional paths
    let command = cli.command.unwrap_or(Commands::Generate {
        input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
        output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        graphs_dir: PathBuf::from(DEFAULT_GRAPHS_DIR),
        json: None,
    });

    // Execute command
    match command {
        Commands::Generate {
            input_dir,
            output_dir,
            graphs_dir,
            json,
        } => {
            let args = GenerateArgs {
                input_dir,
                output_dir,
                graphs_dir,
                json_summary: json,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute generate
            execute_generate(args)?;
        }

        Commands::Validate { input_dir } => {
            execute_validate(&input_dir)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Sched Trace Report v{}", env!("CARGO_PKG_VERSION"));
    println!("JSON summary schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Workload sizes: {:?}", WORKLOAD_SIZES);
    println!("Aggregates scheduler-simulation traces into plot-ready CSV files.");
}
