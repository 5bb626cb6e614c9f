//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod generate;
pub mod validate;

// Re-export main command functions
pub use generate::{execute_generate, validate_args, GenerateArgs};
pub use validate::execute_validate;
