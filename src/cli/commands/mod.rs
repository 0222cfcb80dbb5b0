//! Command implementations for the route processor CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod check;
pub mod convert;
pub mod shared;

// Re-export the main types and functions for backward compatibility
pub use shared::ConversionStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the route processor
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `convert`: Full conversion workflow with CSV and diagnostic log output
/// - `check`: Parse-only diagnostics pass without writing files
pub fn run(args: Args) -> Result<ConversionStats> {
    match args.get_command() {
        Commands::Convert(convert_args) => convert::run_convert(convert_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}
