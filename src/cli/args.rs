//! Command-line argument definitions for the route processor
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the route report processor
///
/// Converts semi-structured route reports dumped from a legacy airline
/// scheduling system into flat CSV files plus a diagnostic log.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "route-processor",
    version,
    about = "Convert legacy airline route report dumps into flat CSV with a diagnostic log",
    long_about = "A production-ready tool that parses the semi-structured route report text \
                  produced by a legacy airline scheduling system. Each route block is flattened \
                  into one CSV record (origin, destination, suffix, distance, full routing) and \
                  every recoverable anomaly is captured in a diagnostic log so no input line \
                  fails silently."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the route processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a route report into CSV and a diagnostic log (default command)
    Convert(ConvertArgs),
    /// Parse a route report and show its diagnostics without writing files
    Check(CheckArgs),
}

/// Arguments for the convert command (main conversion)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input path to the route report text file
    ///
    /// The raw dump produced by the scheduling system's report printer.
    /// If not specified, the report is read from standard input.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to the route report text file (stdin if omitted)"
    )]
    pub input_path: Option<PathBuf>,

    /// Output path for the extracted CSV
    ///
    /// Defaults to the input file with a .csv extension, or routes.csv
    /// when reading from standard input.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the extracted CSV"
    )]
    pub csv_output: Option<PathBuf>,

    /// Output path for the diagnostic log
    ///
    /// Defaults to the input file with a .log extension, or routes.log
    /// when reading from standard input.
    #[arg(
        long = "log-output",
        value_name = "PATH",
        help = "Output path for the diagnostic log"
    )]
    pub log_output: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing files
    ///
    /// The diagnostic log goes to stderr so the CSV stream stays clean
    /// for piping into other tools.
    #[arg(
        long = "stdout",
        help = "Print CSV to stdout and diagnostics to stderr",
        conflicts_with_all = ["csv_output", "log_output"]
    )]
    pub to_stdout: bool,

    /// Force overwrite of existing output files
    ///
    /// By default, the processor prompts before overwriting existing
    /// CSV or log files. This flag skips the prompt.
    #[arg(long = "force", help = "Force overwrite of existing output files")]
    pub force_overwrite: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the check command (diagnostics without file output)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Input path to the route report text file
    ///
    /// If not specified, the report is read from standard input.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to the route report text file (stdin if omitted)"
    )]
    pub input_path: Option<PathBuf>,

    /// Treat warnings as failures
    ///
    /// By default, the check only fails when the diagnostic log contains
    /// errors. This flag also fails the check on warnings.
    #[arg(long = "strict", help = "Fail the check on warnings as well as errors")]
    pub strict: bool,

    /// Output format for the check report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the check report"
    )]
    pub output_format: OutputFormat,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input path exists (only if explicitly provided)
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input_path.display()
                )));
            }
        }

        // Validate output directories exist if explicit paths were given
        for output in [&self.csv_output, &self.log_output].into_iter().flatten() {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the progress spinner (not in quiet or stdout mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.to_stdout
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn", // Default level for check command
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            csv_output: None,
            log_output: None,
            to_stdout: false,
            force_overwrite: false,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}
