//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::app::services::report_parser::ParseStats;
use crate::cli::args::{CheckArgs, ConvertArgs};
use crate::config::InputSource;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Conversion statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Number of input lines scanned
    pub lines_scanned: usize,
    /// Number of route headers recognized
    pub headers_recognized: usize,
    /// Number of route headers rejected with a diagnostic
    pub headers_rejected: usize,
    /// Number of route records extracted into the CSV
    pub routes_extracted: usize,
    /// Number of warning entries in the diagnostic log
    pub warnings_logged: usize,
    /// Number of error entries in the diagnostic log
    pub errors_logged: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl ConversionStats {
    /// Build reporting statistics from the parser's counters
    pub fn from_parse_stats(stats: &ParseStats) -> Self {
        Self {
            lines_scanned: stats.lines_scanned,
            headers_recognized: stats.headers_recognized,
            headers_rejected: stats.headers_rejected,
            routes_extracted: stats.records_extracted,
            warnings_logged: stats.warnings_logged,
            errors_logged: stats.errors_logged,
            ..Default::default()
        }
    }

    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for convert command
pub fn setup_logging(args: &ConvertArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("route_processor={}", log_level)));

    // Set up subscriber based on output format preference
    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Set up structured logging for check command
pub fn setup_check_logging(args: &CheckArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("route_processor={}", log_level)));

    // Standard logging with timestamps
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read the raw report bytes from a file or standard input
///
/// The bytes are handed to the parser unvalidated; invalid UTF-8 is the
/// parser's fatal input split case, not an I/O error.
pub fn read_report(input: &InputSource) -> Result<Vec<u8>> {
    match input {
        InputSource::File(path) => std::fs::read(path).map_err(|e| {
            Error::io(format!("Failed to read report file {}", path.display()), e)
        }),
        InputSource::Stdin => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|e| Error::io("Failed to read report from stdin".to_string(), e))?;
            Ok(buffer)
        }
    }
}

/// Write one output file, guarding against accidental overwrites
///
/// When the target exists and overwriting is not forced, an interactive
/// run prompts for confirmation; a non-interactive run fails so piped
/// invocations never block on a prompt. Returns the bytes written.
pub fn write_output(
    path: &Path,
    contents: &str,
    force_overwrite: bool,
    interactive: bool,
) -> Result<u64> {
    if path.exists() && !force_overwrite {
        let overwrite = interactive && crate::cli::input::confirm_overwrite(path)?;
        if !overwrite {
            return Err(Error::output_exists(path.display().to_string()));
        }
    }

    std::fs::write(path, contents)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(contents.len() as u64)
}

/// Create a progress spinner with appropriate styling
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
