//! Route Processor Library
//!
//! A Rust library for converting route report dumps from a legacy airline
//! scheduling system into flat CSV records.
//!
//! This library provides tools for:
//! - Scanning semi-structured route report text in a single pass
//! - Extracting origin, destination, suffix, and distance from header lines
//! - Normalizing route descriptions against their destination codes
//! - Accumulating a complete diagnostic log alongside the data output
//! - Byte-stable CSV and log rendering suitable for downstream diffing

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod report_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{PendingRoute, RouteRecord};
pub use app::services::report_parser::{ParseOutcome, ParseStats, parse_report, parse_report_bytes};
pub use config::Config;

/// Result type alias for the route processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for route processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Output file already exists and overwriting was not confirmed
    #[error("Output file already exists: {path} (pass --force to overwrite)")]
    OutputExists { path: String },

    /// Input content could not be split into scannable lines
    #[error("Input split error: {message}")]
    InputSplit { message: String },

    /// Diagnostic check found problems in the report
    #[error("Route report check failed: {errors} error(s), {warnings} warning(s)")]
    CheckFailed { errors: usize, warnings: usize },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an output exists error
    pub fn output_exists(path: impl Into<String>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// Create an input split error
    pub fn input_split(message: impl Into<String>) -> Self {
        Self::InputSplit {
            message: message.into(),
        }
    }

    /// Create a check failure error from diagnostic counts
    pub fn check_failed(errors: usize, warnings: usize) -> Self {
        Self::CheckFailed { errors, warnings }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
