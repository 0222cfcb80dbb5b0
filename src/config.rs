//! Configuration management and validation.
//!
//! Provides the configuration structure for a conversion run: where the
//! raw report text comes from, where the CSV and diagnostic log are
//! written, and how existing output files are handled.

use crate::constants::{get_csv_filename, get_log_filename, CSV_EXTENSION, DEFAULT_OUTPUT_STEM, LOG_EXTENSION};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source of the raw route report text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    /// Read the report from a file on disk
    File(PathBuf),

    /// Read the report from standard input
    Stdin,
}

impl InputSource {
    /// Label used in log messages and run summaries
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Default CSV path derived from this source
    ///
    /// File inputs keep their directory and stem with the extension
    /// swapped; stdin falls back to the default stem in the current
    /// directory.
    fn default_csv_path(&self) -> PathBuf {
        match self {
            InputSource::File(path) => path.with_extension(CSV_EXTENSION),
            InputSource::Stdin => PathBuf::from(get_csv_filename(DEFAULT_OUTPUT_STEM)),
        }
    }

    /// Default diagnostic log path derived from this source
    fn default_log_path(&self) -> PathBuf {
        match self {
            InputSource::File(path) => path.with_extension(LOG_EXTENSION),
            InputSource::Stdin => PathBuf::from(get_log_filename(DEFAULT_OUTPUT_STEM)),
        }
    }
}

/// Global configuration for a report conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the raw report text is read from
    pub input: InputSource,

    /// Explicit CSV output path, overriding the derived default
    pub csv_output_path: Option<PathBuf>,

    /// Explicit diagnostic log output path, overriding the derived default
    pub log_output_path: Option<PathBuf>,

    /// Overwrite existing output files without prompting
    pub force_overwrite: bool,

    /// Print the CSV to stdout instead of writing files
    pub write_to_stdout: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            csv_output_path: None,
            log_output_path: None,
            force_overwrite: false,
            write_to_stdout: false,
        }
    }
}

impl Config {
    /// Create configuration reading from a report file
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            input: InputSource::File(path.into()),
            ..Self::default()
        }
    }

    /// Create configuration reading from standard input
    pub fn from_stdin() -> Self {
        Self::default()
    }

    /// Set an explicit CSV output path
    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Set an explicit diagnostic log output path
    pub fn with_log_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_output_path = Some(path.into());
        self
    }

    /// Enable overwriting of existing output files
    pub fn with_force_overwrite(mut self) -> Self {
        self.force_overwrite = true;
        self
    }

    /// Route the CSV to stdout instead of the filesystem
    pub fn with_stdout_output(mut self) -> Self {
        self.write_to_stdout = true;
        self
    }

    /// CSV output path after applying the derived default
    pub fn resolved_csv_path(&self) -> PathBuf {
        self.csv_output_path
            .clone()
            .unwrap_or_else(|| self.input.default_csv_path())
    }

    /// Diagnostic log output path after applying the derived default
    pub fn resolved_log_path(&self) -> PathBuf {
        self.log_output_path
            .clone()
            .unwrap_or_else(|| self.input.default_log_path())
    }

    /// Validate the configuration before any work starts
    ///
    /// Checks that a file input exists and is a regular file, and that
    /// the CSV and log outputs do not collide.
    pub fn validate(&self) -> Result<()> {
        if let InputSource::File(path) = &self.input {
            if !path.exists() {
                return Err(Error::file_not_found(path.display().to_string()));
            }
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a regular file: {}",
                    path.display()
                )));
            }
        }

        if !self.write_to_stdout {
            let csv_path = self.resolved_csv_path();
            let log_path = self.resolved_log_path();
            if csv_path == log_path {
                return Err(Error::configuration(format!(
                    "CSV and log outputs resolve to the same path: {}",
                    csv_path.display()
                )));
            }
            if let InputSource::File(input_path) = &self.input {
                if input_path == &csv_path || input_path == &log_path {
                    return Err(Error::configuration(format!(
                        "Output path would overwrite the input report: {}",
                        input_path.display()
                    )));
                }
            }
        }

        Ok(())
    }
}
