//! Diagnostic log accumulation for route report parsing
//!
//! Diagnostics are part of the output contract, not a side channel: every
//! warning and error produced during a parse is accumulated in order and
//! rendered into the log string returned to the caller. Entries are
//! mirrored to `tracing` for operators, but the accumulator is the
//! authoritative record.

use tracing::{error, warn};

use crate::constants::ERROR_LOG_MARKER;

/// Ordered accumulator for parse diagnostics
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: Vec<String>,
    warnings: usize,
    errors: usize,
}

impl DiagnosticLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning entry
    pub fn warning(&mut self, message: String) {
        warn!("{}", message);
        self.warnings += 1;
        self.entries.push(message);
    }

    /// Record an error entry
    pub fn error(&mut self, message: String) {
        error!("{}", message);
        self.errors += 1;
        self.entries.push(message);
    }

    /// Number of warning entries recorded
    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    /// Number of error entries recorded
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// All entries in the order they were recorded
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Check whether any entry carries the error marker text
    ///
    /// The check is textual by contract: the summary wording depends on the
    /// rendered log containing the marker, not on how an entry was
    /// classified when it was recorded.
    pub fn has_error_marker(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.contains(ERROR_LOG_MARKER))
    }

    /// Render the entries only, one per line, without a summary
    pub fn render_raw(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }

    /// Render the entries followed by the closing summary lines
    ///
    /// A log without the error marker closes with the completion summary,
    /// plus a no-data warning when nothing was extracted. A log carrying
    /// the marker closes with the warnings/errors summary instead.
    pub fn render_with_summary(&self, records_extracted: usize) -> String {
        let mut out = self.render_raw();

        if !self.has_error_marker() {
            out.push_str(&format!(
                "Processing completed. {} routes extracted.\n",
                records_extracted
            ));
            if records_extracted == 0 {
                out.push_str("Warning: No route data was extracted.\n");
            }
        } else {
            out.push_str(&format!(
                "Processing finished with warnings/errors. {} routes extracted.\n",
                records_extracted
            ));
        }

        out
    }
}
