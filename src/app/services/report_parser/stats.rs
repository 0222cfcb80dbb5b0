//! Parsing statistics and result structures for route report processing
//!
//! This module provides the types returned from a parse: the two output
//! strings of the conversion contract plus counters describing what the
//! scanner saw on its way through the document.

/// Complete result of parsing one route report
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Flat CSV output, one line per extracted route
    ///
    /// Non-empty output always ends with a single trailing newline; a parse
    /// that extracted nothing yields the empty string.
    pub csv: String,

    /// Rendered diagnostic log
    ///
    /// Ends with the closing summary lines, except when the parse aborted
    /// before scanning could start.
    pub log: String,

    /// Counters describing the parse
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of input lines fed to the scanner
    pub lines_scanned: usize,

    /// Number of header lines that parsed into a route successfully
    pub headers_recognized: usize,

    /// Number of header lines rejected with a diagnostic
    pub headers_rejected: usize,

    /// Number of route records in the CSV output
    pub records_extracted: usize,

    /// Number of warning entries in the diagnostic log
    pub warnings_logged: usize,

    /// Number of error entries in the diagnostic log
    pub errors_logged: usize,

    /// Whether the parse aborted before scanning any lines
    pub aborted: bool,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_scanned: 0,
            headers_recognized: 0,
            headers_rejected: 0,
            records_extracted: 0,
            warnings_logged: 0,
            errors_logged: 0,
            aborted: false,
        }
    }

    /// Calculate the header acceptance rate as a percentage
    pub fn header_acceptance_rate(&self) -> f64 {
        let attempts = self.headers_recognized + self.headers_rejected;
        if attempts == 0 {
            0.0
        } else {
            (self.headers_recognized as f64 / attempts as f64) * 100.0
        }
    }

    /// Check if the parse ran to completion without any diagnostics
    pub fn is_clean(&self) -> bool {
        !self.aborted && self.warnings_logged == 0 && self.errors_logged == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
