//! Route report parser for legacy airline scheduling dumps
//!
//! This module converts the semi-structured route report text produced by
//! the legacy scheduling system into flat CSV, one record per route, plus
//! a diagnostic log describing everything the parse skipped or repaired.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`scanner`] - Two-state line scanner driving the whole parse
//! - [`line_classifier`] - Structural classification of raw input lines
//! - [`header`] - Route header field extraction
//! - [`normalizer`] - Route description truncation and cleanup
//! - [`diagnostics`] - Ordered warning/error accumulation and log rendering
//! - [`stats`] - Parse statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use route_processor::app::services::report_parser::parse_report;
//!
//! let report = "LAX KJFK 1 Distance: 2475\nLAX DEN ORD CLE KJFK\n";
//! let outcome = parse_report(report);
//!
//! assert_eq!(outcome.csv, "C,LAX ,KJFK,1,2475,LAX DEN ORD CLE KJFK\n");
//! println!(
//!     "Extracted {} routes from {} lines",
//!     outcome.stats.records_extracted, outcome.stats.lines_scanned
//! );
//! ```

pub mod diagnostics;
pub mod header;
pub mod line_classifier;
pub mod normalizer;
pub mod scanner;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use diagnostics::DiagnosticLog;
pub use header::{HeaderError, RouteHeader};
pub use line_classifier::{LineClass, classify_line};
pub use normalizer::normalize_route_description;
pub use scanner::{ReportScanner, ScanState, parse_report, parse_report_bytes};
pub use stats::{ParseOutcome, ParseStats};
