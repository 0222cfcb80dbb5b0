//! Single-pass state machine driver for route reports
//!
//! The scanner walks the report one line at a time holding one of two
//! states: seeking the next route header, or reading the body of the route
//! whose header was just recognized. A separator arriving mid-body both
//! finalizes the current route and is immediately re-dispatched through
//! the header-seeking transition, so no input line is lost between routes.

use std::mem;

use tracing::debug;

use super::diagnostics::DiagnosticLog;
use super::header::{HeaderError, RouteHeader};
use super::line_classifier::{LineClass, classify_line};
use super::normalizer::normalize_route_description;
use super::stats::{ParseOutcome, ParseStats};
use crate::app::models::{PendingRoute, RouteRecord};
use crate::constants::{UNBUILT_ROUTING_PREFIX, UNBUILT_ROUTING_TAG};

/// Scanner state: what the next line is expected to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No route is open; looking for the next header line
    SeekingHeader,

    /// A header was recognized; accumulating the route body
    ReadingBody,
}

/// Which dispatch pass a line is being processed under
///
/// A separator that ends a body block is re-dispatched to the
/// header-seeking transition as a second, explicit pass; diagnostics
/// produced on that pass are tagged so the log tells the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchPass {
    Initial,
    Redispatch,
}

impl DispatchPass {
    fn warning_tag(self) -> &'static str {
        match self {
            DispatchPass::Initial => "",
            DispatchPass::Redispatch => " (reprocess)",
        }
    }
}

/// Two-state line scanner that drives one parse
///
/// Feed lines in order with [`scan_line`](ReportScanner::scan_line), then
/// call [`finish`](ReportScanner::finish) to close any open route and
/// collect the outcome. [`parse_report`] wraps this for whole documents.
#[derive(Debug)]
pub struct ReportScanner {
    state: ScanState,
    pending: PendingRoute,
    records: Vec<RouteRecord>,
    log: DiagnosticLog,
    lines_scanned: usize,
    headers_recognized: usize,
    headers_rejected: usize,
}

impl ReportScanner {
    /// Create a scanner ready to process line 1
    pub fn new() -> Self {
        Self {
            state: ScanState::SeekingHeader,
            pending: PendingRoute::default(),
            records: Vec::new(),
            log: DiagnosticLog::new(),
            lines_scanned: 0,
            headers_recognized: 0,
            headers_rejected: 0,
        }
    }

    /// Current scanner state
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Feed one input line to the scanner
    ///
    /// `line_number` is 1-based and appears verbatim in diagnostics.
    pub fn scan_line(&mut self, line_number: usize, raw: &str) {
        self.lines_scanned += 1;
        match self.state {
            ScanState::SeekingHeader => self.seek_header(line_number, raw, DispatchPass::Initial),
            ScanState::ReadingBody => self.read_body(line_number, raw),
        }
    }

    /// Handle end of input and produce the outcome
    ///
    /// A route still open at end of input is finalized from whatever body
    /// was read; a route with no body at all is dropped with a warning.
    pub fn finish(mut self) -> ParseOutcome {
        if self.state == ScanState::ReadingBody {
            if self.pending.has_body() {
                let body = self.pending.joined_body();
                self.emit_record(&body);
            } else {
                self.log.warning(format!(
                    "Warning: Input ended before any route details were read for the route starting at line {}. No record emitted.",
                    self.pending.header_line_number
                ));
            }
        }
        self.into_outcome()
    }

    /// Transition for lines arriving while no route is open
    fn seek_header(&mut self, line_number: usize, raw: &str, pass: DispatchPass) {
        match classify_line(raw) {
            LineClass::Header => match RouteHeader::parse(raw) {
                Ok(header) => {
                    debug!(
                        "Header recognized at line {}: {} to {}",
                        line_number,
                        header.origin.trim(),
                        header.destination
                    );
                    self.headers_recognized += 1;
                    self.pending = PendingRoute::new(
                        header.origin,
                        header.destination,
                        header.suffix,
                        header.distance_text,
                        line_number,
                    );
                    self.state = ScanState::ReadingBody;
                }
                Err(HeaderError::NoDestinationCode { route_id }) => {
                    self.headers_rejected += 1;
                    self.log.warning(format!(
                        "Warning line {}{}: Could not find any 4-uppercase-letter destination code in '{}'. Skipping.",
                        line_number,
                        pass.warning_tag(),
                        route_id
                    ));
                }
                Err(HeaderError::DestinationIndexNotFound { code, route_id }) => {
                    self.headers_rejected += 1;
                    self.log.warning(format!(
                        "Warning line {}{}: Internal logic error finding index for '{}' in '{}'. Skipping.",
                        line_number,
                        pass.warning_tag(),
                        code,
                        route_id
                    ));
                }
                Err(err @ HeaderError::MarkerNotFound) => {
                    self.headers_rejected += 1;
                    let message = match pass {
                        DispatchPass::Initial => format!(
                            "Error parsing distance line {}: {}\nError: {}",
                            line_number,
                            raw.trim(),
                            err
                        ),
                        DispatchPass::Redispatch => format!(
                            "Error parsing distance line {} on re-process: {}\nError: {}",
                            line_number,
                            raw.trim(),
                            err
                        ),
                    };
                    self.log.error(message);
                }
            },

            // Blank lines, section breaks, and stray text between routes
            // carry no route data in this state
            LineClass::Blank | LineClass::SectionBreak | LineClass::Plain => {}
        }
    }

    /// Transition for lines arriving while a route body is open
    fn read_body(&mut self, line_number: usize, raw: &str) {
        let trimmed = raw.trim();
        match classify_line(raw) {
            LineClass::Blank => {
                if self.pending.has_body() {
                    let body = self.pending.joined_body();
                    self.emit_record(&body);
                } else {
                    // Header with no body before a blank line: dropped silently
                    self.pending = PendingRoute::default();
                }
                self.state = ScanState::SeekingHeader;
            }

            _ if trimmed.starts_with(UNBUILT_ROUTING_PREFIX) => {
                // The placeholder tag replaces any body text already read
                self.emit_record(UNBUILT_ROUTING_TAG);
                self.state = ScanState::SeekingHeader;
            }

            LineClass::Header | LineClass::SectionBreak => {
                if self.pending.has_body() {
                    let body = self.pending.joined_body();
                    self.emit_record(&body);
                } else {
                    self.log.warning(format!(
                        "Warning after line {}: Found separator line {} immediately after route start or with empty route details. Record may be incomplete.",
                        self.pending.header_line_number, line_number
                    ));
                    self.pending = PendingRoute::default();
                }
                // The separator itself still carries meaning for the next
                // route; re-dispatch it with state fully reset
                self.state = ScanState::SeekingHeader;
                self.seek_header(line_number, raw, DispatchPass::Redispatch);
            }

            LineClass::Plain => self.pending.push_body_line(trimmed),
        }
    }

    /// Normalize the body text and move the pending route into the records
    fn emit_record(&mut self, body: &str) {
        let pending = mem::take(&mut self.pending);
        let description = normalize_route_description(body, Some(&pending.destination)).to_string();
        debug!(
            "Route finalized: {} to {} ({} chars of description)",
            pending.origin.trim(),
            pending.destination,
            description.len()
        );
        self.records.push(pending.into_record(description));
    }

    fn into_outcome(self) -> ParseOutcome {
        let records_extracted = self.records.len();
        let stats = ParseStats {
            lines_scanned: self.lines_scanned,
            headers_recognized: self.headers_recognized,
            headers_rejected: self.headers_rejected,
            records_extracted,
            warnings_logged: self.log.warning_count(),
            errors_logged: self.log.error_count(),
            aborted: false,
        };
        ParseOutcome {
            csv: render_csv(&self.records),
            log: self.log.render_with_summary(records_extracted),
            stats,
        }
    }
}

impl Default for ReportScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Render all records as the flat CSV output string
///
/// Lines are joined with single newlines and non-empty output gains one
/// trailing newline. No quoting or escaping is applied.
fn render_csv(records: &[RouteRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let mut csv = records
        .iter()
        .map(RouteRecord::to_csv_line)
        .collect::<Vec<_>>()
        .join("\n");
    csv.push('\n');
    csv
}

/// Parse a complete route report held in memory
///
/// This is the conversion contract: one document string in, the CSV output
/// and rendered diagnostic log out. The scanner makes a single pass over
/// `content.lines()`, numbering lines from 1.
pub fn parse_report(content: &str) -> ParseOutcome {
    let mut scanner = ReportScanner::new();
    for (index, line) in content.lines().enumerate() {
        scanner.scan_line(index + 1, line);
    }
    scanner.finish()
}

/// Parse a route report from raw bytes
///
/// Input that is not valid UTF-8 cannot be split into lines; the parse
/// aborts with a fatal log entry, an empty CSV, and no closing summary.
pub fn parse_report_bytes(input: &[u8]) -> ParseOutcome {
    match std::str::from_utf8(input) {
        Ok(content) => parse_report(content),
        Err(e) => {
            let mut log = DiagnosticLog::new();
            log.error(format!(
                "An unexpected error occurred splitting input content: {}",
                e
            ));
            let stats = ParseStats {
                errors_logged: log.error_count(),
                aborted: true,
                ..ParseStats::new()
            };
            ParseOutcome {
                csv: String::new(),
                log: log.render_raw(),
                stats,
            }
        }
    }
}
