//! Application constants for the route processor
//!
//! This module contains the report grammar markers, output field widths,
//! and default filenames used throughout the route processor application.
//!
//! The grammar constants are contractual: they reproduce the exact byte
//! sequences the legacy scheduling system emits, so changing any of them
//! changes which lines the scanner recognizes.

// =============================================================================
// Report Grammar Markers
// =============================================================================

/// Marker that identifies a route header line.
///
/// The single leading space is significant: the legacy dump always pads
/// the distance label with one space, and matching without it would also
/// match description text such as "LONG-DISTANCE:".
pub const DISTANCE_MARKER: &str = " Distance: ";

/// Marker that identifies an airline section banner line.
///
/// Matched against the raw line (not trimmed) by substring search, since
/// banner lines carry variable decoration on both sides.
pub const AIRLINE_SECTION_MARKER: &str = "ROUTES FOR AIRLINE:";

/// Form feed character used by the legacy print spooler as a page break.
pub const PAGE_BREAK_CHAR: char = '\u{000C}';

/// Prefix of the placeholder body emitted when a route has no routing.
pub const UNBUILT_ROUTING_PREFIX: &str = "Routing has not been built";

/// Description tag recorded in place of a body for unbuilt routings.
pub const UNBUILT_ROUTING_TAG: &str = "Rou";

// =============================================================================
// Output Record Format
// =============================================================================

/// Record type tag, first field of every emitted CSV line.
pub const RECORD_TAG: &str = "C";

/// Width the origin field is padded to in the output record.
pub const ORIGIN_FIELD_WIDTH: usize = 4;

/// Length of a destination station code (uppercase ASCII letters).
pub const DESTINATION_CODE_LEN: usize = 4;

// =============================================================================
// Diagnostic Log Format
// =============================================================================

/// Case-sensitive marker that flags a log entry as an error.
///
/// The closing summary line switches wording when any entry contains this
/// text, so error entries must spell it exactly and warning entries must
/// avoid it.
pub const ERROR_LOG_MARKER: &str = "Error";

// =============================================================================
// Default Output Filenames
// =============================================================================

/// Default stem used when the input is stdin and no output path is given.
pub const DEFAULT_OUTPUT_STEM: &str = "routes";

/// Extension of the CSV output file.
pub const CSV_EXTENSION: &str = "csv";

/// Extension of the diagnostic log output file.
pub const LOG_EXTENSION: &str = "log";

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the default CSV output filename for an input stem
pub fn get_csv_filename(stem: &str) -> String {
    format!("{}.{}", stem, CSV_EXTENSION)
}

/// Get the default diagnostic log filename for an input stem
pub fn get_log_filename(stem: &str) -> String {
    format!("{}.{}", stem, LOG_EXTENSION)
}

/// Check whether a character can belong to a destination code
pub fn is_destination_char(c: char) -> bool {
    c.is_ascii_uppercase()
}
