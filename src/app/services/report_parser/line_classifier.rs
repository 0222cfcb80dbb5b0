//! Line classification for route report scanning
//!
//! Every input line is classified into exactly one structural category
//! before the state machine acts on it. Classification is stateless: the
//! same line always classifies the same way regardless of scanner state.

use crate::constants::{AIRLINE_SECTION_MARKER, DISTANCE_MARKER, PAGE_BREAK_CHAR};

/// Structural category of a single report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Line is empty after trimming
    Blank,

    /// Airline section banner or page break from the print spooler
    SectionBreak,

    /// Route header line carrying the distance marker
    Header,

    /// Anything else: route body text or ignorable noise
    Plain,
}

/// Classify one raw input line
///
/// Categories are checked in priority order: blank, section break, header,
/// plain. A line matching several categories takes the first, so a banner
/// line that happens to contain the distance marker is still a section
/// break. The banner and header markers are matched against the raw line
/// because both carry significant interior spacing; the blank and page
/// break checks use the trimmed form.
pub fn classify_line(raw: &str) -> LineClass {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if raw.contains(AIRLINE_SECTION_MARKER) || trimmed.starts_with(PAGE_BREAK_CHAR) {
        return LineClass::SectionBreak;
    }

    if raw.contains(DISTANCE_MARKER) {
        return LineClass::Header;
    }

    LineClass::Plain
}
