//! Data models for route report processing
//!
//! This module contains the core data structures for representing routes as
//! they move through the scanner: the in-progress accumulator held while a
//! route's body lines are still being read, and the finished record that is
//! rendered into the flat CSV output.

use serde::{Deserialize, Serialize};

use crate::constants::RECORD_TAG;

// =============================================================================
// In-Progress Route Structure
// =============================================================================

/// A route whose header has been recognized but whose body is still being read
///
/// Holds the header fields exactly as the extractor produced them (origin
/// already padded) together with the body lines accumulated so far. The
/// `Default` value is the fresh, empty accumulator the scanner resets to
/// between routes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingRoute {
    /// Origin text, truncated and space-padded to the fixed field width
    pub origin: String,

    /// Destination station code (four uppercase ASCII letters)
    pub destination: String,

    /// Trailing header text after the destination code (may be empty)
    pub suffix: String,

    /// Distance value exactly as printed in the header, not interpreted
    pub distance_text: String,

    /// Line number of the header that opened this route (1-based)
    pub header_line_number: usize,

    /// Trimmed body lines accumulated so far, in input order
    pub body_parts: Vec<String>,
}

impl PendingRoute {
    /// Create a fresh accumulator from extracted header fields
    pub fn new(
        origin: String,
        destination: String,
        suffix: String,
        distance_text: String,
        header_line_number: usize,
    ) -> Self {
        Self {
            origin,
            destination,
            suffix,
            distance_text,
            header_line_number,
            body_parts: Vec::new(),
        }
    }

    /// Append one trimmed body line to the accumulator
    pub fn push_body_line(&mut self, line: &str) {
        self.body_parts.push(line.to_string());
    }

    /// Check whether any body lines have been read for this route
    pub fn has_body(&self) -> bool {
        !self.body_parts.is_empty()
    }

    /// Join the accumulated body lines with single spaces
    pub fn joined_body(&self) -> String {
        self.body_parts.join(" ")
    }

    /// Consume the accumulator into a finished record with the given description
    pub fn into_record(self, description: String) -> RouteRecord {
        RouteRecord {
            origin: self.origin,
            destination: self.destination,
            suffix: self.suffix,
            distance_text: self.distance_text,
            description,
        }
    }
}

// =============================================================================
// Finished Route Record Structure
// =============================================================================

/// A fully assembled route, ready to be rendered as one CSV line
///
/// Field values are emitted verbatim. The output format is a raw
/// comma-joined line with no quoting or escaping, reproducing the legacy
/// record layout byte for byte.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteRecord {
    /// Origin text, space-padded to the fixed field width
    pub origin: String,

    /// Destination station code
    pub destination: String,

    /// Header text that followed the destination code (may be empty)
    pub suffix: String,

    /// Distance value as printed in the report header
    pub distance_text: String,

    /// Normalized route description assembled from the body lines
    pub description: String,
}

impl RouteRecord {
    /// Render this record as one line of the output CSV (no trailing newline)
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            RECORD_TAG,
            self.origin,
            self.destination,
            self.suffix,
            self.distance_text,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_pending() -> PendingRoute {
        PendingRoute::new(
            "LAX ".to_string(),
            "KJFK".to_string(),
            "1".to_string(),
            "2475".to_string(),
            12,
        )
    }

    #[test]
    fn test_default_is_empty_accumulator() {
        let pending = PendingRoute::default();
        assert_eq!(pending.origin, "");
        assert_eq!(pending.header_line_number, 0);
        assert!(!pending.has_body());
        assert_eq!(pending.joined_body(), "");
    }

    #[test]
    fn test_body_accumulation_preserves_order() {
        let mut pending = create_test_pending();
        assert!(!pending.has_body());

        pending.push_body_line("LAX DEN ORD");
        pending.push_body_line("CLE KJFK");
        assert!(pending.has_body());
        assert_eq!(pending.joined_body(), "LAX DEN ORD CLE KJFK");
    }

    #[test]
    fn test_into_record_carries_header_fields() {
        let mut pending = create_test_pending();
        pending.push_body_line("LAX KJFK");

        let record = pending.into_record("LAX KJFK".to_string());
        assert_eq!(record.origin, "LAX ");
        assert_eq!(record.destination, "KJFK");
        assert_eq!(record.suffix, "1");
        assert_eq!(record.distance_text, "2475");
        assert_eq!(record.description, "LAX KJFK");
    }

    #[test]
    fn test_csv_line_format() {
        let record = RouteRecord {
            origin: "LAX ".to_string(),
            destination: "KJFK".to_string(),
            suffix: "1".to_string(),
            distance_text: "2475".to_string(),
            description: "LAX DEN ORD CLE KJFK".to_string(),
        };

        assert_eq!(record.to_csv_line(), "C,LAX ,KJFK,1,2475,LAX DEN ORD CLE KJFK");
    }

    #[test]
    fn test_csv_line_empty_fields_kept() {
        // Empty suffix and description still occupy their comma slots
        let record = RouteRecord {
            origin: "JFK ".to_string(),
            destination: "EGLL".to_string(),
            suffix: String::new(),
            distance_text: "3459".to_string(),
            description: String::new(),
        };

        assert_eq!(record.to_csv_line(), "C,JFK ,EGLL,,3459,");
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = RouteRecord {
            origin: "LAX ".to_string(),
            destination: "KJFK".to_string(),
            suffix: "1".to_string(),
            distance_text: "2475".to_string(),
            description: "LAX DEN ORD CLE KJFK".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: RouteRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
