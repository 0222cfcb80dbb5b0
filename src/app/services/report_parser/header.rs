//! Route header extraction
//!
//! A header line carries the route identity on the left of the distance
//! marker and the distance text on the right. This module splits the line,
//! locates the destination code inside the identity text, and produces the
//! origin, destination, suffix, and distance fields for a new route.

use thiserror::Error;

use crate::constants::{DESTINATION_CODE_LEN, DISTANCE_MARKER, ORIGIN_FIELD_WIDTH};

/// Errors raised while extracting fields from a header line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The line does not contain the distance marker at all
    #[error("distance marker not found in header line")]
    MarkerNotFound,

    /// No run of exactly four uppercase letters exists in the route identity
    #[error("no 4-uppercase-letter destination code in '{route_id}'")]
    NoDestinationCode { route_id: String },

    /// The selected code could not be located again inside the identity text
    #[error("no index for destination code '{code}' in '{route_id}'")]
    DestinationIndexNotFound { code: String, route_id: String },
}

/// Fields extracted from one recognized route header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteHeader {
    /// Origin text, truncated and space-padded to the fixed field width
    pub origin: String,

    /// Destination station code (four uppercase ASCII letters)
    pub destination: String,

    /// Identity text remaining after the destination code, trimmed
    pub suffix: String,

    /// Distance text exactly as printed, trimmed but not interpreted
    pub distance_text: String,
}

impl RouteHeader {
    /// Extract header fields from a raw report line
    ///
    /// The line is split at the first occurrence of the distance marker.
    /// The destination is the last maximal run of uppercase ASCII letters
    /// whose length is exactly four; origin and suffix are taken around the
    /// last occurrence of that code text in the identity. Both sides of
    /// every cut are trimmed, and the origin is padded to its fixed width.
    pub fn parse(raw: &str) -> Result<Self, HeaderError> {
        let (id_part, distance_part) = raw
            .split_once(DISTANCE_MARKER)
            .ok_or(HeaderError::MarkerNotFound)?;

        let route_id = id_part.trim();
        let distance_text = distance_part.trim();

        let code =
            last_destination_candidate(route_id).ok_or_else(|| HeaderError::NoDestinationCode {
                route_id: route_id.to_string(),
            })?;

        let dest_index =
            route_id
                .rfind(code)
                .ok_or_else(|| HeaderError::DestinationIndexNotFound {
                    code: code.to_string(),
                    route_id: route_id.to_string(),
                })?;

        let origin_text = route_id[..dest_index].trim();
        let suffix = route_id[dest_index + DESTINATION_CODE_LEN..].trim();

        Ok(Self {
            origin: pad_origin(origin_text),
            destination: code.to_string(),
            suffix: suffix.to_string(),
            distance_text: distance_text.to_string(),
        })
    }
}

/// Find the last maximal run of uppercase ASCII letters of length exactly four
///
/// Runs are maximal: `ABCDE` is one run of five letters and yields no
/// candidate, it is not chopped into overlapping four-letter windows. When
/// several qualifying runs exist the last one wins. Returns a borrowed
/// slice of the input.
pub fn last_destination_candidate(route_id: &str) -> Option<&str> {
    let mut candidate = None;
    let mut run_start = None;

    for (idx, ch) in route_id.char_indices() {
        if ch.is_ascii_uppercase() {
            run_start.get_or_insert(idx);
        } else if let Some(start) = run_start.take() {
            // Run chars are single-byte, so byte length equals letter count
            if idx - start == DESTINATION_CODE_LEN {
                candidate = Some(&route_id[start..idx]);
            }
        }
    }

    if let Some(start) = run_start {
        if route_id.len() - start == DESTINATION_CODE_LEN {
            candidate = Some(&route_id[start..]);
        }
    }

    candidate
}

/// Truncate the origin to the field width and left-justify it with spaces
fn pad_origin(origin: &str) -> String {
    let truncated: String = origin.chars().take(ORIGIN_FIELD_WIDTH).collect();
    format!("{:<width$}", truncated, width = ORIGIN_FIELD_WIDTH)
}
