//! Route description normalization
//!
//! The description assembled from a route's body lines frequently carries
//! trailing annotations after the final station (equipment notes, page
//! footers swallowed into the block). Normalization truncates the text just
//! after the last occurrence of the destination code so the description
//! ends where the route ends.

use crate::constants::UNBUILT_ROUTING_TAG;

/// Normalize an assembled route description against its destination code
///
/// Truncates at the end of the last occurrence of the destination code and
/// strips trailing whitespace. Text without the code is only right-trimmed.
/// The unbuilt-routing tag, the empty string, and a missing or empty
/// destination pass through untouched. The result is always a prefix of
/// the input, so normalizing twice returns the same text.
pub fn normalize_route_description<'a>(text: &'a str, destination: Option<&str>) -> &'a str {
    if text == UNBUILT_ROUTING_TAG || text.is_empty() {
        return text;
    }

    let Some(code) = destination.filter(|code| !code.is_empty()) else {
        return text;
    };

    match text.rfind(code) {
        Some(idx) => text[..idx + code.len()].trim_end(),
        None => text.trim_end(),
    }
}
