//! Tests for route header field extraction

use super::super::header::{HeaderError, RouteHeader, last_destination_candidate};

#[test]
fn test_header_parsing_complete() {
    let header = RouteHeader::parse("LAX KJFK 1 Distance: 2475").unwrap();

    assert_eq!(header.origin, "LAX ");
    assert_eq!(header.destination, "KJFK");
    assert_eq!(header.suffix, "1");
    assert_eq!(header.distance_text, "2475");
}

#[test]
fn test_short_origin_is_space_padded() {
    let header = RouteHeader::parse("JFK  EGLL Distance: 3459").unwrap();

    assert_eq!(header.origin, "JFK ");
    assert_eq!(header.destination, "EGLL");
    assert_eq!(header.suffix, "");
    assert_eq!(header.distance_text, "3459");
}

#[test]
fn test_long_origin_is_truncated() {
    let header = RouteHeader::parse("DALLAS KDFW Distance: 100").unwrap();

    assert_eq!(header.origin, "DALL");
    assert_eq!(header.destination, "KDFW");
    assert_eq!(header.suffix, "");
}

#[test]
fn test_empty_origin_becomes_all_spaces() {
    let header = RouteHeader::parse("KJFK Distance: 100").unwrap();

    assert_eq!(header.origin, "    ");
    assert_eq!(header.destination, "KJFK");
    assert_eq!(header.suffix, "");
}

#[test]
fn test_last_qualifying_code_wins() {
    let header = RouteHeader::parse("ABCD EFGH Distance: 12").unwrap();

    assert_eq!(header.destination, "EFGH");
    assert_eq!(header.origin, "ABCD");
    assert_eq!(header.suffix, "");
}

#[test]
fn test_five_letter_run_is_not_a_code() {
    // Runs are maximal: ABCDE is one five-letter run, not ABCD plus E
    let header = RouteHeader::parse("ABCDE KJFK Distance: 9").unwrap();
    assert_eq!(header.destination, "KJFK");

    let err = RouteHeader::parse("ABCDE Distance: 7").unwrap_err();
    assert_eq!(
        err,
        HeaderError::NoDestinationCode {
            route_id: "ABCDE".to_string()
        }
    );
}

#[test]
fn test_three_letter_codes_are_rejected() {
    let err = RouteHeader::parse("JFK  LHR Distance: 3459").unwrap_err();

    assert_eq!(
        err,
        HeaderError::NoDestinationCode {
            route_id: "JFK  LHR".to_string()
        }
    );
}

#[test]
fn test_missing_marker() {
    let err = RouteHeader::parse("LAX KJFK 2475").unwrap_err();
    assert_eq!(err, HeaderError::MarkerNotFound);
}

#[test]
fn test_split_uses_last_occurrence_of_code_text() {
    // The code text reappears inside a longer run after the qualifying
    // run; the split point is the last occurrence of the text itself
    let header = RouteHeader::parse("ABCD XABCDY Distance: 3").unwrap();

    assert_eq!(header.destination, "ABCD");
    assert_eq!(header.origin, "ABCD");
    assert_eq!(header.suffix, "Y");
}

#[test]
fn test_distance_text_is_opaque() {
    let header = RouteHeader::parse("LAX KJFK Distance: N/A MILES").unwrap();
    assert_eq!(header.distance_text, "N/A MILES");

    let header = RouteHeader::parse("LAX KJFK Distance:   1,234  ").unwrap();
    assert_eq!(header.distance_text, "1,234");
}

#[test]
fn test_split_at_first_marker_occurrence() {
    // A second marker occurrence stays inside the distance text
    let header = RouteHeader::parse("LAX KJFK Distance: 100 Distance: 200").unwrap();

    assert_eq!(header.destination, "KJFK");
    assert_eq!(header.distance_text, "100 Distance: 200");
}

#[test]
fn test_digits_break_uppercase_runs() {
    let header = RouteHeader::parse("B737 KJFK Distance: 5").unwrap();

    assert_eq!(header.origin, "B737");
    assert_eq!(header.destination, "KJFK");
}

#[test]
fn test_candidate_scan() {
    assert_eq!(last_destination_candidate("KJFK"), Some("KJFK"));
    assert_eq!(last_destination_candidate("LAX KJFK"), Some("KJFK"));
    assert_eq!(last_destination_candidate("ABCD EFGH"), Some("EFGH"));
    assert_eq!(last_destination_candidate("ABCDE"), None);
    assert_eq!(last_destination_candidate("ABC"), None);
    assert_eq!(last_destination_candidate(""), None);
    assert_eq!(last_destination_candidate("lax kjfk"), None);
    // Run at end of string still qualifies
    assert_eq!(last_destination_candidate("X KBOS"), Some("KBOS"));
    // Lowercase letters split runs
    assert_eq!(last_destination_candidate("aBCDEf"), Some("BCDE"));
    assert_eq!(last_destination_candidate("AbCDE"), None);
}
