//! Tests for route description normalization

use super::super::normalizer::normalize_route_description;

#[test]
fn test_truncates_after_last_destination() {
    let result = normalize_route_description("LAX DEN KJFK EQUIP 737", Some("KJFK"));
    assert_eq!(result, "LAX DEN KJFK");
}

#[test]
fn test_keeps_last_of_repeated_codes() {
    let result = normalize_route_description("KJFK VIA KJFK LOOP KJFK TAIL", Some("KJFK"));
    assert_eq!(result, "KJFK VIA KJFK LOOP KJFK");
}

#[test]
fn test_code_absent_only_trims_trailing_whitespace() {
    let result = normalize_route_description("LAX DEN ORD   ", Some("KJFK"));
    assert_eq!(result, "LAX DEN ORD");
}

#[test]
fn test_unbuilt_tag_passes_through() {
    let result = normalize_route_description("Rou", Some("KJFK"));
    assert_eq!(result, "Rou");
}

#[test]
fn test_empty_text_passes_through() {
    let result = normalize_route_description("", Some("KJFK"));
    assert_eq!(result, "");
}

#[test]
fn test_missing_destination_leaves_text_untouched() {
    // Even trailing whitespace survives when there is no code to anchor on
    assert_eq!(normalize_route_description("TEXT   ", None), "TEXT   ");
    assert_eq!(normalize_route_description("TEXT   ", Some("")), "TEXT   ");
}

#[test]
fn test_whitespace_between_code_and_tail_is_dropped() {
    let result = normalize_route_description("SEA MSP KBOS    CARGO ONLY", Some("KBOS"));
    assert_eq!(result, "SEA MSP KBOS");
}

#[test]
fn test_normalization_is_idempotent() {
    let cases = [
        ("LAX DEN KJFK EQUIP 737", Some("KJFK")),
        ("LAX DEN ORD   ", Some("KJFK")),
        ("Rou", Some("KJFK")),
        ("TEXT   ", None),
    ];

    for (text, destination) in cases {
        let once = normalize_route_description(text, destination);
        let twice = normalize_route_description(once, destination);
        assert_eq!(once, twice, "not idempotent for {:?}", text);
    }
}

#[test]
fn test_result_is_a_prefix_of_the_input() {
    let text = "LAX DEN KJFK EQUIP 737";
    let result = normalize_route_description(text, Some("KJFK"));
    assert!(text.starts_with(result));
}
