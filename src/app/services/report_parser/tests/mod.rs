//! Test utilities and shared fixtures for route report parser testing
//!
//! This module provides report documents used across the different test
//! modules. Fixtures are small enough that every expected output line can
//! be traced by hand.

mod diagnostics_tests;
mod header_tests;
mod normalizer_tests;

/// Helper to create a minimal single-route report
pub fn create_minimal_report() -> String {
    "LAX KJFK 1 Distance: 2475\nLAX DEN ORD CLE KJFK\n".to_string()
}

/// Helper to create a complete report with a banner, two routed markets,
/// and one unbuilt market
pub fn create_test_report() -> String {
    r#"ROUTES FOR AIRLINE: UNITED ALL-CARGO SCHEDULES

LAX KJFK 1 Distance: 2475
LAX DEN ORD
CLE KJFK

SEA KBOS 2 Distance: 2496
SEA MSP DTW KBOS

YYZ KMIA Distance: 1239
Routing has not been built
"#
    .to_string()
}

/// Expected CSV output for [`create_test_report`]
pub fn expected_test_report_csv() -> String {
    "C,LAX ,KJFK,1,2475,LAX DEN ORD CLE KJFK\n\
     C,SEA ,KBOS,2,2496,SEA MSP DTW KBOS\n\
     C,YYZ ,KMIA,,1239,Rou\n"
        .to_string()
}
