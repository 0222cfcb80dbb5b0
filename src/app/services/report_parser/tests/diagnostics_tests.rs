//! Tests for diagnostic log accumulation and rendering

use super::super::diagnostics::DiagnosticLog;

#[test]
fn test_entries_keep_insertion_order() {
    let mut log = DiagnosticLog::new();
    log.warning("Warning line 3: first".to_string());
    log.warning("Warning line 7: second".to_string());

    assert_eq!(log.entries().len(), 2);
    assert_eq!(log.entries()[0], "Warning line 3: first");
    assert_eq!(log.entries()[1], "Warning line 7: second");
    assert_eq!(log.warning_count(), 2);
    assert_eq!(log.error_count(), 0);
}

#[test]
fn test_render_raw_terminates_every_entry() {
    let mut log = DiagnosticLog::new();
    log.warning("one".to_string());
    log.warning("two".to_string());

    assert_eq!(log.render_raw(), "one\ntwo\n");
    assert_eq!(DiagnosticLog::new().render_raw(), "");
}

#[test]
fn test_clean_summary_with_records() {
    let log = DiagnosticLog::new();

    assert_eq!(
        log.render_with_summary(5),
        "Processing completed. 5 routes extracted.\n"
    );
}

#[test]
fn test_clean_summary_without_records_adds_no_data_warning() {
    let log = DiagnosticLog::new();

    assert_eq!(
        log.render_with_summary(0),
        "Processing completed. 0 routes extracted.\nWarning: No route data was extracted.\n"
    );
}

#[test]
fn test_error_entry_switches_summary_wording() {
    let mut log = DiagnosticLog::new();
    log.error("Error parsing distance line 4: garbage\nError: bad split".to_string());

    assert!(log.has_error_marker());
    assert_eq!(
        log.render_with_summary(2),
        "Error parsing distance line 4: garbage\nError: bad split\n\
         Processing finished with warnings/errors. 2 routes extracted.\n"
    );
}

#[test]
fn test_error_marker_is_textual_and_case_sensitive() {
    let mut log = DiagnosticLog::new();
    log.warning("Warning line 2: internal error while splitting".to_string());
    assert!(!log.has_error_marker());

    // Any entry containing the marker text counts, whatever its severity
    log.warning("Warning line 9: upstream said 'Error 419'".to_string());
    assert!(log.has_error_marker());
}

#[test]
fn test_warnings_do_not_switch_summary() {
    let mut log = DiagnosticLog::new();
    log.warning("Warning line 5: something mild".to_string());

    assert_eq!(
        log.render_with_summary(1),
        "Warning line 5: something mild\nProcessing completed. 1 routes extracted.\n"
    );
}
