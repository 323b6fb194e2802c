use crate::metrics::error::MetricsError;
use crate::metrics::reader::{parse_lines, read_audit_log};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_reads_as_empty() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let read = read_audit_log(&dir.path().join("audit_log.json")).unwrap();

    // Assert
    assert!(read.is_empty());
    assert_eq!(read.skipped, 0);
}

#[test]
fn records_keep_on_disk_order() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("audit_log.json");
    fs::write(&path, "{\"n\":1}\n{\"n\":2}\n{\"n\":3}\n").unwrap();

    // Act
    let read = read_audit_log(&path).unwrap();

    // Assert
    assert_eq!(
        read.records,
        vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})]
    );
}

#[test]
fn blank_and_whitespace_lines_are_ignored() {
    let read = parse_lines(b"\n   \n{\"n\":1}\r\n\t\n\n");

    assert_eq!(read.records, vec![json!({"n": 1})]);
    assert_eq!(read.skipped, 0);
}

#[test]
fn bad_lines_are_skipped_not_fatal() {
    let read = parse_lines(b"not json\n{\"n\":1}\n{\"n\":\n{\"n\":2}");

    assert_eq!(read.records, vec![json!({"n": 1}), json!({"n": 2})]);
    assert_eq!(read.skipped, 2);
}

#[test]
fn final_line_cut_inside_a_multibyte_character_is_skipped() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("audit_log.json");
    let mut raw = b"{\"status\":\"RELEASED\",\"approved_by\":\"jane.doe\"}\n".to_vec();
    raw.extend_from_slice(b"{\"status\":\"REJECTED\",\"rejected_by\":\"J\xC3");
    fs::write(&path, raw).unwrap();

    // Act
    let read = read_audit_log(&path).unwrap();

    // Assert
    assert_eq!(
        read.records,
        vec![json!({"status": "RELEASED", "approved_by": "jane.doe"})]
    );
    assert_eq!(read.skipped, 1);
}

#[test]
fn invalid_utf8_mid_file_only_costs_that_line() {
    let read = parse_lines(b"{\"n\":1}\n{\"who\":\"\xFF\xFE\"}\n{\"n\":2}\n");

    assert_eq!(read.records, vec![json!({"n": 1}), json!({"n": 2})]);
    assert_eq!(read.skipped, 1);
}

#[test]
fn directory_in_place_of_log_is_an_error() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = read_audit_log(dir.path()).unwrap_err();

    // Assert
    match err {
        MetricsError::ReadLog { path, .. } => assert_eq!(path, dir.path()),
        other => panic!("unexpected error: {:?}", other),
    }
}
