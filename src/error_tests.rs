use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = CoverageBadgeError::Config("label cannot be empty".to_string());
    assert_eq!(err.to_string(), "Configuration error: label cannot be empty");
}

#[test]
fn error_display_file_read() {
    let err = CoverageBadgeError::FileRead {
        path: PathBuf::from("lcov.info"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("lcov.info"));
}

#[test]
fn error_display_input_not_found() {
    let err = CoverageBadgeError::InputNotFound(PathBuf::from("coverage/lcov.info"));
    assert_eq!(
        err.to_string(),
        "Coverage file not found: coverage/lcov.info"
    );
}

#[test]
fn error_display_out_of_range() {
    let err = CoverageBadgeError::OutOfRange(150.0);
    assert_eq!(err.to_string(), "Coverage percentage out of range: 150");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        CoverageBadgeError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        CoverageBadgeError::InputNotFound(PathBuf::from("x")).error_type(),
        "InputNotFound"
    );
    assert_eq!(
        CoverageBadgeError::InvalidSummary("missing totals".to_string()).error_type(),
        "Summary"
    );
    assert_eq!(CoverageBadgeError::OutOfRange(101.0).error_type(), "Coverage");
}

#[test]
fn suggestion_only_for_actionable_errors() {
    assert!(
        CoverageBadgeError::InputNotFound(PathBuf::from("x"))
            .suggestion()
            .is_some()
    );
    assert!(
        CoverageBadgeError::Config("x".to_string())
            .suggestion()
            .is_none()
    );
}

#[test]
fn detail_shows_read_cause() {
    let err = CoverageBadgeError::FileRead {
        path: PathBuf::from("lcov.info"),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8"),
    };
    assert_eq!(err.detail().as_deref(), Some("not utf-8"));
    assert!(CoverageBadgeError::OutOfRange(120.0).detail().is_none());
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::other("boom");
    let err: CoverageBadgeError = io.into();
    assert!(matches!(err, CoverageBadgeError::Io(_)));
}
