use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn write_badge_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_BADGE_PATH);

    write_badge(&path, "<svg/>").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
}

#[test]
fn write_badge_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_BADGE_PATH);
    fs::write(&path, "old content that is longer than the new one").unwrap();

    write_badge(&path, "<svg/>").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
}

#[test]
fn write_badge_fails_without_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join(DEFAULT_BADGE_PATH);

    assert!(write_badge(&path, "<svg/>").is_err());
}
