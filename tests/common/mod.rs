#![allow(dead_code, deprecated)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const BADGE_FILE: &str = "coverage_badge.svg";

/// A temporary working directory for one invocation of the binary.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file (and its parent directories) relative to the fixture root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes an lcov trace with one record per `(hit, found)` pair.
    pub fn create_lcov(&self, relative_path: &str, records: &[(u64, u64)]) {
        let mut content = String::from("TN:\n");
        for (i, (hit, found)) in records.iter().enumerate() {
            content.push_str(&format!(
                "SF:src/file_{i}.rs\nDA:1,1\nLH:{hit}\nLF:{found}\nend_of_record\n"
            ));
        }
        self.create_file(relative_path, &content);
    }

    pub fn create_summary(&self, relative_path: &str, display: &str) {
        self.create_file(
            relative_path,
            &format!(
                r#"{{"meta": {{"format": 2}}, "files": {{}}, "totals": {{"percent_covered_display": "{display}"}}}}"#
            ),
        );
    }

    pub fn badge_path(&self) -> PathBuf {
        self.dir.path().join(BADGE_FILE)
    }

    pub fn read_badge(&self) -> String {
        fs::read_to_string(self.badge_path()).expect("badge should exist")
    }

    /// Command running in the fixture root, isolated from the user's config directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("coverage-badge").expect("binary should exist");
        let home = self.dir.path().join(".home");
        cmd.current_dir(self.dir.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("APPDATA", &home)
            .env("NO_COLOR", "1");
        cmd
    }
}
