mod mock_fs;

use std::path::PathBuf;

use mock_fs::MockFileSystem;

use super::*;
use crate::coverage::CoverageFormat;

#[test]
fn no_config_files_returns_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let config = loader.load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn local_config_is_loaded() {
    let fs = MockFileSystem::new().with_file(
        "/project/.coverage-badge.toml",
        "[badge]\nlabel = \"tests\"\n",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();
    assert_eq!(config.badge.label, "tests");
}

#[test]
fn user_config_is_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/coverage-badge/config.toml",
        "[input]\nformat = \"json\"\npath = \"coverage.json\"\n",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();
    assert_eq!(config.input.format, CoverageFormat::Json);
    assert_eq!(config.input.path, PathBuf::from("coverage.json"));
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.coverage-badge.toml", "[badge]\nlabel = \"local\"\n")
        .with_file(
            "/home/user/.config/coverage-badge/config.toml",
            "[badge]\nlabel = \"user\"\n",
        );
    let loader = FileConfigLoader::with_fs(fs);

    assert_eq!(loader.load().unwrap().badge.label, "local");
}

#[test]
fn missing_user_config_dir_is_ignored() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let loader = FileConfigLoader::with_fs(fs);

    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn explicit_path_must_exist() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/project/custom.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn explicit_path_is_loaded() {
    let fs = MockFileSystem::new().with_file(
        "/project/custom.toml",
        "[badge]\noutput = \"docs/badge.svg\"\n",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader
        .load_from_path(Path::new("/project/custom.toml"))
        .unwrap();
    assert_eq!(config.badge.output, PathBuf::from("docs/badge.svg"));
}

#[test]
fn invalid_toml_is_error() {
    let fs = MockFileSystem::new().with_file("/project/.coverage-badge.toml", "[badge\n");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load().unwrap_err();
    assert!(matches!(err, CoverageBadgeError::TomlParse(_)));
}

#[test]
fn semantic_errors_are_reported() {
    let fs = MockFileSystem::new()
        .with_file("/project/.coverage-badge.toml", "[badge]\nlabel = \"\"\n");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load().unwrap_err();
    assert!(matches!(err, CoverageBadgeError::Config(_)));
}

#[test]
fn current_dir_controls_local_lookup() {
    let fs = MockFileSystem::new()
        .with_current_dir("/elsewhere")
        .with_file("/project/.coverage-badge.toml", "[badge]\nlabel = \"x\"\n");
    let loader = FileConfigLoader::with_fs(fs);

    assert_eq!(loader.load().unwrap().badge.label, "coverage");
}
