use tempfile::TempDir;

use super::*;
use crate::config::Config;

#[test]
fn template_is_valid_config() {
    let config: Config = toml::from_str(generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn template_documents_every_section() {
    let template = generate_config_template();
    assert!(template.contains("[input]"));
    assert!(template.contains("[badge]"));
}

#[test]
fn creates_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(LOCAL_CONFIG_NAME);

    let written = run_init_impl(&path, false).unwrap();

    assert_eq!(written, path);
    assert!(fs::read_to_string(&path).unwrap().contains("[badge]"));
}

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(LOCAL_CONFIG_NAME);
    fs::write(&path, "# mine\n").unwrap();

    let err = run_init_impl(&path, false).unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}

#[test]
fn force_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(LOCAL_CONFIG_NAME);
    fs::write(&path, "# mine\n").unwrap();

    run_init_impl(&path, true).unwrap();

    assert!(fs::read_to_string(&path).unwrap().contains("[input]"));
}
