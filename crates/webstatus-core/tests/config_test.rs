//! Tests for the webstatus configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use webstatus_core::config::{CliOverrides, WebstatusConfig};
use webstatus_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_webstatus_env_vars() {
    for key in [
        "WEBSTATUS_CANIUSE",
        "WEBSTATUS_CHROMESTATUS",
        "WEBSTATUS_EDGESTATUS",
        "WEBSTATUS_WEBKITSTATUS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_webstatus_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("webstatus.toml"),
        r#"
[datasets]
caniuse = "file/caniuse.json"
chromestatus = "file/chrome.json"
edgestatus = "file/edge.json"
"#,
    )
    .unwrap();

    std::env::set_var("WEBSTATUS_CHROMESTATUS", "env/chrome.json");
    std::env::set_var("WEBSTATUS_EDGESTATUS", "env/edge.json");

    let cli = CliOverrides {
        edgestatus: Some(PathBuf::from("cli/edge.json")),
        ..Default::default()
    };
    let config = WebstatusConfig::load(dir.path(), None, Some(&cli)).unwrap();

    assert_eq!(config.datasets.caniuse, Some(PathBuf::from("file/caniuse.json")));
    assert_eq!(config.datasets.chromestatus, Some(PathBuf::from("env/chrome.json")));
    assert_eq!(config.datasets.edgestatus, Some(PathBuf::from("cli/edge.json")));
    assert_eq!(config.datasets.webkitstatus, None);

    clear_webstatus_env_vars();
}

#[test]
fn missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_webstatus_env_vars();

    let dir = tempdir();
    let config = WebstatusConfig::load(dir.path(), None, None).unwrap();
    assert_eq!(config, WebstatusConfig::default());

    let core = config.authority.effective_core();
    assert_eq!(core["chromestatus"], vec!["chrome".to_string()]);
    assert_eq!(core["webkitstatus"], vec!["webkit".to_string(), "safari".to_string()]);
    assert_eq!(config.authority.effective_override_sources(), vec!["feedback".to_string()]);
}

#[test]
fn explicit_config_file_must_exist() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_webstatus_env_vars();

    let dir = tempdir();
    let missing = dir.path().join("nope.toml");
    let err = WebstatusConfig::load(dir.path(), Some(&missing), None).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_webstatus_env_vars();

    let dir = tempdir();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[datasets\ncaniuse = ").unwrap();
    let err = WebstatusConfig::load(dir.path(), Some(&path), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn authority_overrides_replace_defaults() {
    let config = WebstatusConfig::from_toml(
        r#"
[authority]
override_sources = []

[authority.core]
chromestatus = ["chrome", "chrome_android"]
"#,
    )
    .unwrap();
    WebstatusConfig::validate(&config).unwrap();

    let core = config.authority.effective_core();
    assert_eq!(core.len(), 1);
    assert_eq!(core["chromestatus"].len(), 2);
    assert!(config.authority.effective_override_sources().is_empty());
}

#[test]
fn validation_rejects_unknown_sources_and_agents() {
    let config = WebstatusConfig::from_toml(
        r#"
[authority.core]
mdn = ["chrome"]
"#,
    )
    .unwrap();
    let err = WebstatusConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "authority.core.mdn"));

    let config = WebstatusConfig::from_toml(
        r#"
[authority.core]
edgestatus = ["netscape"]
"#,
    )
    .unwrap();
    assert!(WebstatusConfig::validate(&config).is_err());

    let config = WebstatusConfig::from_toml(
        r#"
[authority.core]
edgestatus = []
"#,
    )
    .unwrap();
    assert!(WebstatusConfig::validate(&config).is_err());

    let config = WebstatusConfig::from_toml(
        r#"
[authority]
override_sources = ["reviewers"]
"#,
    )
    .unwrap();
    assert!(WebstatusConfig::validate(&config).is_err());
}
