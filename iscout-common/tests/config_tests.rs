//! Unit tests for configuration and data directory resolution
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate ISCOUT_DATA or ANTHROPIC_API_KEY are marked with
//! #[serial] to ensure they run sequentially, not in parallel.

use iscout_common::config::{ensure_data_dir, resolve_data_dir, Settings, DATABASE_FILE};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};

#[test]
#[serial]
fn cli_argument_takes_priority_over_env() {
    env::set_var("ISCOUT_DATA", "/tmp/iscout-test-env");

    let resolved = resolve_data_dir(Some(Path::new("/tmp/iscout-test-cli")));
    assert_eq!(resolved, PathBuf::from("/tmp/iscout-test-cli"));

    env::remove_var("ISCOUT_DATA");
}

#[test]
#[serial]
fn env_var_used_when_no_cli_argument() {
    env::set_var("ISCOUT_DATA", "/tmp/iscout-test-env");

    let resolved = resolve_data_dir(None);
    assert_eq!(resolved, PathBuf::from("/tmp/iscout-test-env"));

    env::remove_var("ISCOUT_DATA");
}

#[test]
#[serial]
fn default_used_when_nothing_configured() {
    env::remove_var("ISCOUT_DATA");

    let resolved = resolve_data_dir(None);
    assert!(!resolved.as_os_str().is_empty());
    assert!(resolved.to_string_lossy().contains("iscout"));
}

#[test]
#[serial]
fn empty_env_var_is_ignored() {
    env::set_var("ISCOUT_DATA", "");

    let resolved = resolve_data_dir(None);
    assert!(!resolved.as_os_str().is_empty());
    assert_ne!(resolved, PathBuf::from(""));

    env::remove_var("ISCOUT_DATA");
}

#[test]
fn ensure_data_dir_creates_directory_and_returns_db_path() {
    let temp = tempfile::tempdir().expect("temp dir");
    let data_dir = temp.path().join("nested").join("iscout");

    let db_path = ensure_data_dir(&data_dir).expect("should create data dir");

    assert!(data_dir.is_dir());
    assert_eq!(db_path, data_dir.join(DATABASE_FILE));
}

#[test]
#[serial]
fn settings_require_api_key() {
    env::remove_var("ANTHROPIC_API_KEY");
    assert!(Settings::from_env(8001).is_err());

    env::set_var("ANTHROPIC_API_KEY", "   ");
    assert!(Settings::from_env(8001).is_err(), "blank key must be rejected");

    env::set_var("ANTHROPIC_API_KEY", "sk-test-key");
    let settings = Settings::from_env(9000).expect("should load settings");
    assert_eq!(settings.api_key, "sk-test-key");
    assert_eq!(settings.port, 9000);

    env::remove_var("ANTHROPIC_API_KEY");
}
