mod common;

use build2rise::config::{Config, ConfigError, DEFAULT_MAX_UPLOAD_BYTES};
use common::temp_config;
use std::path::PathBuf;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://127.0.0.1:8080/api/");
    assert!(config.api.connect_timeout_seconds.is_none());
    assert!(config.api.timeout_seconds.is_none());
    assert_eq!(config.uploads.max_upload_bytes, 50 * 1024 * 1024);
    assert_eq!(DEFAULT_MAX_UPLOAD_BYTES, 52_428_800);
    assert!(config.session.path.is_none());
    assert_eq!(config.matches.default_limit, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("build2rise/config.toml"));
    assert!(Config::default_session_path().ends_with("build2rise/session.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.matches.default_limit, 10);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://api.build2rise.example/api/"
timeout_seconds = 30

[session]
path = "/tmp/b2r/session.toml"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.base_url, "https://api.build2rise.example/api/");
    assert_eq!(config.api.timeout_seconds, Some(30));
    assert_eq!(config.uploads.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    assert_eq!(config.session_path(), PathBuf::from("/tmp/b2r/session.toml"));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_non_http_base_url_rejected() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://example.com/\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("http or https"));
}

#[test]
fn test_zero_limits_rejected() {
    let (_dir, path) = temp_config("[uploads]\nmax_upload_bytes = 0\n");
    assert!(Config::load_from(&path).is_err());

    let (_dir, path) = temp_config("[matches]\ndefault_limit = 0\n");
    assert!(Config::load_from(&path).is_err());
}
