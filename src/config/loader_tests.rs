//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

// ===== Paths =====

#[test]
fn default_config_path_contains_pixels_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("pixels") && path_str.ends_with("config.toml"),
        "Path should contain 'pixels' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_pixels_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("pixels.log"),
        "Default log path should end with 'pixels.log', got: {:?}",
        path
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.toml",
        r#"
api_key = "abc123"
base_url = "http://localhost:8080/api/"
download_dir = "/tmp/pictures"
search_debounce_ms = 250
request_timeout_secs = 5
"#,
    );

    let config = load_config_file(&path).unwrap().unwrap();

    assert_eq!(config.api_key.as_deref(), Some("abc123"));
    assert_eq!(
        config.base_url.as_deref(),
        Some("http://localhost:8080/api/")
    );
    assert_eq!(config.download_dir, Some(PathBuf::from("/tmp/pictures")));
    assert_eq!(config.search_debounce_ms, Some(250));
    assert_eq!(config.request_timeout_secs, Some(5));
    assert_eq!(config.log_file_path, None);
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.toml", "this is not valid TOML ][}{");

    match load_config_file(&path) {
        Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn load_config_file_rejects_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "unknown.toml", "theme = \"dark\"\n");

    let result = load_config_file(&path);

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown fields should be rejected, got {:?}",
        result
    );
}

#[test]
fn load_config_file_reports_unreadable_path() {
    let dir = TempDir::new().unwrap();
    // a directory exists but cannot be read as a file
    let result = load_config_file(dir.path());
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        api_key: Some("key".to_string()),
        base_url: Some("http://example.test/".to_string()),
        download_dir: Some(PathBuf::from("/dl")),
        log_file_path: Some(PathBuf::from("/custom/app.log")),
        search_debounce_ms: Some(100),
        request_timeout_secs: Some(3),
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.api_key.as_deref(), Some("key"));
    assert_eq!(resolved.base_url, "http://example.test/");
    assert_eq!(resolved.download_dir, PathBuf::from("/dl"));
    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/app.log"));
    assert_eq!(resolved.search_debounce(), Duration::from_millis(100));
    assert_eq!(resolved.request_timeout(), Duration::from_secs(3));
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        search_debounce_ms: Some(50),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.search_debounce_ms, 50);
    assert_eq!(resolved.api_key, None);
    assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
    assert_eq!(resolved.request_timeout_secs, defaults.request_timeout_secs);
}

#[test]
fn default_debounce_is_400ms() {
    assert_eq!(
        ResolvedConfig::default().search_debounce(),
        Duration::from_millis(400)
    );
}

// ===== Environment =====

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(pixels_api_key)]
fn apply_env_overrides_sets_api_key() {
    let _guard = EnvGuard::new(API_KEY_ENV);
    env::set_var(API_KEY_ENV, "from-env");

    let base = ResolvedConfig {
        api_key: Some("from-file".to_string()),
        ..ResolvedConfig::default()
    };
    let result = apply_env_overrides(base.clone());

    assert_eq!(result.api_key.as_deref(), Some("from-env"));
    assert_eq!(result.base_url, base.base_url);
}

#[test]
#[serial(pixels_api_key)]
fn apply_env_overrides_ignores_empty_key() {
    let _guard = EnvGuard::new(API_KEY_ENV);
    env::set_var(API_KEY_ENV, "");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(pixels_api_key)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(API_KEY_ENV);

    let base = ResolvedConfig::default();
    assert_eq!(
        apply_env_overrides(base.clone()),
        base,
        "Config should be unchanged when PIXELS_API_KEY not set"
    );
}

#[test]
#[serial(pixels_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    let dir = TempDir::new().unwrap();
    let explicit = write_config(&dir, "explicit.toml", "api_key = \"explicit\"\n");
    let from_env = write_config(&dir, "env.toml", "api_key = \"env\"\n");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(Some(explicit)).unwrap().unwrap();

    assert_eq!(config.api_key.as_deref(), Some("explicit"));
}

#[test]
#[serial(pixels_config)]
fn load_config_with_precedence_uses_env_path() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    let dir = TempDir::new().unwrap();
    let from_env = write_config(&dir, "env.toml", "api_key = \"env\"\n");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(None).unwrap().unwrap();

    assert_eq!(config.api_key.as_deref(), Some("env"));
}

#[test]
#[serial(pixels_config)]
fn load_config_with_precedence_missing_env_file_is_none() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    env::set_var(CONFIG_ENV, "/nonexistent/pixels.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

// ===== CLI =====

#[test]
fn apply_cli_overrides_wins_over_everything() {
    let base = ResolvedConfig {
        api_key: Some("from-env".to_string()),
        ..ResolvedConfig::default()
    };

    let result = apply_cli_overrides(
        base,
        Some("from-cli".to_string()),
        Some(PathBuf::from("/cli/dl")),
    );

    assert_eq!(result.api_key.as_deref(), Some("from-cli"));
    assert_eq!(result.download_dir, PathBuf::from("/cli/dl"));
}

#[test]
fn apply_cli_overrides_keeps_values_when_flags_absent() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}
