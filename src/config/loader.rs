//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PIXELS_CONFIG";

/// Environment variable carrying the API key.
pub const API_KEY_ENV: &str = "PIXELS_API_KEY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; missing ones fall back to defaults.
/// Corresponds to `~/.config/pixels/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Search API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Search endpoint, e.g. `https://pixabay.com/api/`.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Directory downloaded images are written to.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Quiet period after typing before a search fires.
    #[serde(default)]
    pub search_debounce_ms: Option<u64>,

    /// Timeout for search and download requests.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// API key; `None` until one of the sources provides it.
    pub api_key: Option<String>,
    /// Search API endpoint.
    pub base_url: String,
    /// Directory downloads are written to.
    pub download_dir: PathBuf,
    /// Log file path.
    pub log_file_path: PathBuf,
    /// Idle time before typed text is searched.
    pub search_debounce_ms: u64,
    /// HTTP timeout for searches and downloads.
    pub request_timeout_secs: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: default_download_dir(),
            log_file_path: default_log_path(),
            search_debounce_ms: 400,
            request_timeout_secs: 15,
        }
    }
}

impl ResolvedConfig {
    /// `search_debounce_ms` as a duration.
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// `request_timeout_secs` as a duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Resolve default log file path.
///
/// `~/.local/state/pixels/pixels.log` on Linux; falls back to the current
/// directory when no state directory exists (macOS, Windows).
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pixels").join("pixels.log")
    } else {
        PathBuf::from("pixels.log")
    }
}

/// The user's download directory, or the current directory.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/pixels/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pixels").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PIXELS_CONFIG` environment variable
/// 3. Default path `~/.config/pixels/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_key: config.api_key.or(defaults.api_key),
        base_url: config.base_url.unwrap_or(defaults.base_url),
        download_dir: config.download_dir.unwrap_or(defaults.download_dir),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        search_debounce_ms: config
            .search_debounce_ms
            .unwrap_or(defaults.search_debounce_ms),
        request_timeout_secs: config
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
    }
}

/// Apply environment variable overrides.
///
/// - `PIXELS_API_KEY`: API key (ignored when empty)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.is_empty() {
            config.api_key = Some(key);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_key_override: Option<String>,
    download_dir_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(key) = api_key_override {
        config.api_key = Some(key);
    }

    if let Some(dir) = download_dir_override {
        config.download_dir = dir;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
