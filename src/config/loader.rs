//! Configuration file loading with precedence handling.

use crate::api::DEFAULT_PAGE_SIZE;
use crate::state::pagination::DEFAULT_MAX_VISIBLE;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "IDXVIEW_CONFIG";
/// Environment variable overriding the server URL.
pub const ENV_SERVER_URL: &str = "IDXVIEW_SERVER_URL";

/// Server used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
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
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/idxview/config.toml`:
///
/// ```toml
/// server_url = "http://192.168.1.10:8080"
/// page_size = 50
/// max_visible_pages = 7
/// request_timeout_secs = 10
/// card_width = 40
/// log_file_path = "/tmp/idxview.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the indexer server.
    #[serde(default)]
    pub server_url: Option<String>,

    /// Resources requested per page.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Page numbers shown in the pagination bar.
    #[serde(default)]
    pub max_visible_pages: Option<u32>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Target width of one result card in columns.
    #[serde(default)]
    pub card_width: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL of the indexer server.
    pub server_url: String,
    /// Resources requested per page.
    pub page_size: u32,
    /// Page numbers shown in the pagination bar.
    pub max_visible_pages: u32,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Target width of one result card.
    pub card_width: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl ResolvedConfig {
    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_pages: DEFAULT_MAX_VISIBLE,
            request_timeout_secs: 30,
            card_width: 36,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/idxview/idxview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("idxview").join("idxview.log")
    } else {
        PathBuf::from("idxview.log")
    }
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

/// Resolve default config file path.
///
/// Returns `~/.config/idxview/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("idxview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `IDXVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/idxview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `IDXVIEW_SERVER_URL`: Override server URL (ignored when empty)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(server_url) = std::env::var(ENV_SERVER_URL) {
        if !server_url.trim().is_empty() {
            config.server_url = server_url;
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// default. Zero counts are clamped to 1.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        server_url: config.server_url.unwrap_or(defaults.server_url),
        page_size: config.page_size.unwrap_or(defaults.page_size).max(1),
        max_visible_pages: config
            .max_visible_pages
            .unwrap_or(defaults.max_visible_pages)
            .max(1),
        request_timeout_secs: config
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
        card_width: config.card_width.unwrap_or(defaults.card_width).max(1),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    server_override: Option<String>,
    page_size_override: Option<u32>,
) -> ResolvedConfig {
    if let Some(server_url) = server_override {
        config.server_url = server_url;
    }

    if let Some(page_size) = page_size_override {
        config.page_size = page_size.max(1);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
