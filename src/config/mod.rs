//! Configuration loading with precedence handling.
//!
//! Shell-level settings only: the breakpoint table is part of the
//! engine's contract and deliberately not configurable here.
//!
//! Precedence (highest to lowest): CLI args → env vars → config file →
//! defaults.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an existing config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
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
/// All fields are optional — anything unset falls back to hardcoded
/// defaults. Corresponds to `~/.config/postwall/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Fallback viewport width in pixels when none is measured or given.
    #[serde(default)]
    pub default_width: Option<u16>,

    /// Whether the current user is authenticated, as reported by the
    /// external authentication collaborator.
    #[serde(default)]
    pub authenticated: Option<bool>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Fallback viewport width in pixels.
    pub default_width: u16,
    /// Authenticated capability flag.
    pub authenticated: bool,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            default_width: 1280,
            authenticated: false,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/postwall/postwall.log` on Unix-like systems, the
/// platform equivalent elsewhere, falling back to the current directory
/// when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("postwall").join("postwall.log")
    } else {
        PathBuf::from("postwall.log")
    }
}

/// Resolve the default config file path
/// (`~/.config/postwall/config.toml`), or `None` if the config
/// directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("postwall").join("config.toml"))
}

/// Load a config file from a specific path.
///
/// A missing file is not an error — `Ok(None)` means "use defaults".
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read or
/// parsed.
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

/// Load configuration with precedence handling.
///
/// Path precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `POSTWALL_CONFIG` environment variable
/// 3. Default path `~/.config/postwall/config.toml`
///
/// # Errors
///
/// Returns an error only if a config file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("POSTWALL_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a loaded config file into the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        default_width: config.default_width.unwrap_or(defaults.default_width),
        authenticated: config.authenticated.unwrap_or(defaults.authenticated),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to a resolved config.
///
/// `POSTWALL_WIDTH` overrides the fallback viewport width when it
/// parses as a pixel count; anything unparsable is ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(width) = std::env::var("POSTWALL_WIDTH") {
        if let Ok(pixels) = width.parse::<u16>() {
            config.default_width = pixels;
        }
    }
    config
}

/// Apply CLI argument overrides, the highest-precedence source.
///
/// Only overrides for flags the user actually set are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    width_override: Option<u16>,
    authenticated_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(width) = width_override {
        config.default_width = width;
    }
    if let Some(authenticated) = authenticated_override {
        config.authenticated = authenticated;
    }
    config
}
