//! Configuration file loading with precedence handling.

use crate::pipeline::DEFAULT_SIZE_LIMIT;
use crate::view::Palette;
use crate::view_state::LayoutConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Pattern the field starts with when nothing else is configured.
pub const DEFAULT_PATTERN: &str = ".";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "RGX_CONFIG";

/// Environment variable overriding the initial pattern.
pub const PATTERN_ENV_VAR: &str = "RGX_PATTERN";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a regular file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
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
/// Corresponds to `~/.config/rgx/config.toml`:
///
/// ```toml
/// initial_pattern = "\\d+"
/// size_limit = 1048576
///
/// [layout]
/// document_margin = 2
///
/// [colors]
/// highlight_fg = 204
/// highlight_bg = 235
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Pattern the regex field starts with.
    #[serde(default)]
    pub initial_pattern: Option<String>,

    /// Compiled regex size limit in bytes.
    #[serde(default)]
    pub size_limit: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Layout tuning.
    #[serde(default)]
    pub layout: Option<LayoutConfig>,

    /// Highlight and border colours.
    #[serde(default)]
    pub colors: Option<Palette>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Pattern the regex field starts with.
    pub initial_pattern: String,
    /// Compiled regex size limit in bytes.
    pub size_limit: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Layout tuning.
    pub layout: LayoutConfig,
    /// Highlight and border colours.
    pub palette: Palette,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            initial_pattern: DEFAULT_PATTERN.to_string(),
            size_limit: DEFAULT_SIZE_LIMIT,
            log_file_path: default_log_path(),
            layout: LayoutConfig::default(),
            palette: Palette::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rgx/rgx.log` on Linux, the platform equivalent
/// elsewhere, or `rgx.log` in the current directory when no state directory
/// exists.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("rgx").join("rgx.log"))
        .unwrap_or_else(|| PathBuf::from("rgx.log"))
}

/// Resolve default config file path.
///
/// Returns `~/.config/rgx/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rgx").join("config.toml"))
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

    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| ConfigError::ParseError {
            path,
            reason: e.to_string(),
        })
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RGX_CONFIG` environment variable
/// 3. Default path `~/.config/rgx/config.toml`
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

    if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        initial_pattern: config.initial_pattern.unwrap_or(defaults.initial_pattern),
        size_limit: config.size_limit.unwrap_or(defaults.size_limit),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        layout: config.layout.unwrap_or(defaults.layout),
        palette: config.colors.unwrap_or(defaults.palette),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RGX_PATTERN`: Override the initial pattern
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(pattern) = std::env::var(PATTERN_ENV_VAR) {
        config.initial_pattern = pattern;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    pattern_override: Option<String>,
) -> ResolvedConfig {
    if let Some(pattern) = pattern_override {
        config.initial_pattern = pattern;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
