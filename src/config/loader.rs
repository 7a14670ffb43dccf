//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Reply count used when a seed entry does not specify one.
pub const DEFAULT_REPLY_COUNT: usize = 8;

/// Row extent assumed for rows that have not been measured yet.
pub const DEFAULT_ESTIMATED_ROW_HEIGHT: u16 = 2;

/// Affordance label on a collapsed comment.
pub const DEFAULT_SHOW_REPLIES_LABEL: &str = "View more replies...";

/// Affordance label on an expanded comment.
pub const DEFAULT_HIDE_REPLIES_LABEL: &str = "Hide replies";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
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
/// Corresponds to `~/.config/threadfold/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Seed file with the initial list. Built-in sample when absent.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Replies materialized for seed comments without an explicit count.
    #[serde(default)]
    pub default_reply_count: Option<usize>,

    /// Extent assumed for rows before they are first measured.
    #[serde(default)]
    pub estimated_row_height: Option<u16>,

    /// Label of the expand affordance.
    #[serde(default)]
    pub show_replies_label: Option<String>,

    /// Label of the collapse affordance.
    #[serde(default)]
    pub hide_replies_label: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Seed file, `None` for the built-in sample.
    pub seed_file: Option<PathBuf>,
    /// Default reply count for seed comments.
    pub default_reply_count: usize,
    /// Estimated row extent in lines.
    pub estimated_row_height: u16,
    /// Expand affordance label.
    pub show_replies_label: String,
    /// Collapse affordance label.
    pub hide_replies_label: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            default_reply_count: DEFAULT_REPLY_COUNT,
            estimated_row_height: DEFAULT_ESTIMATED_ROW_HEIGHT,
            show_replies_label: DEFAULT_SHOW_REPLIES_LABEL.to_string(),
            hide_replies_label: DEFAULT_HIDE_REPLIES_LABEL.to_string(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/threadfold/threadfold.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("threadfold").join("threadfold.log")
    } else {
        PathBuf::from("threadfold.log")
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

    // Missing file is not an error - use defaults
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
/// Returns `~/.config/threadfold/config.toml` on Unix.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("threadfold").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `THREADFOLD_CONFIG` environment variable
/// 3. Default path `~/.config/threadfold/config.toml`
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

    if let Ok(env_path) = std::env::var("THREADFOLD_CONFIG") {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(
                "THREADFOLD_CONFIG is set but empty".to_string(),
            ));
        }
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
        seed_file: config.seed_file.or(defaults.seed_file),
        default_reply_count: config
            .default_reply_count
            .unwrap_or(defaults.default_reply_count),
        estimated_row_height: config
            .estimated_row_height
            .filter(|h| *h > 0)
            .unwrap_or(defaults.estimated_row_height),
        show_replies_label: config
            .show_replies_label
            .unwrap_or(defaults.show_replies_label),
        hide_replies_label: config
            .hide_replies_label
            .unwrap_or(defaults.hide_replies_label),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `THREADFOLD_SEED`: Override the seed file
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(seed) = std::env::var("THREADFOLD_SEED") {
        if !seed.is_empty() {
            config.seed_file = Some(PathBuf::from(seed));
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    seed_override: Option<PathBuf>,
    reply_count_override: Option<usize>,
    row_height_override: Option<u16>,
) -> ResolvedConfig {
    if let Some(seed) = seed_override {
        config.seed_file = Some(seed);
    }

    if let Some(count) = reply_count_override {
        config.default_reply_count = count;
    }

    if let Some(height) = row_height_override.filter(|h| *h > 0) {
        config.estimated_row_height = height;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
