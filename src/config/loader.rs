//! Configuration file loading with precedence handling.

use crate::view_state::Breakpoints;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
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
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Milliseconds between typewriter characters.
    #[serde(default)]
    pub typewriter_interval_ms: Option<u64>,

    /// Simulated contact submission latency in milliseconds.
    #[serde(default)]
    pub submit_latency_ms: Option<u64>,

    /// How long the "message sent" banner stays up, in milliseconds.
    #[serde(default)]
    pub success_display_ms: Option<u64>,

    /// Widths below this many pixels are Mobile.
    #[serde(default)]
    pub mobile_breakpoint: Option<u32>,

    /// Widths up to this many pixels are Tablet.
    #[serde(default)]
    pub tablet_max: Option<u32>,

    /// Pixels per terminal column.
    #[serde(default)]
    pub cell_width_px: Option<u16>,

    /// Pixels per terminal row.
    #[serde(default)]
    pub cell_height_px: Option<u16>,

    /// Skip entrance animations.
    #[serde(default)]
    pub reduced_motion: Option<bool>,

    /// Portfolio content JSON file.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Milliseconds between typewriter characters.
    pub typewriter_interval_ms: u64,
    /// Simulated submission latency.
    pub submit_latency_ms: u64,
    /// Success banner duration.
    pub success_display_ms: u64,
    /// Mobile breakpoint in pixels.
    pub mobile_breakpoint: u32,
    /// Largest tablet width in pixels.
    pub tablet_max: u32,
    /// Pixels per terminal column.
    pub cell_width_px: u16,
    /// Pixels per terminal row.
    pub cell_height_px: u16,
    /// Skip entrance animations.
    pub reduced_motion: bool,
    /// Portfolio content file; builtin content when `None`.
    pub content_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            typewriter_interval_ms: 100,
            submit_latency_ms: 1_500,
            success_display_ms: 3_000,
            mobile_breakpoint: 768,
            tablet_max: 1024,
            cell_width_px: 8,
            cell_height_px: 16,
            reduced_motion: false,
            content_path: None,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Device class breakpoints.
    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            mobile_below: f64::from(self.mobile_breakpoint),
            tablet_max: f64::from(self.tablet_max),
        }
    }

    /// Typewriter tick interval.
    pub fn typewriter_interval(&self) -> Duration {
        Duration::from_millis(self.typewriter_interval_ms)
    }

    /// Simulated submission latency.
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    /// Success banner duration.
    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/folio/folio.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("folio").join("folio.log")
    } else {
        PathBuf::from("folio.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
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
/// Returns `~/.config/folio/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/folio/config.toml`
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

    if let Ok(env_path) = std::env::var("FOLIO_CONFIG") {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(env_path));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// Cell metrics are at least 1 px and `tablet_max` is raised to
/// `mobile_breakpoint` when the file has them inverted.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let mobile_breakpoint = config.mobile_breakpoint.unwrap_or(defaults.mobile_breakpoint);
    // An inverted pair would leave no width that classifies as Tablet.
    let tablet_max = config
        .tablet_max
        .unwrap_or(defaults.tablet_max)
        .max(mobile_breakpoint);

    ResolvedConfig {
        typewriter_interval_ms: config
            .typewriter_interval_ms
            .unwrap_or(defaults.typewriter_interval_ms),
        submit_latency_ms: config.submit_latency_ms.unwrap_or(defaults.submit_latency_ms),
        success_display_ms: config
            .success_display_ms
            .unwrap_or(defaults.success_display_ms),
        mobile_breakpoint,
        tablet_max,
        cell_width_px: config.cell_width_px.unwrap_or(defaults.cell_width_px).max(1),
        cell_height_px: config.cell_height_px.unwrap_or(defaults.cell_height_px).max(1),
        reduced_motion: config.reduced_motion.unwrap_or(defaults.reduced_motion),
        content_path: config.content_path.or(defaults.content_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FOLIO_REDUCED_MOTION`: `1`/`true`/`yes` enables, `0`/`false`/`no` disables
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var("FOLIO_REDUCED_MOTION") {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => config.reduced_motion = true,
            "0" | "false" | "no" => config.reduced_motion = false,
            _ => {}
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    content_override: Option<PathBuf>,
    reduced_motion_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(content) = content_override {
        config.content_path = Some(content);
    }

    if let Some(reduced_motion) = reduced_motion_override {
        config.reduced_motion = reduced_motion;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
