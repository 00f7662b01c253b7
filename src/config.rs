use crate::error::{LearnboardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "learnboard";

/// The filename for the configuration file.
const CONFIG_FILENAME: &str = "config.toml";

const MIN_BAR_WIDTH: u16 = 1;
const MAX_BAR_WIDTH: u16 = 120;

/// Accepted values for `log_level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// ============================================================================
// Configuration
// ============================================================================

/// User preferences for the dashboard.
///
/// Missing fields in a config file fall back to their defaults, so partial
/// files load fine.
///
/// # Example
///
/// ```toml
/// progress_bar_width = 30
/// log_level = "warn"
/// data_dir = "/home/me/learnboard-data"
/// content_dir = "/home/me/learnboard-data/content"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Width, in cells, of the progress bars drawn by `progress`.
    #[serde(default = "default_bar_width")]
    pub progress_bar_width: u16,

    /// Default tracing filter when neither `RUST_LOG` nor `--verbose` is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory searched for snapshot files given by bare file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding `<task_id>.md` write-ups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,
}

fn default_bar_width() -> u16 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            progress_bar_width: default_bar_width(),
            log_level: default_log_level(),
            data_dir: None,
            content_dir: None,
        }
    }
}

impl Config {
    /// Resolve a snapshot argument: existing paths are used as-is, relative
    /// paths that don't exist are looked up under `data_dir`.
    pub fn resolve_input(&self, file: &Path) -> PathBuf {
        if file.exists() || file.is_absolute() {
            return file.to_path_buf();
        }
        match &self.data_dir {
            Some(dir) => dir.join(file),
            None => file.to_path_buf(),
        }
    }

    /// Content directory, defaulting to `<data_dir>/content`.
    pub fn content_dir(&self) -> Option<PathBuf> {
        self.content_dir
            .clone()
            .or_else(|| self.data_dir.as_ref().map(|d| d.join("content")))
    }
}

// ============================================================================
// Config Validation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("progress_bar_width must be between 1 and 120, got {0}")]
    BarWidthOutOfRange(u16),

    #[error("log_level must be one of error, warn, info, debug, trace; got '{0}'")]
    UnknownLogLevel(String),

    #[error("Unknown config key '{0}'. Valid keys: progress_bar_width, log_level, data_dir, content_dir")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Check a configuration for out-of-range values.
///
/// ```
/// use learnboard::config::{Config, validate_config};
///
/// assert!(validate_config(&Config::default()).is_ok());
///
/// let too_wide = Config {
///     progress_bar_width: 500,
///     ..Default::default()
/// };
/// assert!(validate_config(&too_wide).is_err());
/// ```
pub fn validate_config(config: &Config) -> std::result::Result<(), ConfigError> {
    if !(MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(&config.progress_bar_width) {
        return Err(ConfigError::BarWidthOutOfRange(config.progress_bar_width));
    }
    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        return Err(ConfigError::UnknownLogLevel(config.log_level.clone()));
    }
    Ok(())
}

/// Apply `key = value` to a copy of `config`, validating the result.
pub fn set_config_value(
    config: &Config,
    key: &str,
    value: &str,
) -> std::result::Result<Config, ConfigError> {
    let mut updated = config.clone();
    match key {
        "progress_bar_width" => {
            updated.progress_bar_width =
                value.parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                        reason: e.to_string(),
                    }
                })?;
        }
        "log_level" => updated.log_level = value.to_lowercase(),
        "data_dir" => updated.data_dir = optional_path(value),
        "content_dir" => updated.content_dir = optional_path(value),
        _ => return Err(ConfigError::UnknownKey(key.to_string())),
    }
    validate_config(&updated)?;
    Ok(updated)
}

// An empty value unsets the path.
fn optional_path(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

// ============================================================================
// Config File Management
// ============================================================================

/// Get the learnboard config directory path (~/.config/learnboard/).
///
/// Does not create the directory.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| LearnboardError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Path to `~/.config/learnboard/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load the configuration, creating a commented default file on first use.
pub fn load_config() -> Result<Config> {
    load_config_at(&config_path()?)
}

/// Load and validate the configuration used by commands.
pub fn get_effective_config() -> Result<Config> {
    let config = load_config()?;
    validate_config(&config).map_err(|e| LearnboardError::Config(e.to_string()))?;
    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    save_config_at(&config_path()?, config)
}

/// Load the config file at `path`, writing defaults if it does not exist.
pub fn load_config_at(path: &Path) -> Result<Config> {
    if !path.exists() {
        save_config_at(path, &Config::default())?;
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        LearnboardError::Config(format!(
            "Failed to parse config file at {:?}: {}",
            path, e
        ))
    })
}

/// Write `config` to `path` with explanatory comments. Overwrites any
/// user-added comments.
pub fn save_config_at(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_with_comments(config))?;
    Ok(())
}

fn generate_config_with_comments(config: &Config) -> String {
    let path_line = |key: &str, value: &Option<PathBuf>, hint: &str| match value {
        Some(p) => format!("{} = {}", key, toml_string(&p.display().to_string())),
        None => format!("# {} = \"{}\"", key, hint),
    };

    format!(
        r#"# Learnboard Configuration

# Width of progress bars in cells (1-120)
progress_bar_width = {}

# Default log filter: error, warn, info, debug or trace
# RUST_LOG and --verbose take precedence
log_level = {}

# Directory searched for snapshot files passed by bare file name
{}

# Directory holding <task_id>.md write-ups (defaults to <data_dir>/content)
{}
"#,
        config.progress_bar_width,
        toml_string(&config.log_level),
        path_line("data_dir", &config.data_dir, "/path/to/snapshots"),
        path_line("content_dir", &config.content_dir, "/path/to/content"),
    )
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
