//! Config command handler.
//!
//! Displays, modifies, and resets learnboard configuration values.

use crate::config::{load_config_at, save_config_at, set_config_value, Config};
use crate::error::{LearnboardError, Result};
use crate::output::{print_config, print_success};
use std::path::Path;

/// Display the configuration stored at `path`.
pub fn config_display_command(path: &Path) -> Result<()> {
    let config = load_config_at(path)?;
    print_config(&config, path);
    Ok(())
}

/// Set `key` to `value` in the configuration at `path`.
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(LearnboardError::Config)` for unknown keys or invalid values
pub fn config_set_command(path: &Path, key: &str, value: &str) -> Result<()> {
    let config = load_config_at(path)?;
    let updated =
        set_config_value(&config, key, value).map_err(|e| LearnboardError::Config(e.to_string()))?;
    save_config_at(path, &updated)?;
    print_success(&format!("Set {} = {}", key, value));
    Ok(())
}

/// Reset the configuration at `path` to defaults.
pub fn config_reset_command(path: &Path) -> Result<()> {
    save_config_at(path, &Config::default())?;
    print_success(&format!("Reset {} to defaults", path.display()));
    Ok(())
}
