//! Config-path helpers.

use std::path::PathBuf;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Return the default per-user config path (`~/.config/theme-bridge/theme-bridge.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolve the user config root, honoring `XDG_CONFIG_HOME`.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
