//! Default configuration constants.
//!
//! Callers share these constants instead of duplicating literals.

use crate::catalog::ThemeName;
use crate::mode::ThemeMode;

/// Theme used when nothing else selects one.
pub const DEFAULT_PRIMARY_THEME: ThemeName = ThemeName::Enterprise;
/// Mode used when neither the mode source nor the system reports one.
pub const DEFAULT_THEME_MODE: ThemeMode = ThemeMode::Light;
/// Fixed key holding the persisted theme name.
pub const DEFAULT_STORAGE_KEY: &str = "theme-pref";
/// Prefix for generated CSS custom properties (`var(--tb-<token>)`).
pub const DEFAULT_CSS_PREFIX: &str = "tb";
/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "theme-bridge.toml";
/// Directory under the config root owned by this tool.
pub(super) const CONFIG_DIR_NAME: &str = "theme-bridge";
