//! Configuration data model.
//!
//! `File*` structs mirror the TOML shape with every field optional; the
//! resolved [`Config`] is fully populated and validated.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_CSS_PREFIX, DEFAULT_PRIMARY_THEME, DEFAULT_STORAGE_KEY, DEFAULT_THEME_MODE,
};
use crate::catalog::ThemeName;
use crate::mode::ThemeMode;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub theme: ThemeSettings,
    pub bridge: BridgeSettings,
    pub store: StoreSettings,
}

/// Resolver behavior (`[theme]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    /// Default theme; always a catalog member after resolution.
    pub primary: ThemeName,
    pub default_mode: ThemeMode,
    /// Honor a `system` mode preference by asking the environment.
    pub enable_system_preference: bool,
    /// When false, `set_theme` leaves state untouched.
    pub enable_theme_switching: bool,
    /// When false, theme changes are not written to the store.
    pub persist_preference: bool,
    pub storage_key: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_THEME,
            default_mode: DEFAULT_THEME_MODE,
            enable_system_preference: true,
            enable_theme_switching: true,
            persist_preference: true,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Token bridge output settings (`[bridge]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeSettings {
    pub css_prefix: String,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            css_prefix: DEFAULT_CSS_PREFIX.to_string(),
        }
    }
}

/// Preference store location (`[store]`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSettings {
    /// Explicit preference file; `None` means the per-user default.
    pub path: Option<PathBuf>,
}

/// Non-fatal findings collected while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    pub warnings: Vec<String>,
}

/// Where the config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path.
    Explicit(PathBuf),
    /// `./theme-bridge.toml`.
    Local,
    /// `<config root>/theme-bridge/theme-bridge.toml`.
    Global(PathBuf),
    /// No file found; built-in defaults.
    BuiltInDefaults,
}

/// Configuration payload plus load-time diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub diagnostics: ConfigDiagnostics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub theme: FileThemeSettings,
    pub bridge: FileBridgeSettings,
    pub store: FileStoreSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileThemeSettings {
    pub primary: Option<String>,
    pub default_mode: Option<String>,
    pub enable_system_preference: Option<bool>,
    pub enable_theme_switching: Option<bool>,
    pub persist_preference: Option<bool>,
    pub storage_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileBridgeSettings {
    pub css_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileStoreSettings {
    pub path: Option<String>,
}
