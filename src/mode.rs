//! Light/dark mode vocabulary and the external mode source contract.
//!
//! Mode is never stored by the resolver. The mode source owns the user's
//! preference (`light`, `dark` or `system`); the resolver derives the concrete
//! [`ThemeMode`] from it on every read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::store::KeyValueStore;

/// Concrete rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(CatalogError::UnknownMode(s.to_string())),
        }
    }
}

/// Mode preference as reported by the external mode source.
///
/// `System` is an input only: it is resolved against the environment and
/// never becomes a stored [`ThemeMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModePreference {
    Light,
    Dark,
    System,
}

impl ModePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl From<ThemeMode> for ModePreference {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::Light,
            ThemeMode::Dark => Self::Dark,
        }
    }
}

impl fmt::Display for ModePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModePreference {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(CatalogError::UnknownMode(s.to_string())),
        }
    }
}

/// External, authoritative owner of the mode preference.
pub trait ModeSource {
    /// Current preference, or `None` when nothing has been chosen yet.
    fn preference(&self) -> Option<ModePreference>;
    /// Mode reported by the OS/environment, when determinable.
    fn system_mode(&self) -> Option<ThemeMode>;
    /// Ask the source to adopt a new preference.
    fn set_preference(&mut self, preference: ModePreference);
}

/// In-memory mode source with a fixed system mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticModeSource {
    preference: Option<ModePreference>,
    system: Option<ThemeMode>,
}

impl StaticModeSource {
    pub fn new(preference: Option<ModePreference>, system: Option<ThemeMode>) -> Self {
        Self { preference, system }
    }

    /// Source that follows the system and reports `system` as its mode.
    pub fn following_system(system: ThemeMode) -> Self {
        Self::new(Some(ModePreference::System), Some(system))
    }
}

impl ModeSource for StaticModeSource {
    fn preference(&self) -> Option<ModePreference> {
        self.preference
    }

    fn system_mode(&self) -> Option<ThemeMode> {
        self.system
    }

    fn set_preference(&mut self, preference: ModePreference) {
        self.preference = Some(preference);
    }
}

/// Default key holding the mode preference in a [`KeyValueStore`].
pub const DEFAULT_MODE_STORAGE_KEY: &str = "theme-mode";

/// Mode source that keeps its preference in a key-value store and detects
/// the system mode from the process environment.
#[derive(Debug)]
pub struct StoredModeSource<S> {
    store: S,
    key: String,
    system: Option<ThemeMode>,
}

impl<S: KeyValueStore> StoredModeSource<S> {
    pub fn new(store: S, key: impl Into<String>, system: Option<ThemeMode>) -> Self {
        Self {
            store,
            key: key.into(),
            system,
        }
    }

    /// Build a source whose system mode comes from [`detect_system_mode`].
    pub fn from_env(store: S) -> Self {
        Self::new(store, DEFAULT_MODE_STORAGE_KEY, detect_system_mode())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> ModeSource for StoredModeSource<S> {
    fn preference(&self) -> Option<ModePreference> {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(preference) => Some(preference),
                Err(err) => {
                    tracing::warn!(key = %self.key, value = %raw, "ignoring stored mode preference: {err}");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key = %self.key, "failed to read mode preference: {err}");
                None
            }
        }
    }

    fn system_mode(&self) -> Option<ThemeMode> {
        self.system
    }

    fn set_preference(&mut self, preference: ModePreference) {
        if let Err(err) = self.store.set(&self.key, preference.as_str()) {
            tracing::warn!(key = %self.key, "failed to persist mode preference: {err}");
        }
    }
}

/// Detect the environment's preferred mode from process env vars.
pub fn detect_system_mode() -> Option<ThemeMode> {
    detect_system_mode_with(|name| std::env::var(name).ok())
}

/// Detection order: `THEME_BRIDGE_SYSTEM_MODE`, a `GTK_THEME` ending in
/// `:dark`, then the background index of `COLORFGBG`.
pub fn detect_system_mode_with<FEnv>(env_lookup: FEnv) -> Option<ThemeMode>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = env_lookup("THEME_BRIDGE_SYSTEM_MODE") {
        if let Ok(mode) = explicit.parse::<ThemeMode>() {
            return Some(mode);
        }
    }
    if let Some(gtk) = env_lookup("GTK_THEME") {
        let gtk = gtk.to_ascii_lowercase();
        if gtk.ends_with(":dark") || gtk.ends_with("-dark") {
            return Some(ThemeMode::Dark);
        }
    }
    // COLORFGBG is "fg;bg" (sometimes "fg;default;bg"); ANSI 0-6 and 8 are dark backgrounds.
    let colorfgbg = env_lookup("COLORFGBG")?;
    let bg = colorfgbg.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(match bg {
        0..=6 | 8 => ThemeMode::Dark,
        _ => ThemeMode::Light,
    })
}
