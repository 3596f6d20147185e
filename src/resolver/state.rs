//! Resolver state, options and the values handed to consumers.

use serde::Serialize;

use crate::catalog::{ThemeConfig, ThemeName};
use crate::config::{ThemeSettings, DEFAULT_PRIMARY_THEME, DEFAULT_STORAGE_KEY, DEFAULT_THEME_MODE};
use crate::mode::ThemeMode;

/// Coarse lifecycle phase derived from [`ThemeResolutionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverPhase {
    Loading,
    Ready,
    Error,
}

impl ResolverPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Error => "error",
        }
    }
}

/// Mutable state owned by the resolver.
///
/// Mode is deliberately absent: it is re-derived from the mode source on
/// every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeResolutionState {
    pub current_theme: ThemeName,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ThemeResolutionState {
    pub(super) fn loading(default_theme: ThemeName) -> Self {
        Self {
            current_theme: default_theme,
            is_loading: true,
            error: None,
        }
    }

    pub fn phase(&self) -> ResolverPhase {
        if self.is_loading {
            ResolverPhase::Loading
        } else if self.error.is_some() {
            ResolverPhase::Error
        } else {
            ResolverPhase::Ready
        }
    }
}

/// Construction-time resolver behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    pub default_theme: ThemeName,
    pub default_mode: ThemeMode,
    pub enable_system_preference: bool,
    pub enable_theme_switching: bool,
    pub persist_preference: bool,
    pub storage_key: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            default_theme: DEFAULT_PRIMARY_THEME,
            default_mode: DEFAULT_THEME_MODE,
            enable_system_preference: true,
            enable_theme_switching: true,
            persist_preference: true,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl From<&ThemeSettings> for ResolverOptions {
    fn from(settings: &ThemeSettings) -> Self {
        Self {
            default_theme: settings.primary,
            default_mode: settings.default_mode,
            enable_system_preference: settings.enable_system_preference,
            enable_theme_switching: settings.enable_theme_switching,
            persist_preference: settings.persist_preference,
            storage_key: settings.storage_key.clone(),
        }
    }
}

/// What the external rendering library receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTarget {
    pub template_id: String,
    pub dark_mode: bool,
}

/// Read-only view of the public resolver API at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSnapshot {
    pub current_theme: ThemeName,
    pub current_mode: ThemeMode,
    pub theme_config: ThemeConfig,
    pub render_target: RenderTarget,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Template identifier understood by the rendering library: `"{name}-{mode}"`.
pub fn derive_template_id(name: ThemeName, mode: ThemeMode) -> String {
    format!("{}-{}", name.id(), mode.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_id_joins_name_and_mode() {
        assert_eq!(
            derive_template_id(ThemeName::Enterprise, ThemeMode::Dark),
            "enterprise-dark"
        );
        assert_eq!(
            derive_template_id(ThemeName::Ecommerce, ThemeMode::Light),
            "ecommerce-light"
        );
    }

    #[test]
    fn template_ids_are_unique_across_the_catalog() {
        let mut ids = Vec::new();
        for &name in ThemeName::all() {
            for mode in [ThemeMode::Light, ThemeMode::Dark] {
                ids.push(derive_template_id(name, mode));
            }
        }
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn phase_prefers_loading_over_error() {
        let mut state = ThemeResolutionState::loading(ThemeName::Base);
        state.error = Some("boom".into());
        assert_eq!(state.phase(), ResolverPhase::Loading);
        state.is_loading = false;
        assert_eq!(state.phase(), ResolverPhase::Error);
        state.error = None;
        assert_eq!(state.phase(), ResolverPhase::Ready);
    }

    #[test]
    fn options_follow_theme_settings() {
        let settings = ThemeSettings {
            primary: ThemeName::Oslo,
            default_mode: ThemeMode::Dark,
            enable_system_preference: false,
            enable_theme_switching: false,
            persist_preference: false,
            storage_key: "custom".into(),
        };
        let options = ResolverOptions::from(&settings);
        assert_eq!(options.default_theme, ThemeName::Oslo);
        assert_eq!(options.default_mode, ThemeMode::Dark);
        assert!(!options.enable_system_preference);
        assert!(!options.enable_theme_switching);
        assert!(!options.persist_preference);
        assert_eq!(options.storage_key, "custom");
    }

    #[test]
    fn render_target_serializes_camel_case() {
        let target = RenderTarget {
            template_id: "oslo-dark".into(),
            dark_mode: true,
        };
        let json = serde_json::to_string(&target).expect("serialize");
        assert_eq!(json, r#"{"templateId":"oslo-dark","darkMode":true}"#);
    }
}
