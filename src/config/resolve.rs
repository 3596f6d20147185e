//! Config-file to runtime-config resolution.

use std::path::PathBuf;

use crate::catalog::ThemeName;
use crate::error::ConfigError;
use crate::mode::ThemeMode;

use super::{Config, ConfigDiagnostics, FileConfig};

pub(super) fn resolve_config_from_file_config(
    parsed: FileConfig,
    diagnostics: &mut ConfigDiagnostics,
) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    let theme = parsed.theme;

    // An unknown primary theme keeps the built-in default rather than failing startup.
    if let Some(primary) = normalized_option(&theme.primary) {
        match primary.parse::<ThemeName>() {
            Ok(name) => config.theme.primary = name,
            Err(err) => diagnostics.warnings.push(format!(
                "theme.primary: {err}; using `{}`",
                config.theme.primary
            )),
        }
    }
    if let Some(mode) = normalized_option(&theme.default_mode) {
        config.theme.default_mode = parse_mode("theme.default_mode", &mode)?;
    }
    if let Some(enabled) = theme.enable_system_preference {
        config.theme.enable_system_preference = enabled;
    }
    if let Some(enabled) = theme.enable_theme_switching {
        config.theme.enable_theme_switching = enabled;
    }
    if let Some(enabled) = theme.persist_preference {
        config.theme.persist_preference = enabled;
    }
    if let Some(key) = theme.storage_key {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid(
                "theme.storage_key cannot be empty".to_string(),
            ));
        }
        config.theme.storage_key = trimmed.to_string();
    }

    if let Some(prefix) = normalized_option(&parsed.bridge.css_prefix) {
        config.bridge.css_prefix = prefix;
    }
    if let Some(path) = normalized_option(&parsed.store.path) {
        config.store.path = Some(PathBuf::from(path));
    }

    Ok(config)
}

pub(super) fn parse_mode(field: &str, raw: &str) -> Result<ThemeMode, ConfigError> {
    raw.parse::<ThemeMode>()
        .map_err(|err| ConfigError::Invalid(format!("{field}: {err}")))
}

pub(super) fn normalized_option(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
