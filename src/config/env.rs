//! Environment overrides.
//!
//! `THEME_BRIDGE_*` variables take precedence over every config file.

use std::path::PathBuf;

use crate::catalog::ThemeName;
use crate::error::ConfigError;

use super::resolve::parse_mode;
use super::Config;

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(theme) = non_empty(env_lookup, "THEME_BRIDGE_THEME") {
        // Explicit operator input, so an unknown name is an error rather than a warning.
        config.theme.primary = theme.parse::<ThemeName>().map_err(|err| {
            ConfigError::Invalid(format!("THEME_BRIDGE_THEME: {err}"))
        })?;
    }
    if let Some(mode) = non_empty(env_lookup, "THEME_BRIDGE_MODE") {
        config.theme.default_mode = parse_mode("THEME_BRIDGE_MODE", &mode)?;
    }
    if let Some(raw) = non_empty(env_lookup, "THEME_BRIDGE_SWITCHING") {
        config.theme.enable_theme_switching = parse_bool("THEME_BRIDGE_SWITCHING", &raw)?;
    }
    if let Some(path) = non_empty(env_lookup, "THEME_BRIDGE_STORE") {
        config.store.path = Some(PathBuf::from(path));
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "invalid {name} value `{raw}`: expected true or false"
        ))),
    }
}
