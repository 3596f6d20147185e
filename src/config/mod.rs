//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`THEME_BRIDGE_THEME`, `THEME_BRIDGE_MODE`,
//!    `THEME_BRIDGE_SWITCHING`, `THEME_BRIDGE_STORE`)
//! 2. TOML file specified via `--config`
//! 3. `./theme-bridge.toml` in the current directory
//! 4. `$XDG_CONFIG_HOME/theme-bridge/theme-bridge.toml`
//!    (or `~/.config/theme-bridge/theme-bridge.toml`)
//! 5. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod resolve;
mod sources;
mod types;

pub use defaults::{
    DEFAULT_CSS_PREFIX, DEFAULT_PRIMARY_THEME, DEFAULT_STORAGE_KEY, DEFAULT_THEME_MODE,
};
pub use init::{config_root_dir, default_global_config_path};
pub use loader::{load_config, load_config_with_diagnostics};
pub use types::{
    BridgeSettings, Config, ConfigDiagnostics, ConfigSource, LoadedConfig, StoreSettings,
    ThemeSettings,
};
use types::FileConfig;

#[cfg(test)]
mod tests {
    use super::loader::load_config_with_diagnostics_from_sources;
    use super::*;
    use crate::catalog::ThemeName;
    use crate::error::ConfigError;
    use crate::mode::ThemeMode;
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    fn load_with(
        files: &[(&str, &str)],
        env: &[(&str, &str)],
        path_override: Option<&str>,
    ) -> Result<LoadedConfig, ConfigError> {
        let files: BTreeMap<PathBuf, String> = files
            .iter()
            .map(|(p, t)| (PathBuf::from(p), t.to_string()))
            .collect();
        let env: BTreeMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_with_diagnostics_from_sources(
            path_override,
            |path: &Path| {
                files.get(path).cloned().ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::NotFound, "missing")
                })
            },
            |name| env.get(name).cloned(),
            || Some(PathBuf::from("/cfg")),
        )
    }

    #[test]
    fn defaults_are_sensible() {
        let c = Config::default();
        assert_eq!(c.theme.primary, ThemeName::Enterprise);
        assert_eq!(c.theme.default_mode, ThemeMode::Light);
        assert!(c.theme.enable_system_preference);
        assert!(c.theme.enable_theme_switching);
        assert!(c.theme.persist_preference);
        assert_eq!(c.theme.storage_key, "theme-pref");
        assert_eq!(c.bridge.css_prefix, "tb");
        assert_eq!(c.store.path, None);
    }

    #[test]
    fn no_files_means_builtin_defaults() {
        let loaded = load_with(&[], &[], None).expect("load");
        assert_eq!(loaded.source, ConfigSource::BuiltInDefaults);
        assert_eq!(loaded.config, Config::default());
        assert!(loaded.diagnostics.warnings.is_empty());
    }

    #[test]
    fn parse_partial_toml() {
        let toml = r#"
            [theme]
            primary = "finance"
            default_mode = "dark"
            enable_theme_switching = false

            [bridge]
            css_prefix = "xala"
        "#;
        let loaded = load_with(&[("theme-bridge.toml", toml)], &[], None).expect("load");
        assert_eq!(loaded.source, ConfigSource::Local);
        let c = loaded.config;
        assert_eq!(c.theme.primary, ThemeName::Finance);
        assert_eq!(c.theme.default_mode, ThemeMode::Dark);
        assert!(!c.theme.enable_theme_switching);
        assert!(c.theme.persist_preference);
        assert_eq!(c.bridge.css_prefix, "xala");
    }

    #[test]
    fn local_file_beats_global_file() {
        let loaded = load_with(
            &[
                ("theme-bridge.toml", "[theme]\nprimary = \"oslo\"\n"),
                (
                    "/cfg/theme-bridge/theme-bridge.toml",
                    "[theme]\nprimary = \"bergen\"\n",
                ),
            ],
            &[],
            None,
        )
        .expect("load");
        assert_eq!(loaded.config.theme.primary, ThemeName::Oslo);
    }

    #[test]
    fn global_file_used_when_no_local() {
        let loaded = load_with(
            &[(
                "/cfg/theme-bridge/theme-bridge.toml",
                "[theme]\nprimary = \"bergen\"\n",
            )],
            &[],
            None,
        )
        .expect("load");
        assert_eq!(loaded.config.theme.primary, ThemeName::Bergen);
        assert!(matches!(loaded.source, ConfigSource::Global(_)));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_with(&[], &[], Some("/nope.toml")).expect_err("missing explicit");
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn unknown_primary_theme_warns_and_keeps_default() {
        let loaded = load_with(
            &[("theme-bridge.toml", "[theme]\nprimary = \"vaporwave\"\n")],
            &[],
            None,
        )
        .expect("load");
        assert_eq!(loaded.config.theme.primary, ThemeName::Enterprise);
        assert_eq!(loaded.diagnostics.warnings.len(), 1);
        assert!(loaded.diagnostics.warnings[0].contains("vaporwave"));
    }

    #[test]
    fn invalid_default_mode_is_rejected() {
        let err = load_with(
            &[("theme-bridge.toml", "[theme]\ndefault_mode = \"system\"\n")],
            &[],
            None,
        )
        .expect_err("system is not a stored mode");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn blank_storage_key_is_rejected() {
        let err = load_with(
            &[("theme-bridge.toml", "[theme]\nstorage_key = \"  \"\n")],
            &[],
            None,
        )
        .expect_err("blank key");
        assert!(err.to_string().contains("storage_key"));
    }

    #[test]
    fn env_overrides_file_values() {
        let loaded = load_with(
            &[("theme-bridge.toml", "[theme]\nprimary = \"oslo\"\n")],
            &[
                ("THEME_BRIDGE_THEME", "healthcare"),
                ("THEME_BRIDGE_MODE", "dark"),
                ("THEME_BRIDGE_SWITCHING", "off"),
                ("THEME_BRIDGE_STORE", "/tmp/prefs.json"),
            ],
            None,
        )
        .expect("load");
        let c = loaded.config;
        assert_eq!(c.theme.primary, ThemeName::Healthcare);
        assert_eq!(c.theme.default_mode, ThemeMode::Dark);
        assert!(!c.theme.enable_theme_switching);
        assert_eq!(c.store.path, Some(PathBuf::from("/tmp/prefs.json")));
    }

    #[test]
    fn unknown_env_theme_is_an_error() {
        let err = load_with(&[], &[("THEME_BRIDGE_THEME", "vaporwave")], None)
            .expect_err("unknown env theme");
        assert!(err.to_string().contains("THEME_BRIDGE_THEME"));
    }

    #[test]
    fn malformed_toml_is_a_toml_error() {
        let err = load_with(&[("theme-bridge.toml", "[theme\n")], &[], None)
            .expect_err("bad toml");
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
