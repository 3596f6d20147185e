//! Health checks over a running resolver, its store and the bridge tables.
//!
//! Each check reports independently; one failing check never hides the rest.

use serde::Serialize;
use std::fmt;

use crate::bridge::migration_progress;
use crate::mode::ModeSource;
use crate::resolver::ThemeResolver;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Pass,
    Fail,
    Loading,
}

impl HealthStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Loading => "loading",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub name: &'static str,
    pub status: HealthStatus,
    pub message: String,
}

impl HealthCheck {
    fn new(name: &'static str, status: HealthStatus, message: impl Into<String>) -> Self {
        Self {
            name,
            status,
            message: message.into(),
        }
    }
}

/// Run every check against `resolver`.
pub fn health_report<S, M>(resolver: &ThemeResolver<S, M>) -> Vec<HealthCheck>
where
    S: KeyValueStore,
    M: ModeSource,
{
    vec![
        check_resolver(resolver),
        check_mode_source(resolver),
        check_store(resolver),
        check_bridge_coverage(),
    ]
}

/// True when no check failed. `Loading` is not a failure.
pub fn all_passed(checks: &[HealthCheck]) -> bool {
    checks.iter().all(|check| check.status != HealthStatus::Fail)
}

fn check_resolver<S: KeyValueStore, M: ModeSource>(resolver: &ThemeResolver<S, M>) -> HealthCheck {
    const NAME: &str = "theme resolver";
    if let Some(error) = resolver.error() {
        return HealthCheck::new(NAME, HealthStatus::Fail, format!("error: {error}"));
    }
    if resolver.is_loading() {
        return HealthCheck::new(NAME, HealthStatus::Loading, "loading theme preference");
    }
    HealthCheck::new(
        NAME,
        HealthStatus::Pass,
        format!(
            "{} ({})",
            resolver.current_theme().metadata().display_name,
            resolver.template_id()
        ),
    )
}

fn check_mode_source<S: KeyValueStore, M: ModeSource>(
    resolver: &ThemeResolver<S, M>,
) -> HealthCheck {
    let source = resolver.mode_source();
    let preference = source
        .preference()
        .map(|p| p.as_str())
        .unwrap_or("unset");
    let system = source
        .system_mode()
        .map(|m| m.as_str())
        .unwrap_or("unknown");
    HealthCheck::new(
        "mode source",
        HealthStatus::Pass,
        format!(
            "preference {preference}, system {system}, resolved {}",
            resolver.resolve_mode()
        ),
    )
}

fn check_store<S: KeyValueStore, M: ModeSource>(resolver: &ThemeResolver<S, M>) -> HealthCheck {
    const NAME: &str = "preference store";
    let key = &resolver.options().storage_key;
    match resolver.store().get(key) {
        Ok(Some(value)) => HealthCheck::new(NAME, HealthStatus::Pass, format!("`{key}` = {value}")),
        Ok(None) => HealthCheck::new(NAME, HealthStatus::Pass, format!("`{key}` not set")),
        Err(err) => HealthCheck::new(NAME, HealthStatus::Fail, err.to_string()),
    }
}

fn check_bridge_coverage() -> HealthCheck {
    const NAME: &str = "token bridge";
    let incomplete: Vec<String> = migration_progress()
        .iter()
        .filter(|p| !p.is_complete())
        .map(|p| format!("{} {}%", p.category, p.percentage))
        .collect();
    let message = if incomplete.is_empty() {
        "all categories fully mapped".to_string()
    } else {
        format!("incomplete: {}", incomplete.join(", "))
    };
    // Coverage is informational; gaps fall back at translate time.
    HealthCheck::new(NAME, HealthStatus::Pass, message)
}
