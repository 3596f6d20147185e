//! Error types shared across the crate.
//!
//! Only failures that callers can act on are modeled here. Unmapped bridge
//! tokens, invalid persisted values and persistence write failures are not
//! errors: they are logged and recovered where they happen.

use thiserror::Error;

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Failures raised by a key-value preference store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// The backing document exists but could not be decoded.
    #[error("failed to parse preference store `{path}`: {message}")]
    Parse { path: String, message: String },
    /// The store cannot be reached at all (no backing location, revoked access).
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

/// Parsing failures for the closed name sets (themes, modes, categories).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error("unknown theme mode `{0}` (expected light, dark or system)")]
    UnknownMode(String),
    #[error("unknown token category `{0}`")]
    UnknownCategory(String),
    #[error("unknown theme category `{0}` (expected industry, geographic or general)")]
    UnknownThemeCategory(String),
}
