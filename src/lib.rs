//! Theme Bridge: theme resolution and design-token translation for an
//! external component library.
//!
//! The crate resolves which theme (name + light/dark mode) is active, keeps
//! the choice in a key-value store, and translates the internal design-token
//! vocabulary into the token names the external library understands.
//!
//! # Quick start
//!
//! ```
//! use theme_bridge::bridge::{translate, TokenCategory};
//! use theme_bridge::catalog::ThemeName;
//! use theme_bridge::mode::{StaticModeSource, ThemeMode};
//! use theme_bridge::resolver::{ResolverOptions, ThemeResolver};
//! use theme_bridge::store::MemoryStore;
//!
//! let mut resolver = ThemeResolver::start(
//!     ResolverOptions::default(),
//!     MemoryStore::new(),
//!     StaticModeSource::following_system(ThemeMode::Dark),
//! );
//! resolver.set_theme(ThemeName::Finance);
//! assert_eq!(resolver.template_id(), "finance-dark");
//! assert_eq!(translate(TokenCategory::Spacing, "4"), "space-4");
//! ```

pub mod bridge;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod mode;
pub mod render;
pub mod resolver;
pub mod store;
#[cfg(test)]
pub mod testsupport;
