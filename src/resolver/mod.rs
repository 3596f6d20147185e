//! Theme resolver: the `Loading -> Ready | Error` state machine that owns the
//! current theme, reconciles it with the persisted preference and derives the
//! template identifier for the rendering library.
//!
//! A resolver is an explicitly constructed handle. Nothing is global; callers
//! pass it to whatever needs the current theme. Using the resolver before
//! [`ThemeResolver::initialize`] has run is a wiring bug:
//! [`ThemeResolver::snapshot`] and every mutator panic on it, so a
//! not-yet-loaded default can never overwrite the stored preference.

mod state;

pub use state::{
    derive_template_id, RenderTarget, ResolverOptions, ResolverPhase, ResolverSnapshot,
    ThemeResolutionState,
};

use crate::catalog::{ThemeConfig, ThemeName};
use crate::error::CatalogError;
use crate::mode::{ModePreference, ModeSource, ThemeMode};
use crate::store::KeyValueStore;

const USED_BEFORE_INITIALIZE: &str = "ThemeResolver used before initialize(); construct it with ThemeResolver::start or call initialize() first";

/// Stateful theme resolver over a preference store `S` and mode source `M`.
#[derive(Debug)]
pub struct ThemeResolver<S, M> {
    options: ResolverOptions,
    state: ThemeResolutionState,
    initialized: bool,
    store: S,
    mode_source: M,
}

impl<S: KeyValueStore, M: ModeSource> ThemeResolver<S, M> {
    /// Create a resolver in the `Loading` phase. Call [`Self::initialize`]
    /// before reading its public state.
    pub fn new(options: ResolverOptions, store: S, mode_source: M) -> Self {
        let state = ThemeResolutionState::loading(options.default_theme);
        Self {
            options,
            state,
            initialized: false,
            store,
            mode_source,
        }
    }

    /// Create and initialize in one step.
    pub fn start(options: ResolverOptions, store: S, mode_source: M) -> Self {
        let mut resolver = Self::new(options, store, mode_source);
        resolver.initialize();
        resolver
    }

    /// Load the persisted theme preference. Runs at most once; later calls
    /// return the current phase without touching the store.
    pub fn initialize(&mut self) -> ResolverPhase {
        if self.initialized {
            tracing::debug!("theme resolver already initialized");
            return self.phase();
        }
        self.initialized = true;

        let key = self.options.storage_key.clone();
        match self.store.get(&key) {
            Ok(Some(raw)) if raw == self.state.current_theme.id() => {}
            Ok(Some(raw)) => match ThemeName::from_id(&raw) {
                Some(name) => {
                    tracing::debug!(theme = %name, "restored persisted theme");
                    self.state.current_theme = name;
                }
                None => {
                    tracing::warn!(key = %key, value = ?raw, "discarding unknown persisted theme");
                    if let Err(err) = self.store.remove(&key) {
                        tracing::warn!(key = %key, "failed to discard persisted theme: {err}");
                    }
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::error!(key = %key, "failed to load theme preference: {err}");
                self.state.error = Some(format!("failed to load theme preference: {err}"));
            }
        }

        self.state.is_loading = false;
        tracing::debug!(phase = self.phase().as_str(), theme = %self.state.current_theme, "theme resolver initialized");
        self.phase()
    }

    /// Switch the current theme.
    ///
    /// Returns `false` and leaves state untouched when switching is disabled.
    /// A changed theme is persisted immediately; write failures are logged.
    ///
    /// # Panics
    ///
    /// Panics when [`Self::initialize`] has never run.
    pub fn set_theme(&mut self, name: ThemeName) -> bool {
        self.require_initialized();
        if !self.options.enable_theme_switching {
            tracing::debug!(theme = %name, "theme switching disabled; ignoring set_theme");
            return false;
        }
        if self.state.current_theme != name {
            tracing::debug!(from = %self.state.current_theme, to = %name, "theme changed");
            self.state.current_theme = name;
            self.persist();
        }
        true
    }

    /// Parse `raw` against the catalog, then [`Self::set_theme`].
    pub fn set_theme_by_name(&mut self, raw: &str) -> Result<bool, CatalogError> {
        let name = raw.parse::<ThemeName>()?;
        Ok(self.set_theme(name))
    }

    /// Best-effort write of the current theme under the storage key.
    pub fn persist(&mut self) {
        self.require_initialized();
        if !self.options.persist_preference {
            return;
        }
        let theme = self.state.current_theme;
        if let Err(err) = self.store.set(&self.options.storage_key, theme.id()) {
            tracing::warn!(key = %self.options.storage_key, theme = %theme, "failed to persist theme preference: {err}");
        }
    }

    /// Concrete mode derived from the mode source.
    ///
    /// A `system` (or absent) preference asks the environment when system
    /// preference is enabled; anything undeterminable falls back to the
    /// configured default mode.
    pub fn resolve_mode(&self) -> ThemeMode {
        let system = || {
            if self.options.enable_system_preference {
                self.mode_source.system_mode()
            } else {
                None
            }
        };
        match self.mode_source.preference() {
            Some(ModePreference::Light) => ThemeMode::Light,
            Some(ModePreference::Dark) => ThemeMode::Dark,
            Some(ModePreference::System) | None => {
                system().unwrap_or(self.options.default_mode)
            }
        }
    }

    /// Ask the mode source to adopt the opposite of the resolved mode.
    pub fn toggle_mode(&mut self) -> ThemeMode {
        self.require_initialized();
        let next = self.resolve_mode().toggle();
        tracing::debug!(mode = next.as_str(), "toggling mode");
        self.mode_source.set_preference(next.into());
        next
    }

    /// Forward an explicit preference (including `system`) to the mode source.
    pub fn set_mode_preference(&mut self, preference: ModePreference) {
        self.require_initialized();
        self.mode_source.set_preference(preference);
    }

    /// Clear a load error and return to `Ready`.
    ///
    /// Does not re-read the store; the transition through `Loading` is
    /// immediate. A resolver that never initialized runs `initialize` instead.
    pub fn retry(&mut self) -> ResolverPhase {
        if !self.initialized {
            return self.initialize();
        }
        self.state.error = None;
        self.state.is_loading = true;
        tracing::debug!("theme resolver retrying");
        self.state.is_loading = false;
        self.phase()
    }

    pub fn current_theme(&self) -> ThemeName {
        self.state.current_theme
    }

    pub fn theme_config(&self) -> ThemeConfig {
        ThemeConfig::new(self.state.current_theme, self.resolve_mode())
    }

    pub fn template_id(&self) -> String {
        derive_template_id(self.state.current_theme, self.resolve_mode())
    }

    pub fn is_dark_mode(&self) -> bool {
        self.resolve_mode().is_dark()
    }

    /// Template identifier plus dark flag for the rendering library.
    pub fn render_target(&self) -> RenderTarget {
        let mode = self.resolve_mode();
        RenderTarget {
            template_id: derive_template_id(self.state.current_theme, mode),
            dark_mode: mode.is_dark(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn phase(&self) -> ResolverPhase {
        self.state.phase()
    }

    pub fn state(&self) -> &ThemeResolutionState {
        &self.state
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The full public view.
    ///
    /// # Panics
    ///
    /// Panics when [`Self::initialize`] has never run.
    pub fn snapshot(&self) -> ResolverSnapshot {
        match self.try_snapshot() {
            Some(snapshot) => snapshot,
            None => panic!("{USED_BEFORE_INITIALIZE}"),
        }
    }

    fn require_initialized(&self) {
        if !self.initialized {
            panic!("{USED_BEFORE_INITIALIZE}");
        }
    }

    /// Like [`Self::snapshot`], but `None` before initialization.
    pub fn try_snapshot(&self) -> Option<ResolverSnapshot> {
        if !self.initialized {
            return None;
        }
        let mode = self.resolve_mode();
        Some(ResolverSnapshot {
            current_theme: self.state.current_theme,
            current_mode: mode,
            theme_config: ThemeConfig::new(self.state.current_theme, mode),
            render_target: RenderTarget {
                template_id: derive_template_id(self.state.current_theme, mode),
                dark_mode: mode.is_dark(),
            },
            is_loading: self.state.is_loading,
            error: self.state.error.clone(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn mode_source(&self) -> &M {
        &self.mode_source
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
