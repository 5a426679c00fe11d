//! Storefront search: an incremental product-search overlay.
//!
//! Keystrokes become a live, bounded, keyboard-navigable list of matching
//! catalog entries, with highlighting, a simulated "searching" indicator, and
//! strict open/close/dismissal rules. The crate ships a terminal front end
//! (`storefront-search`) that renders the overlay over a small storefront page.

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal shim (main.rs)                            │  ← crossterm input, clap flags
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, lifecycle                        │
//! │  - Selection, latency, sessions                     │
//! │  - Runtime: actions, timers, navigation             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search (pure) │   │ Catalog       │
//! │ (ui/)         │   │ (search/)     │   │ (catalog/)    │
//! │ - Rendering   │   │ - Normalize   │   │ - Read trait  │
//! │ - Layout/hits │   │ - Match/bound │   │ - JSON source │
//! │ - Theming     │   │ - Highlight   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, timer, infrastructure, observability       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Overlay state machine with event/action model
//! - [`catalog`]: Product sources
//! - [`domain`]: Products, identifiers, errors
//! - [`infrastructure`]: Platform paths
//! - [`search`]: Normalization, matching, bounding, highlighting
//! - [`timer`]: Clocks and cancellable timers
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a file
//!
//! # Configuration
//!
//! `~/.config/storefront-search/config.toml` (every key optional):
//!
//! ```toml
//! catalog_file = "~/shop/catalog.json"
//! theme = "catppuccin-latte"
//! # theme_file = "~/shop/theme.toml"
//! trace_level = "storefront_search=debug"
//! latency_ms = 150
//! ```
//!
//! # Example
//!
//! ```rust
//! use storefront_search::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! handle_event(&mut state, &Event::OpenRequested)?;
//! let (_, actions) = handle_event(&mut state, &Event::QueryChanged("feeder".into()))?;
//! assert!(matches!(actions.as_slice(), [Action::ScheduleTimer { .. }]));
//! assert!(!state.session().unwrap().results().is_empty());
//! # Ok::<(), storefront_search::SearchError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod timer;
pub mod ui;

pub use app::{handle_event, Action, Event, Navigator, OverlayRuntime, OverlayState};
pub use domain::{Product, ProductId, Result, SearchError};
pub use ui::Theme;

use catalog::JsonCatalog;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Application configuration, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON catalog to search. The built-in demo catalog when unset.
    pub catalog_file: Option<PathBuf>,

    /// Built-in theme name, see [`ui::theme::BUILTIN_THEMES`]. Ignored if
    /// `theme_file` is set.
    pub theme: Option<String>,

    /// Custom TOML theme. Takes precedence over `theme`.
    pub theme_file: Option<PathBuf>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`.
    pub trace_level: String,

    /// Simulated search latency in milliseconds. Default: 150.
    pub latency_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            theme: None,
            theme_file: None,
            trace_level: "info".to_string(),
            latency_ms: 150,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] on syntax errors, wrong types, or
    /// unknown keys.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SearchError::Config(e.to_string()))
    }

    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present and built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = infrastructure::default_config_file();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = std::fs::read_to_string(&path)
            .map_err(|e| SearchError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&text)
            .map_err(|e| SearchError::Config(format!("{}: {e}", path.display())))
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Resolves the theme: file, then name, then the default. Failures fall
    /// back to the default theme.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %file.display(), error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds a closed overlay from configuration.
///
/// # Errors
///
/// Returns catalog loading errors; see [`JsonCatalog::from_file`].
pub fn initialize(config: &Config) -> Result<OverlayState> {
    let _span = tracing::debug_span!("initialize").entered();

    let catalog = match &config.catalog_file {
        Some(path) => JsonCatalog::from_file(infrastructure::expand_tilde(path))?,
        None => JsonCatalog::builtin()?,
    };
    let theme = config.resolve_theme();
    tracing::debug!(theme = %theme.name, latency_ms = config.latency_ms, "overlay initialized");

    Ok(OverlayState::new(Arc::new(catalog), theme).with_latency(config.latency()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml("theme = \"catppuccin-latte\"\nlatency_ms = 20").unwrap();
        assert_eq!(config.theme.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.latency(), Duration::from_millis(20));
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml("lateny_ms = 20").unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trace_level = \"debug\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.trace_level, "debug");
    }

    #[test]
    fn test_theme_resolution_falls_back() {
        let config = Config {
            theme: Some("no-such-theme".into()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "catppuccin-mocha");

        let config = Config {
            theme: Some("catppuccin-frappe".into()),
            theme_file: Some(PathBuf::from("/definitely/missing.toml")),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "catppuccin-mocha");
    }

    #[test]
    fn test_initialize_with_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":"x","name":"Laser Toy","category":"toys"}}]"#).unwrap();
        let config = Config {
            catalog_file: Some(file.path().to_path_buf()),
            latency_ms: 5,
            ..Config::default()
        };

        let state = initialize(&config).unwrap();
        assert_eq!(state.catalog().products().len(), 1);
        assert_eq!(state.latency(), Duration::from_millis(5));
        assert!(!state.is_open());
    }

    #[test]
    fn test_initialize_missing_catalog_fails() {
        let config = Config {
            catalog_file: Some(PathBuf::from("/definitely/missing.json")),
            ..Config::default()
        };
        assert!(matches!(initialize(&config), Err(SearchError::Io(_))));
    }
}
