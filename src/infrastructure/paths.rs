//! Platform directory resolution.
//!
//! | Purpose | Linux | macOS |
//! |---|---|---|
//! | config | `~/.config/storefront-search` | `~/Library/Application Support/storefront-search` |
//! | data (traces) | `~/.local/share/storefront-search` | `~/Library/Application Support/storefront-search` |
//!
//! When the platform directory cannot be determined the current directory is
//! used, so tracing and config lookup degrade instead of failing.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "storefront-search";
const CONFIG_FILE: &str = "config.toml";

/// Directory holding trace output.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Directory holding `config.toml` and custom themes.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Default configuration file location.
#[must_use]
pub fn default_config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use storefront_search::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde(Path::new("/etc/catalog.json")), Path::new("/etc/catalog.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}
