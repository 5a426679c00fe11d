//! Error types for the storefront search crate.
//!
//! This module defines the centralized error type [`SearchError`] and a type alias
//! [`Result`] used throughout the crate. The overlay state machine itself never
//! fails; errors only arise at the edges where catalogs, themes and configuration
//! files are read from disk.

use thiserror::Error;

/// The main error type for storefront search operations.
///
/// # Examples
///
/// ```
/// use storefront_search::SearchError;
///
/// fn validate_catalog() -> Result<(), SearchError> {
///     Err(SearchError::Catalog("duplicate product id `a`".to_string()))
/// }
///
/// assert!(validate_catalog().is_err());
/// ```
#[derive(Debug, Error)]
pub enum SearchError {
    /// The catalog could not be loaded or violates its own invariants.
    ///
    /// Raised for structural problems such as duplicate product identifiers.
    /// Parse failures surface as [`SearchError::Json`] instead.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when an explicitly requested config file does not exist or its
    /// TOML content is malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for storefront search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
