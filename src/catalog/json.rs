//! JSON-backed catalog.
//!
//! Products are read once, validated, and then kept in memory for the lifetime
//! of the process. The catalog is read-only.
//!
//! # File Format
//!
//! Either a bare array of products or an object with a `products` key:
//!
//! ```json
//! {
//!   "version": 1,
//!   "products": [
//!     { "id": "feeder-pro", "name": "Smart Feeder Pro", "category": "feeders" }
//!   ]
//! }
//! ```

use crate::catalog::backend::Catalog;
use crate::domain::error::{Result, SearchError};
use crate::domain::Product;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Catalog shipped with the binary, used when no catalog file is configured.
const DEFAULT_CATALOG: &str = include_str!("../../catalog/default-catalog.json");

/// The wrapped form; extra keys such as `version` are ignored.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

/// In-memory catalog parsed from JSON.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    products: Vec<Product>,
}

impl JsonCatalog {
    /// Parses a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Json`] if the document cannot be parsed and
    /// [`SearchError::Catalog`] if two products share an identifier.
    pub fn from_json(json: &str) -> Result<Self> {
        // Pick the shape up front so serde_json reports the failing field and
        // line instead of a generic mismatch.
        let products = if json.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Product>>(json)?
        } else {
            serde_json::from_str::<CatalogDocument>(json)?.products
        };
        Self::from_products(products)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Io`] if the file cannot be read, plus the errors
    /// of [`JsonCatalog::from_json`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("load_catalog", path = %path.display()).entered();

        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;

        tracing::debug!(product_count = catalog.products.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Returns the catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded document is malformed, which the test suite
    /// guards against.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_CATALOG)
    }

    /// Wraps an already-built product list, rejecting duplicate identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Catalog`] naming the first duplicated id.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        if let Some(duplicate) = products.iter().find(|p| !seen.insert(&p.id)) {
            return Err(SearchError::Catalog(format!(
                "duplicate product id `{}`",
                duplicate.id
            )));
        }
        Ok(Self { products })
    }
}

impl Catalog for JsonCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = JsonCatalog::builtin().unwrap();
        assert!(catalog.products().len() > crate::search::MAX_RESULTS);
    }

    #[test]
    fn test_builtin_catalog_covers_every_category() {
        let catalog = JsonCatalog::builtin().unwrap();
        for category in Category::ALL {
            assert!(
                catalog.products().iter().any(|p| p.category == category),
                "no product in {category}"
            );
        }
    }

    #[test]
    fn test_bare_array_document() {
        let json = r#"[{"id":"a","name":"Smart Feeder Pro","category":"feeders"}]"#;
        let catalog = JsonCatalog::from_json(json).unwrap();
        assert_eq!(catalog.products().len(), 1);
    }

    #[test]
    fn test_bad_product_error_names_field_and_line() {
        let bare = "[\n  {\"id\":\"a\",\"name\":\"Sofa\",\"category\":\"furniture\"}\n]";
        let wrapped = format!("{{\"version\":1,\"products\":{bare}}}");

        for json in [bare.to_string(), wrapped] {
            let message = JsonCatalog::from_json(&json).unwrap_err().to_string();
            assert!(message.contains("furniture"), "{message}");
            assert!(message.contains("line 2"), "{message}");
        }
    }

    #[test]
    fn test_wrapped_document_without_products_is_rejected() {
        let err = JsonCatalog::from_json(r#"{"version":1}"#).unwrap_err();
        assert!(err.to_string().contains("products"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id":"a","name":"One","category":"toys"},
            {"id":"a","name":"Two","category":"toys"}
        ]"#;
        let err = JsonCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, SearchError::Catalog(_)));
        assert!(err.to_string().contains("`a`"));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = JsonCatalog::from_json("{ nope").unwrap_err();
        assert!(matches!(err, SearchError::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version":1,"products":[{{"id":"b","name":"Auto Litter Box","category":"litter"}}]}}"#
        )
        .unwrap();

        let catalog = JsonCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.find(&"b".into()).map(|p| p.name.as_str()), Some("Auto Litter Box"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCatalog::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SearchError::Io(_)));
    }
}
