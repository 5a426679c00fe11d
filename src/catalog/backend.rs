//! Catalog read interface.
//!
//! The overlay never owns or mutates product data. It reads an ordered product
//! sequence through the [`Catalog`] trait, so the source (embedded JSON, a
//! file, or a test fixture) can change without touching search logic.

use crate::domain::{Product, ProductId};
use std::fmt::Debug;

/// Synchronous, side-effect-free access to an ordered product collection.
///
/// # Implementations
///
/// - [`JsonCatalog`](super::JsonCatalog): products parsed from JSON
/// - `Vec<Product>`: in-memory fixtures
///
/// # Examples
///
/// ```
/// use storefront_search::catalog::Catalog;
/// use storefront_search::domain::{Category, Product};
///
/// let catalog = vec![Product::new("a", "Smart Feeder Pro", Category::Feeders)];
/// assert_eq!(catalog.products().len(), 1);
/// assert!(catalog.find(&"a".into()).is_some());
/// ```
pub trait Catalog: Debug + Send + Sync {
    /// Returns every product, in catalog order.
    fn products(&self) -> &[Product];

    /// Looks up a product by identifier.
    fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|product| &product.id == id)
    }
}

impl Catalog for Vec<Product> {
    fn products(&self) -> &[Product] {
        self
    }
}
