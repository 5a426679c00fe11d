//! The search pipeline: normalize, match, bound, highlight.
//!
//! Every function here is pure. The overlay calls them on each query change
//! and the renderer calls [`highlight`] when building the view model.
//!
//! ```text
//! raw query → normalize_query → find_matches → bound_results → results
//!                                                              ↘ highlight (display)
//! ```
//!
//! # Modules
//!
//! - [`fold`]: Per-character case folding shared by every stage
//! - [`query`]: Query normalization
//! - [`matcher`]: Multi-field substring matching and result bounding
//! - [`highlight`]: Literal, case-insensitive match segmentation

pub mod fold;
pub mod highlight;
pub mod matcher;
pub mod query;

pub use fold::{contains_folded, fold_case};
pub use highlight::{highlight, Segment};
pub use matcher::{bound_results, find_matches, product_matches, MAX_RESULTS};
pub use query::normalize_query;

use crate::domain::Product;

/// Runs the full pipeline for an already-normalized query.
///
/// An empty query yields no results without scanning the catalog.
///
/// # Examples
///
/// ```
/// use storefront_search::domain::{Category, Product};
/// use storefront_search::search::{normalize_query, search_products};
///
/// let catalog = vec![Product::new("a", "Smart Feeder Pro", Category::Feeders)];
/// let results = search_products(&catalog, &normalize_query(" FEED "));
/// assert_eq!(results.len(), 1);
/// assert!(search_products(&catalog, "").is_empty());
/// ```
#[must_use]
pub fn search_products(products: &[Product], normalized_query: &str) -> Vec<Product> {
    if normalized_query.is_empty() {
        return Vec::new();
    }

    let _span = tracing::trace_span!(
        "search_products",
        catalog_size = products.len(),
        query_len = normalized_query.len()
    )
    .entered();

    bound_results(find_matches(products, normalized_query))
}
