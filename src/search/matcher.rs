//! Catalog filtering and result bounding.
//!
//! Matching is plain case-insensitive substring containment over four fields.
//! There is no scoring: results keep catalog order, and only the first
//! [`MAX_RESULTS`] are kept for display.

use super::fold::contains_folded;
use crate::domain::Product;

/// Maximum number of results shown by the overlay.
pub const MAX_RESULTS: usize = 6;

/// Returns `true` if any searchable field of `product` contains `query`.
///
/// `query` must already be normalized (see
/// [`normalize_query`](super::normalize_query)). Fields are folded the same
/// way as the query; an absent description or empty feature list never
/// matches.
#[must_use]
pub fn product_matches(product: &Product, query: &str) -> bool {
    let contains = |field: &str| contains_folded(field, query);

    contains(&product.name)
        || product.short_description.as_deref().is_some_and(contains)
        || contains(product.category.as_str())
        || product.features.iter().any(|feature| contains(feature.as_str()))
}

/// Filters `products` down to the entries matching `query`, preserving order.
///
/// Lazy so that [`bound_results`] can stop scanning once the bound is reached.
pub fn find_matches<'a>(
    products: &'a [Product],
    query: &'a str,
) -> impl Iterator<Item = &'a Product> + 'a {
    products
        .iter()
        .filter(move |product| product_matches(product, query))
}

/// Keeps the first [`MAX_RESULTS`] matches, in order.
#[must_use]
pub fn bound_results<'a, I>(matches: I) -> Vec<Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    matches.into_iter().take(MAX_RESULTS).cloned().collect()
}
