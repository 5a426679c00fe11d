//! Domain layer for the storefront search overlay.
//!
//! This module contains the core domain types shared by every other layer,
//! independent of terminal or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product records, identifiers and the closed category set
//!
//! # Examples
//!
//! ```
//! use storefront_search::domain::{Category, Product};
//!
//! let product = Product::new("feeder-pro", "Smart Feeder Pro", Category::Feeders);
//! assert_eq!(product.id.as_str(), "feeder-pro");
//! ```

pub mod error;
pub mod product;

pub use error::{Result, SearchError};
pub use product::{Category, Product, ProductId};
