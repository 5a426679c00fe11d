//! Catalog layer: where product records come from.
//!
//! # Modules
//!
//! - `backend`: The [`Catalog`] read trait
//! - `json`: JSON-backed catalog with an embedded default data set

pub mod backend;
pub mod json;

pub use backend::Catalog;
pub use json::JsonCatalog;
