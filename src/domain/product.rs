//! Product domain model.
//!
//! A [`Product`] is one catalog entry of the storefront. Only `name`,
//! `short_description`, `category` and `features` take part in search; the
//! remaining fields are display attributes carried through to the result list
//! and the detail view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique product identifier.
///
/// Serialized transparently as a JSON string, e.g. `"feeder-pro"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Storefront category.
///
/// The storefront sells into a fixed, closed set of categories. Search matches
/// against the lowercase slug returned by [`Category::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Feeders,
    Fountains,
    Trackers,
    Cameras,
    Litter,
    Toys,
    Health,
}

impl Category {
    /// All categories in storefront navigation order.
    pub const ALL: [Self; 7] = [
        Self::Feeders,
        Self::Fountains,
        Self::Trackers,
        Self::Cameras,
        Self::Litter,
        Self::Toys,
        Self::Health,
    ];

    /// Returns the category slug (`"feeders"`, `"litter"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feeders => "feeders",
            Self::Fountains => "fountains",
            Self::Trackers => "trackers",
            Self::Cameras => "cameras",
            Self::Litter => "litter",
            Self::Toys => "toys",
            Self::Health => "health",
        }
    }

    /// Returns the human-readable label shown in the result list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feeders => "Smart Feeders",
            Self::Fountains => "Water Fountains",
            Self::Trackers => "GPS Trackers",
            Self::Cameras => "Pet Cameras",
            Self::Litter => "Smart Litter",
            Self::Toys => "Interactive Toys",
            Self::Health => "Health & Wellness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry.
///
/// Optional text fields are typed as `Option`/`Vec` so that missing values in
/// catalog JSON simply never match instead of failing to load.
///
/// # JSON Format
///
/// ```json
/// {
///   "id": "feeder-pro",
///   "name": "Smart Feeder Pro",
///   "shortDescription": "App-controlled portions",
///   "category": "feeders",
///   "features": ["Wi-Fi", "Voice recorder"],
///   "price": 149.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
}

impl Product {
    /// Creates a product with only the required fields set.
    ///
    /// Display attributes default to empty values; use struct update syntax or
    /// the `with_*` helpers to fill the searchable optional fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_search::domain::{Category, Product};
    ///
    /// let product = Product::new("gps", "GPS Tracker Collar", Category::Trackers)
    ///     .with_description("Live location for adventurous cats")
    ///     .with_features(["Waterproof", "7-day battery"]);
    /// assert_eq!(product.features.len(), 2);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            short_description: None,
            category,
            features: Vec::new(),
            price: 0.0,
            original_price: None,
            rating: None,
            reviews: 0,
            image: None,
            badge: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Formats the price for display, e.g. `"$149.00"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Returns the discount percentage when an original price is set and higher
    /// than the current price.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original <= 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (((original - self.price) / original) * 100.0).round() as u32;
        Some(percent)
    }
}
