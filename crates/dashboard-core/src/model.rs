use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// The remote collection assigns identifiers; the dashboard never invents
/// them. On the wire the field is named `_id`, so [`Product`] renames it
/// during (de)serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog item as known to the remote collection.
///
/// Every `Product` held by the dashboard has been fetched from or confirmed
/// by the remote API, so all fields satisfy the catalog constraints:
/// non-empty text fields and a strictly positive price. Drafts that may
/// transiently violate them live in [`FormBuffer`](crate::form::FormBuffer)
/// instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

impl Product {
    /// Creates a new Product instance.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            image: image.into(),
        }
    }
}

/// Validated request body for create and update calls.
///
/// Produced exclusively by [`validate`](crate::validate::validate), so a
/// `ProductPayload` always carries non-empty fields and a positive price.
/// The canonical field name for the long text is `description` in both the
/// create and the update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}
