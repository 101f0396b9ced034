//! Domain Entities
//!
//! Products and their images.

use kernel::id::{ImageId, ProductId};
use serde::Serialize;

/// Product listing
///
/// `price` is whatever the form coerced to; zero, negative and NaN are all
/// stored as-is. NaN serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Ordered by image id. Empty when loaded without images.
    pub images: Vec<Image>,
}

/// Image attached to a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: ImageId,
    pub url: String,
    pub product_id: ProductId,
}

/// Product about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
}
