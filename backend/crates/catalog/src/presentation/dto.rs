//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::entities::Product;

/// GET /admin response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCatalogResponse {
    pub products: Vec<Product>,
}
