//! List Products Use Case
//!
//! Read-only view of the catalog.

use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;

/// List products use case
pub struct ListProductsUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> ListProductsUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Products in insertion order, with their images when requested
    pub async fn execute(&self, include_images: bool) -> CatalogResult<Vec<Product>> {
        let products = self.repo.list_products(include_images).await?;
        tracing::debug!(count = products.len(), include_images, "Listed products");
        Ok(products)
    }
}
