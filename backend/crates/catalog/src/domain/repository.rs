//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use kernel::id::ProductId;

use crate::domain::entities::{Image, NewProduct, Product};
use crate::error::CatalogResult;

/// Catalog repository trait
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// All products ordered by id; images (ordered by id) only when asked
    async fn list_products(&self, include_images: bool) -> CatalogResult<Vec<Product>>;

    /// Insert a product and its image rows atomically
    async fn create_product(
        &self,
        product: &NewProduct,
        image_urls: &[String],
    ) -> CatalogResult<Product>;

    async fn product_exists(&self, product_id: ProductId) -> CatalogResult<bool>;

    /// Append image rows to an existing product.
    ///
    /// Fails with `ProductNotFound` when the product is missing.
    async fn attach_images(
        &self,
        product_id: ProductId,
        image_urls: &[String],
    ) -> CatalogResult<Vec<Image>>;

    /// Delete every image row of a product, returning how many went
    async fn delete_images_for_product(&self, product_id: ProductId) -> CatalogResult<u64>;

    /// Delete the product row. `false` when it did not exist.
    ///
    /// Fails with `ProductHasImages` while image rows still reference it.
    async fn delete_product(&self, product_id: ProductId) -> CatalogResult<bool>;
}
