//! In-Memory Repository Implementation
//!
//! Mirrors the PostgreSQL schema rules: ids are assigned in increasing order
//! and a product cannot be deleted while image rows reference it.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::{ImageId, ProductId};
use tokio::sync::RwLock;

use crate::domain::entities::{Image, NewProduct, Product};
use crate::domain::repository::CatalogRepository;
use crate::error::{CatalogError, CatalogResult};

#[derive(Default)]
struct MemoryState {
    next_product_id: i64,
    next_image_id: i64,
    products: BTreeMap<ProductId, NewProduct>,
    images: BTreeMap<ImageId, Image>,
}

impl MemoryState {
    fn insert_images(&mut self, product_id: ProductId, urls: &[String]) -> Vec<Image> {
        urls.iter()
            .map(|url| {
                self.next_image_id += 1;
                let image = Image {
                    id: ImageId::from_i64(self.next_image_id),
                    url: url.clone(),
                    product_id,
                };
                self.images.insert(image.id, image.clone());
                image
            })
            .collect()
    }

    fn images_of(&self, product_id: ProductId) -> Vec<Image> {
        self.images
            .values()
            .filter(|image| image.product_id == product_id)
            .cloned()
            .collect()
    }
}

/// In-memory repository
#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of image rows across all products
    pub async fn image_count(&self) -> usize {
        self.state.read().await.images.len()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_products(&self, include_images: bool) -> CatalogResult<Vec<Product>> {
        let state = self.state.read().await;

        Ok(state
            .products
            .iter()
            .map(|(id, product)| Product {
                id: *id,
                title: product.title.clone(),
                description: product.description.clone(),
                price: product.price,
                images: if include_images {
                    state.images_of(*id)
                } else {
                    Vec::new()
                },
            })
            .collect())
    }

    async fn create_product(
        &self,
        product: &NewProduct,
        image_urls: &[String],
    ) -> CatalogResult<Product> {
        let mut state = self.state.write().await;

        state.next_product_id += 1;
        let id = ProductId::from_i64(state.next_product_id);
        state.products.insert(id, product.clone());
        let images = state.insert_images(id, image_urls);

        Ok(Product {
            id,
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            images,
        })
    }

    async fn product_exists(&self, product_id: ProductId) -> CatalogResult<bool> {
        Ok(self.state.read().await.products.contains_key(&product_id))
    }

    async fn attach_images(
        &self,
        product_id: ProductId,
        image_urls: &[String],
    ) -> CatalogResult<Vec<Image>> {
        let mut state = self.state.write().await;
        if !state.products.contains_key(&product_id) {
            return Err(CatalogError::ProductNotFound(product_id));
        }
        Ok(state.insert_images(product_id, image_urls))
    }

    async fn delete_images_for_product(&self, product_id: ProductId) -> CatalogResult<u64> {
        let mut state = self.state.write().await;
        let before = state.images.len();
        state.images.retain(|_, image| image.product_id != product_id);
        Ok((before - state.images.len()) as u64)
    }

    async fn delete_product(&self, product_id: ProductId) -> CatalogResult<bool> {
        let mut state = self.state.write().await;
        if state.images.values().any(|image| image.product_id == product_id) {
            return Err(CatalogError::ProductHasImages(product_id));
        }
        Ok(state.products.remove(&product_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> NewProduct {
        NewProduct {
            title: "Lamp".to_string(),
            description: "Brass".to_string(),
            price: 10.0,
        }
    }

    #[tokio::test]
    async fn test_ids_increase_and_list_is_ordered() {
        let repo = InMemoryCatalogRepository::new();
        let a = repo.create_product(&lamp(), &[]).await.unwrap();
        let b = repo.create_product(&lamp(), &[]).await.unwrap();
        assert!(b.id > a.id);

        let ids: Vec<_> = repo
            .list_products(false)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn test_delete_blocked_by_images() {
        let repo = InMemoryCatalogRepository::new();
        let product = repo
            .create_product(&lamp(), &["u1".to_string()])
            .await
            .unwrap();

        assert!(matches!(
            repo.delete_product(product.id).await,
            Err(CatalogError::ProductHasImages(_))
        ));

        assert_eq!(repo.delete_images_for_product(product.id).await.unwrap(), 1);
        assert!(repo.delete_product(product.id).await.unwrap());
        assert!(!repo.delete_product(product.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_without_images() {
        let repo = InMemoryCatalogRepository::new();
        repo.create_product(&lamp(), &["u1".to_string()])
            .await
            .unwrap();

        assert!(repo.list_products(false).await.unwrap()[0].images.is_empty());
        assert_eq!(repo.list_products(true).await.unwrap()[0].images.len(), 1);
    }

    #[tokio::test]
    async fn test_attach_to_missing_product() {
        let repo = InMemoryCatalogRepository::new();
        let missing = ProductId::from_i64(404);
        assert!(matches!(
            repo.attach_images(missing, &["u".to_string()]).await,
            Err(CatalogError::ProductNotFound(id)) if id == missing
        ));
    }
}
