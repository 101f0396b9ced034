//! PostgreSQL Repository Implementation

use std::collections::HashMap;

use kernel::id::{ImageId, ProductId};
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::entities::{Image, NewProduct, Product};
use crate::domain::repository::CatalogRepository;
use crate::error::{CatalogError, CatalogResult};

/// `foreign_key_violation`
const FK_VIOLATION: &str = "23503";

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_images(
        tx: &mut Transaction<'_, Postgres>,
        product_id: ProductId,
        urls: &[String],
    ) -> CatalogResult<Vec<Image>> {
        let mut images = Vec::with_capacity(urls.len());
        for url in urls {
            let row = sqlx::query_as::<_, ImageRow>(
                r#"
                INSERT INTO images (url, product_id)
                VALUES ($1, $2)
                RETURNING id, url, product_id
                "#,
            )
            .bind(url)
            .bind(product_id.get())
            .fetch_one(&mut **tx)
            .await?;
            images.push(row.into_image());
        }
        Ok(images)
    }
}

impl CatalogRepository for PgCatalogRepository {
    async fn list_products(&self, include_images: bool) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, title, description, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut images_by_product: HashMap<i64, Vec<Image>> = HashMap::new();
        if include_images && !rows.is_empty() {
            let image_rows = sqlx::query_as::<_, ImageRow>(
                "SELECT id, url, product_id FROM images ORDER BY product_id, id",
            )
            .fetch_all(&self.pool)
            .await?;

            for row in image_rows {
                images_by_product
                    .entry(row.product_id)
                    .or_default()
                    .push(row.into_image());
            }
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let images = images_by_product.remove(&row.id).unwrap_or_default();
                row.into_product(images)
            })
            .collect())
    }

    async fn create_product(
        &self,
        product: &NewProduct,
        image_urls: &[String],
    ) -> CatalogResult<Product> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (title, description, price)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, price
            "#,
        )
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .fetch_one(&mut *tx)
        .await?;

        let product_id = ProductId::from_i64(row.id);
        let images = Self::insert_images(&mut tx, product_id, image_urls).await?;

        tx.commit().await?;

        Ok(row.into_product(images))
    }

    async fn product_exists(&self, product_id: ProductId) -> CatalogResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(product_id.get())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn attach_images(
        &self,
        product_id: ProductId,
        image_urls: &[String],
    ) -> CatalogResult<Vec<Image>> {
        let mut tx = self.pool.begin().await?;

        // Lock the row so a concurrent delete cannot slip in between
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM products WHERE id = $1 FOR UPDATE")
            .bind(product_id.get())
            .fetch_optional(&mut *tx)
            .await?;
        if found.is_none() {
            return Err(CatalogError::ProductNotFound(product_id));
        }

        let images = Self::insert_images(&mut tx, product_id, image_urls).await?;
        tx.commit().await?;

        Ok(images)
    }

    async fn delete_images_for_product(&self, product_id: ProductId) -> CatalogResult<u64> {
        let deleted = sqlx::query("DELETE FROM images WHERE product_id = $1")
            .bind(product_id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(deleted)
    }

    async fn delete_product(&self, product_id: ProductId) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id.get())
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.rows_affected() > 0),
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some(FK_VIOLATION) => {
                Err(CatalogError::ProductHasImages(product_id))
            }
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    title: String,
    description: String,
    price: f64,
}

impl ProductRow {
    fn into_product(self, images: Vec<Image>) -> Product {
        Product {
            id: ProductId::from_i64(self.id),
            title: self.title,
            description: self.description,
            price: self.price,
            images,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ImageRow {
    id: i64,
    url: String,
    product_id: i64,
}

impl ImageRow {
    fn into_image(self) -> Image {
        Image {
            id: ImageId::from_i64(self.id),
            url: self.url,
            product_id: ProductId::from_i64(self.product_id),
        }
    }
}
