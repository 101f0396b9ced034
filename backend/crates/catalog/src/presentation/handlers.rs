//! HTTP Handlers

use axum::Json;
use axum::extract::{Multipart, Path, State};
use std::sync::Arc;

use kernel::id::ProductId;

use crate::application::config::CatalogConfig;
use crate::application::{
    AttachImagesOutput, AttachImagesUseCase, ListProductsUseCase, MutateCatalogUseCase,
};
use crate::domain::blob::BlobStorage;
use crate::domain::entities::Product;
use crate::domain::mutation::MutationOutcome;
use crate::domain::repository::CatalogRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::AdminCatalogResponse;
use crate::presentation::multipart::{parse_image_files, parse_mutation_form};

/// Shared state for catalog handlers
pub struct CatalogAppState<R, B>
where
    R: CatalogRepository + Send + Sync + 'static,
    B: BlobStorage + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub blobs: Arc<B>,
    pub config: Arc<CatalogConfig>,
}

// Manual impl: only the Arcs are cloned
impl<R, B> Clone for CatalogAppState<R, B>
where
    R: CatalogRepository + Send + Sync + 'static,
    B: BlobStorage + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            blobs: self.blobs.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Public listing
// ============================================================================

/// GET /products
pub async fn list_products<R, B>(
    State(state): State<CatalogAppState<R, B>>,
) -> CatalogResult<Json<Vec<Product>>>
where
    R: CatalogRepository + Send + Sync + 'static,
    B: BlobStorage + Send + Sync + 'static,
{
    let use_case = ListProductsUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute(true).await?))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /admin
pub async fn admin_catalog<R, B>(
    State(state): State<CatalogAppState<R, B>>,
) -> CatalogResult<Json<AdminCatalogResponse>>
where
    R: CatalogRepository + Send + Sync + 'static,
    B: BlobStorage + Send + Sync + 'static,
{
    let use_case = ListProductsUseCase::new(state.repo.clone());
    let products = use_case.execute(true).await?;
    Ok(Json(AdminCatalogResponse { products }))
}

/// POST /admin
///
/// Only a malformed body fails the request; store failures are reported
/// inside the outcome.
pub async fn mutate_catalog<R, B>(
    State(state): State<CatalogAppState<R, B>>,
    multipart: Multipart,
) -> CatalogResult<Json<MutationOutcome>>
where
    R: CatalogRepository + Send + Sync + 'static,
    B: BlobStorage + Send + Sync + 'static,
{
    let form = parse_mutation_form(multipart).await?;

    let use_case = MutateCatalogUseCase::new(
        state.repo.clone(),
        state.blobs.clone(),
        state.config.clone(),
    );

    Ok(Json(use_case.execute(form).await))
}

/// POST /admin/products/{id}/images
pub async fn attach_images<R, B>(
    State(state): State<CatalogAppState<R, B>>,
    Path(raw_id): Path<String>,
    multipart: Multipart,
) -> CatalogResult<Json<AttachImagesOutput>>
where
    R: CatalogRepository + Send + Sync + 'static,
    B: BlobStorage + Send + Sync + 'static,
{
    let product_id: ProductId = raw_id
        .parse()
        .map_err(|_| CatalogError::InvalidProductId(raw_id.clone()))?;
    let files = parse_image_files(multipart).await?;

    let use_case = AttachImagesUseCase::new(
        state.repo.clone(),
        state.blobs.clone(),
        state.config.clone(),
    );

    Ok(Json(use_case.execute(product_id, &files).await?))
}
