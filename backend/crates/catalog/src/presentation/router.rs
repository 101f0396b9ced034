//! Catalog Router

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::CatalogConfig;
use crate::domain::blob::BlobStorage;
use crate::domain::repository::CatalogRepository;
use crate::infra::{BlobBackend, PgCatalogRepository};
use crate::presentation::handlers::{self, CatalogAppState};

/// Public and admin halves of the catalog API.
///
/// `admin` carries no authentication of its own; the caller layers the
/// session gate on it.
pub struct CatalogRouters {
    pub public: Router,
    pub admin: Router,
}

/// Create the Catalog routers with PostgreSQL and the configured blob backend
pub fn catalog_routers(
    repo: PgCatalogRepository,
    blobs: BlobBackend,
    config: CatalogConfig,
) -> CatalogRouters {
    catalog_routers_generic(repo, blobs, config)
}

/// Create the Catalog routers for any repository and blob storage
pub fn catalog_routers_generic<R, B>(repo: R, blobs: B, config: CatalogConfig) -> CatalogRouters
where
    R: CatalogRepository + Send + Sync + 'static,
    B: BlobStorage + Send + Sync + 'static,
{
    let max_upload_bytes = config.max_upload_bytes;
    let state = CatalogAppState {
        repo: Arc::new(repo),
        blobs: Arc::new(blobs),
        config: Arc::new(config),
    };

    let public = Router::new()
        .route("/products", get(handlers::list_products::<R, B>))
        .with_state(state.clone());

    let admin = Router::new()
        .route(
            "/admin",
            get(handlers::admin_catalog::<R, B>).post(handlers::mutate_catalog::<R, B>),
        )
        .route(
            "/admin/products/{id}/images",
            post(handlers::attach_images::<R, B>),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state);

    CatalogRouters { public, admin }
}
