//! Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Products, images, form submissions, repository and blob traits
//! - `application/` - Listing, image attachment and mutation use cases
//! - `infra/` - PostgreSQL / in-memory repositories, filesystem / HTTP blob storage
//! - `presentation/` - HTTP handlers, multipart parsing, routers
//!
//! ## Features
//! - Public product listing with images
//! - Admin create (with image uploads), bulk delete and single delete in one
//!   form submission, each operation reported individually
//! - Adding images to an existing product
//!
//! Admin routes are unauthenticated here; the API binary wraps them in the
//! auth gate.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use error::{BlobError, CatalogError, CatalogResult};
pub use infra::{BlobBackend, FsBlobStorage, HttpBlobStorage, PgCatalogRepository};
pub use presentation::router::{CatalogRouters, catalog_routers};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::mutation::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCatalogRepository as CatalogStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
