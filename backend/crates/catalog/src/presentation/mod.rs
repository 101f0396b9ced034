//! Presentation Layer
//!
//! HTTP handlers, DTOs, multipart parsing and router.

pub mod dto;
pub mod handlers;
pub mod multipart;
pub mod router;

pub use handlers::CatalogAppState;
pub use router::{CatalogRouters, catalog_routers, catalog_routers_generic};
