//! Infrastructure Layer
//!
//! Repository and blob storage implementations.

pub mod blob;
pub mod memory;
pub mod postgres;

pub use blob::{BlobBackend, FsBlobStorage, HttpBlobStorage};
pub use memory::InMemoryCatalogRepository;
pub use postgres::PgCatalogRepository;
