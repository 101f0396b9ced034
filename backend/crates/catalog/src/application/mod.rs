//! Application Layer
//!
//! Use cases and application services.

pub mod attach_images;
pub mod config;
pub mod list_products;
pub mod mutate_catalog;

// Re-exports
pub use attach_images::{
    AttachImagesOutput, AttachImagesUseCase, ImageAttachmentService, StoredImage, UploadBatch,
};
pub use config::CatalogConfig;
pub use list_products::ListProductsUseCase;
pub use mutate_catalog::MutateCatalogUseCase;
