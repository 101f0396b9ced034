//! Domain Layer
//!
//! Products, images, form submissions and the persistence/storage seams.

pub mod blob;
pub mod entities;
pub mod mutation;
pub mod repository;
pub mod upload;

// Re-exports
pub use blob::{BlobAccess, BlobStorage, StoredBlob};
pub use entities::{Image, NewProduct, Product};
pub use mutation::{DeleteResult, DeleteStatus, MutationForm, MutationOutcome, coerce_price};
pub use repository::CatalogRepository;
pub use upload::{UploadedFile, blob_path, sanitize_file_name};
