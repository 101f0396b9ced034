//! Blob Storage Backends

pub mod fs;
pub mod http;

pub use fs::FsBlobStorage;
pub use http::HttpBlobStorage;

use crate::domain::blob::{BlobAccess, BlobStorage, StoredBlob};
use crate::error::BlobResult;

/// Backend chosen at startup
#[derive(Debug, Clone)]
pub enum BlobBackend {
    Fs(FsBlobStorage),
    Http(HttpBlobStorage),
}

impl BlobBackend {
    pub fn name(&self) -> &'static str {
        match self {
            BlobBackend::Fs(_) => "local",
            BlobBackend::Http(_) => "http",
        }
    }
}

impl BlobStorage for BlobBackend {
    async fn put(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        access: BlobAccess,
    ) -> BlobResult<StoredBlob> {
        match self {
            BlobBackend::Fs(storage) => storage.put(path, bytes, content_type, access).await,
            BlobBackend::Http(storage) => storage.put(path, bytes, content_type, access).await,
        }
    }
}
