//! Blob Storage
//!
//! Where uploaded image bytes go. The store hands back a public URL that is
//! written to the image row.

use crate::error::BlobResult;

/// Visibility requested for a stored blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobAccess {
    Public,
    Private,
}

impl BlobAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlobAccess::Public => "public",
            BlobAccess::Private => "private",
        }
    }
}

/// A stored blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub path: String,
    pub url: String,
}

/// Blob storage trait
#[trait_variant::make(BlobStorage: Send)]
pub trait LocalBlobStorage {
    /// Store `bytes` at `path`. Each call is a single attempt.
    async fn put(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        access: BlobAccess,
    ) -> BlobResult<StoredBlob>;
}
