//! Image Attachment
//!
//! Uploads image files to blob storage and records them against a product.

use std::sync::Arc;

use kernel::id::ProductId;
use serde::Serialize;

use crate::application::config::CatalogConfig;
use crate::domain::blob::{BlobAccess, BlobStorage};
use crate::domain::entities::Image;
use crate::domain::repository::CatalogRepository;
use crate::domain::upload::{UploadedFile, blob_path};
use crate::error::{BlobResult, CatalogError, CatalogResult};

/// Public location of an uploaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub url: String,
}

/// Result of uploading several files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadBatch {
    /// URLs of the files that were stored, in submission order
    pub urls: Vec<String>,
    /// Files that failed to upload
    pub failures: usize,
}

/// Image attachment service
pub struct ImageAttachmentService<R, B>
where
    R: CatalogRepository,
    B: BlobStorage,
{
    repo: Arc<R>,
    blobs: Arc<B>,
    config: Arc<CatalogConfig>,
}

impl<R, B> ImageAttachmentService<R, B>
where
    R: CatalogRepository,
    B: BlobStorage,
{
    pub fn new(repo: Arc<R>, blobs: Arc<B>, config: Arc<CatalogConfig>) -> Self {
        Self {
            repo,
            blobs,
            config,
        }
    }

    /// Upload one file with public access under a fresh unique path
    pub async fn store(&self, file: &UploadedFile) -> BlobResult<StoredImage> {
        let path = blob_path(&self.config.image_path_prefix, file.file_name.as_deref());
        let stored = self
            .blobs
            .put(
                &path,
                file.bytes.clone(),
                file.content_type_or_default(),
                BlobAccess::Public,
            )
            .await?;

        tracing::debug!(path = %stored.path, size = file.bytes.len(), "Image stored");
        Ok(StoredImage { url: stored.url })
    }

    /// Upload files one after another. A failed file is counted and skipped;
    /// empty file inputs are ignored.
    pub async fn store_all<'a, I>(&self, files: I) -> UploadBatch
    where
        I: IntoIterator<Item = &'a UploadedFile>,
    {
        let mut batch = UploadBatch::default();

        for file in files.into_iter().filter(|f| !f.is_empty_input()) {
            match self.store(file).await {
                Ok(stored) => batch.urls.push(stored.url),
                Err(e) => {
                    tracing::warn!(
                        file_name = ?file.file_name,
                        error = %e,
                        "Image upload failed"
                    );
                    batch.failures += 1;
                }
            }
        }

        batch
    }

    /// Record already-uploaded URLs as images of `product_id`
    pub async fn attach(&self, product_id: ProductId, urls: &[String]) -> CatalogResult<Vec<Image>> {
        let images = self.repo.attach_images(product_id, urls).await?;
        tracing::info!(product_id = %product_id, count = images.len(), "Images attached");
        Ok(images)
    }
}

/// Attach outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachImagesOutput {
    pub product_id: ProductId,
    pub attached_images: Vec<Image>,
    pub image_upload_failures: usize,
}

/// Attach images use case (upload, then record)
pub struct AttachImagesUseCase<R, B>
where
    R: CatalogRepository,
    B: BlobStorage,
{
    repo: Arc<R>,
    images: ImageAttachmentService<R, B>,
}

impl<R, B> AttachImagesUseCase<R, B>
where
    R: CatalogRepository,
    B: BlobStorage,
{
    pub fn new(repo: Arc<R>, blobs: Arc<B>, config: Arc<CatalogConfig>) -> Self {
        Self {
            images: ImageAttachmentService::new(repo.clone(), blobs, config),
            repo,
        }
    }

    pub async fn execute(
        &self,
        product_id: ProductId,
        files: &[UploadedFile],
    ) -> CatalogResult<AttachImagesOutput> {
        // Checked before uploading so a bad id leaves no blobs behind
        if !self.repo.product_exists(product_id).await? {
            return Err(CatalogError::ProductNotFound(product_id));
        }

        let batch = self.images.store_all(files).await;
        let attached_images = if batch.urls.is_empty() {
            Vec::new()
        } else {
            self.images.attach(product_id, &batch.urls).await?
        };

        Ok(AttachImagesOutput {
            product_id,
            attached_images,
            image_upload_failures: batch.failures,
        })
    }
}
