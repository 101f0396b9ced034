//! Mutate Catalog Use Case
//!
//! Applies one admin form submission: optional create, bulk delete and
//! single delete, in that order. Store failures are reported in the outcome
//! instead of failing the request.

use std::sync::Arc;

use futures::future::join_all;
use kernel::id::ProductId;

use crate::application::attach_images::ImageAttachmentService;
use crate::application::config::CatalogConfig;
use crate::domain::blob::BlobStorage;
use crate::domain::mutation::{DeleteResult, DeleteStatus, MutationForm, MutationOutcome};
use crate::domain::repository::CatalogRepository;

/// Mutate catalog use case
pub struct MutateCatalogUseCase<R, B>
where
    R: CatalogRepository,
    B: BlobStorage,
{
    repo: Arc<R>,
    images: ImageAttachmentService<R, B>,
}

impl<R, B> MutateCatalogUseCase<R, B>
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

    pub async fn execute(&self, form: MutationForm) -> MutationOutcome {
        let mut success = true;
        let mut added_product_id = None;
        let mut image_upload_failures = None;

        if let Some(new_product) = form.new_product() {
            let batch = self.images.store_all(form.uploaded_images()).await;
            if batch.failures > 0 {
                success = false;
            }
            image_upload_failures = Some(batch.failures);

            match self.repo.create_product(&new_product, &batch.urls).await {
                Ok(product) => {
                    tracing::info!(
                        product_id = %product.id,
                        images = product.images.len(),
                        "Product created"
                    );
                    added_product_id = Some(product.id);
                }
                Err(e) => {
                    e.log();
                    if !batch.urls.is_empty() {
                        tracing::warn!(count = batch.urls.len(), "Uploaded images left unreferenced");
                    }
                    success = false;
                }
            }
        } else if form.uploaded_images().next().is_some() {
            tracing::debug!("Title or description missing; images not uploaded");
        }

        let mut delete_results = Vec::new();

        let deleted_ids = if form.delete_ids.is_empty() {
            None
        } else {
            let results = join_all(form.requested_deletes().map(|raw| self.delete_one(raw))).await;
            let confirmed: Vec<ProductId> = results
                .iter()
                .filter(|(_, result)| result.status == DeleteStatus::Deleted)
                .filter_map(|(id, _)| *id)
                .collect();

            tracing::info!(
                requested = results.len(),
                deleted = confirmed.len(),
                "Bulk delete finished"
            );
            delete_results.extend(results.into_iter().map(|(_, result)| result));
            Some(confirmed)
        };

        let mut single_deleted_id = None;
        if let Some(raw) = form.requested_single_delete() {
            let (id, result) = self.delete_one(raw).await;
            if result.status == DeleteStatus::Deleted {
                single_deleted_id = id;
            }
            delete_results.push(result);
        }

        if delete_results
            .iter()
            .any(|r| r.status != DeleteStatus::Deleted)
        {
            success = false;
        }

        MutationOutcome {
            success,
            added_product_id,
            image_upload_failures,
            deleted_ids,
            single_deleted_id,
            delete_results,
        }
    }

    /// Images first, then the product row
    async fn delete_one(&self, raw: &str) -> (Option<ProductId>, DeleteResult) {
        let report = |status| DeleteResult {
            id: raw.trim().to_string(),
            status,
        };

        let Ok(product_id) = raw.parse::<ProductId>() else {
            tracing::debug!(raw = %raw, "Ignoring non-numeric delete id");
            return (None, report(DeleteStatus::InvalidId));
        };

        let outcome = async {
            let images = self.repo.delete_images_for_product(product_id).await?;
            let deleted = self.repo.delete_product(product_id).await?;
            Ok::<_, crate::error::CatalogError>((images, deleted))
        }
        .await;

        let status = match outcome {
            Ok((images, true)) => {
                tracing::info!(product_id = %product_id, images, "Product deleted");
                DeleteStatus::Deleted
            }
            Ok((_, false)) => {
                tracing::debug!(product_id = %product_id, "Product to delete not found");
                DeleteStatus::NotFound
            }
            Err(e) => {
                e.log();
                DeleteStatus::Failed
            }
        };

        (Some(product_id), report(status))
    }
}
