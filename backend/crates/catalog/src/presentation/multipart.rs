//! Multipart Form Parsing
//!
//! Turns the admin form bodies into domain inputs. Unknown fields are
//! drained and ignored.

use axum::extract::Multipart;
use axum::extract::multipart::Field;

use crate::domain::mutation::MutationForm;
use crate::domain::upload::UploadedFile;
use crate::error::CatalogResult;

/// File field name used by both admin forms
pub const IMAGES_FIELD: &str = "images";

async fn read_file(field: Field<'_>) -> CatalogResult<UploadedFile> {
    let file_name = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);
    let bytes = field.bytes().await?.to_vec();

    Ok(UploadedFile {
        file_name,
        content_type,
        bytes,
    })
}

/// Parse `POST /admin`
pub async fn parse_mutation_form(mut multipart: Multipart) -> CatalogResult<MutationForm> {
    let mut form = MutationForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => form.title = Some(field.text().await?),
            "price" => form.price = Some(field.text().await?),
            "description" => form.description = Some(field.text().await?),
            "deleteId" => form.delete_ids.push(field.text().await?),
            "singleDeleteId" => form.single_delete_id = Some(field.text().await?),
            IMAGES_FIELD => form.images.push(read_file(field).await?),
            other => {
                tracing::debug!(field = %other, "Ignoring unknown form field");
                field.bytes().await?;
            }
        }
    }

    Ok(form)
}

/// Parse `POST /admin/products/{id}/images`
pub async fn parse_image_files(mut multipart: Multipart) -> CatalogResult<Vec<UploadedFile>> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(IMAGES_FIELD) {
            files.push(read_file(field).await?);
        } else {
            field.bytes().await?;
        }
    }

    Ok(files)
}
