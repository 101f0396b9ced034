//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::ProductId;
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Blob storage result type alias
pub type BlobResult<T> = Result<T, BlobError>;

/// Blob storage errors
#[derive(Debug, Error)]
pub enum BlobError {
    /// Path is empty, absolute or escapes the store
    #[error("Invalid blob path: {0}")]
    InvalidPath(String),

    /// Backend cannot honour the requested access level
    #[error("Unsupported blob access: {0}")]
    UnsupportedAccess(&'static str),

    /// Local filesystem error
    #[error("Blob I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Upload request did not complete
    #[error("Blob upload request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upload endpoint answered with a non-success status
    #[error("Blob upload rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Product not found
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    /// Product id in the path is not an integer
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    /// Product still referenced by image rows
    #[error("Product {0} still has images attached")]
    ProductHasImages(ProductId),

    /// Malformed multipart body
    #[error("Malformed form data: {0}")]
    Multipart(String),

    /// Request body over the upload limit
    #[error("Upload exceeds the size limit")]
    PayloadTooLarge,

    /// Blob storage error
    #[error(transparent)]
    Blob(#[from] BlobError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::ProductNotFound(_) => ErrorKind::NotFound,
            CatalogError::InvalidProductId(_) | CatalogError::Multipart(_) => {
                ErrorKind::BadRequest
            }
            CatalogError::ProductHasImages(_) => ErrorKind::Conflict,
            CatalogError::PayloadTooLarge => ErrorKind::PayloadTooLarge,
            CatalogError::Blob(_) => ErrorKind::BadGateway,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            CatalogError::Blob(_) => AppError::bad_gateway("Image storage failed")
                .with_action("Retry the upload"),
            CatalogError::Internal(_) => AppError::internal("Internal error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::Blob(e) => {
                tracing::warn!(error = %e, "Blob storage error");
            }
            CatalogError::ProductHasImages(id) => {
                tracing::warn!(product_id = %id, "Product delete blocked by image rows");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // kernel maps driver errors (pool exhaustion, FK codes) itself
            CatalogError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for CatalogError {
    fn from(err: AppError) -> Self {
        CatalogError::Internal(err.to_string())
    }
}

impl From<axum::extract::multipart::MultipartError> for CatalogError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            CatalogError::PayloadTooLarge
        } else {
            CatalogError::Multipart(err.body_text())
        }
    }
}
