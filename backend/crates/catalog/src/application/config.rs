//! Application Configuration
//!
//! Configuration for the Catalog application layer.

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Blob path prefix for product images
    pub image_path_prefix: String,
    /// Largest accepted multipart body in bytes
    pub max_upload_bytes: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            image_path_prefix: "products".to_string(),
            max_upload_bytes: 20 * 1024 * 1024, // 20 MiB
        }
    }
}

impl CatalogConfig {
    /// Create config for development
    pub fn development() -> Self {
        Self::default()
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}
