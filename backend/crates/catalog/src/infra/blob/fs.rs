//! Filesystem Blob Storage
//!
//! Writes blobs under a base directory. Files are served elsewhere (a static
//! file route) at `public_base_url`.

use std::path::{Component, Path, PathBuf};

use tokio::fs;

use crate::domain::blob::{BlobAccess, BlobStorage, StoredBlob};
use crate::error::{BlobError, BlobResult};

/// Filesystem-backed blob storage
#[derive(Debug, Clone)]
pub struct FsBlobStorage {
    base_dir: PathBuf,
    public_base_url: String,
}

impl FsBlobStorage {
    /// Create the base directory if needed
    pub async fn new(base_dir: PathBuf, public_base_url: impl Into<String>) -> BlobResult<Self> {
        fs::create_dir_all(&base_dir).await?;

        tracing::info!(path = %base_dir.display(), "Blob directory ready");

        Ok(Self {
            base_dir,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a relative blob path inside the base directory.
    ///
    /// Only plain components are allowed: no `..`, no root, no drive prefix.
    fn resolve(&self, path: &str) -> BlobResult<PathBuf> {
        let relative = Path::new(path);
        let mut resolved = self.base_dir.clone();
        let mut depth = 0;

        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    resolved.push(part);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(BlobError::InvalidPath(path.to_string()));
                }
            }
        }

        if depth == 0 || path.contains('\\') {
            return Err(BlobError::InvalidPath(path.to_string()));
        }

        Ok(resolved)
    }
}

impl BlobStorage for FsBlobStorage {
    async fn put(
        &self,
        path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
        access: BlobAccess,
    ) -> BlobResult<StoredBlob> {
        // Everything under the base directory is publicly served
        if access != BlobAccess::Public {
            return Err(BlobError::UnsupportedAccess(access.as_str()));
        }

        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }

        let size = bytes.len();
        fs::write(&target, bytes).await?;

        tracing::debug!(path = %path, size, "Blob written");

        Ok(StoredBlob {
            path: path.to_string(),
            url: format!("{}/{}", self.public_base_url, path.trim_start_matches("./")),
        })
    }
}
