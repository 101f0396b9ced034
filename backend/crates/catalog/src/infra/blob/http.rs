//! HTTP Blob Storage
//!
//! Uploads to a hosted blob service: `PUT {api_url}/{path}` with a bearer
//! token, answered by `{"url": ...}`.

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

use crate::domain::blob::{BlobAccess, BlobStorage, StoredBlob};
use crate::error::{BlobError, BlobResult};

/// Upload response body
#[derive(Debug, Deserialize)]
struct PutResponse {
    url: String,
}

/// HTTP-backed blob storage
#[derive(Clone)]
pub struct HttpBlobStorage {
    client: Client,
    api_url: String,
    token: String,
}

impl HttpBlobStorage {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl std::fmt::Debug for HttpBlobStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBlobStorage")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl BlobStorage for HttpBlobStorage {
    async fn put(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        access: BlobAccess,
    ) -> BlobResult<StoredBlob> {
        if path.trim_matches('/').is_empty() {
            return Err(BlobError::InvalidPath(path.to_string()));
        }

        let size = bytes.len();
        let response = self
            .client
            .put(self.endpoint(path))
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, content_type)
            .header("x-access", access.as_str())
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BlobError::Rejected { status, body });
        }

        let body: PutResponse = response.json().await?;

        tracing::debug!(path = %path, size, "Blob uploaded");

        Ok(StoredBlob {
            path: path.to_string(),
            url: body.url,
        })
    }
}
