//! Uploaded Files
//!
//! File parts received from a multipart form and the blob paths they are
//! stored under.

use uuid::Uuid;

/// Longest file name kept in a blob path
const MAX_FILE_NAME_LEN: usize = 100;

/// A file part from a multipart form
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            content_type: content_type.map(str::to_string),
            bytes,
        }
    }

    /// What a browser sends for an `<input type=file>` left empty
    pub fn is_empty_input(&self) -> bool {
        self.bytes.is_empty() && self.file_name.as_deref().is_none_or(str::is_empty)
    }

    pub fn content_type_or_default(&self) -> &str {
        self.content_type
            .as_deref()
            .unwrap_or("application/octet-stream")
    }
}

impl std::fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Reduce a client-supplied name to `[A-Za-z0-9._-]`, never starting with a dot
pub fn sanitize_file_name(name: &str) -> String {
    // Browsers on Windows may send the full path
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = cleaned.trim_start_matches('.');
    let truncated: String = trimmed.chars().take(MAX_FILE_NAME_LEN).collect();

    if truncated.is_empty() {
        "image".to_string()
    } else {
        truncated
    }
}

/// `<prefix>/<uuid>-<sanitized name>`; unique per call
pub fn blob_path(prefix: &str, file_name: Option<&str>) -> String {
    let name = sanitize_file_name(file_name.unwrap_or_default());
    format!("{}/{}-{}", prefix.trim_matches('/'), Uuid::new_v4(), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("photo.png"), "photo.png");
        assert_eq!(sanitize_file_name("my photo (1).jpg"), "my_photo__1_.jpg");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\cat.gif"), "cat.gif");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
        assert_eq!(sanitize_file_name(""), "image");
        assert_eq!(sanitize_file_name(".."), "image");
        assert_eq!(sanitize_file_name("日本.png"), "__.png");
    }

    #[test]
    fn test_sanitize_truncates() {
        let long = "a".repeat(300);
        assert_eq!(sanitize_file_name(&long).len(), MAX_FILE_NAME_LEN);
    }

    #[test]
    fn test_blob_path_is_unique_and_prefixed() {
        let a = blob_path("products", Some("a.png"));
        let b = blob_path("products", Some("a.png"));
        assert!(a.starts_with("products/"));
        assert!(a.ends_with("-a.png"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_input_detection() {
        let empty = UploadedFile {
            file_name: Some(String::new()),
            content_type: Some("application/octet-stream".to_string()),
            bytes: Vec::new(),
        };
        assert!(empty.is_empty_input());

        let unnamed = UploadedFile {
            file_name: None,
            content_type: None,
            bytes: Vec::new(),
        };
        assert!(unnamed.is_empty_input());

        // A named zero-byte file is still a real upload
        assert!(!UploadedFile::new("empty.txt", None, Vec::new()).is_empty_input());
        assert!(!UploadedFile::new("a.png", None, vec![1]).is_empty_input());
    }

    #[test]
    fn test_debug_omits_bytes() {
        let file = UploadedFile::new("a.png", Some("image/png"), vec![0xde, 0xad]);
        let debug = format!("{file:?}");
        assert!(debug.contains("len: 2"));
        assert!(!debug.contains("222"));
    }
}
