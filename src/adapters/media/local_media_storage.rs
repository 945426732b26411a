//! Local filesystem storage for uploaded images.
//!
//! Files land in `{base_path}/{uuid}.{ext}` and are served by the HTTP
//! layer under `url_prefix`. Only image types are accepted.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::ports::{MediaError, MediaStorage, StoredMedia};

/// Accepted content types and the extension stored for each.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/svg+xml", "svg"),
    ("image/avif", "avif"),
];

#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    base_path: PathBuf,
    url_prefix: String,
    max_bytes: u64,
}

impl LocalMediaStorage {
    pub fn new(base_path: impl AsRef<Path>, url_prefix: impl Into<String>, max_bytes: u64) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
            max_bytes,
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn extension_for(content_type: &str) -> Option<&'static str> {
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        IMAGE_TYPES
            .iter()
            .find(|(mime, _)| mime.eq_ignore_ascii_case(essence))
            .map(|(_, ext)| *ext)
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(&self, original_name: &str, content_type: &str, bytes: &[u8]) -> Result<StoredMedia, MediaError> {
        let extension =
            Self::extension_for(content_type).ok_or_else(|| MediaError::UnsupportedType(content_type.to_string()))?;
        if bytes.is_empty() {
            return Err(MediaError::Empty);
        }
        let size_bytes = bytes.len() as u64;
        if size_bytes > self.max_bytes {
            return Err(MediaError::TooLarge {
                size_bytes,
                max_bytes: self.max_bytes,
            });
        }

        fs::create_dir_all(&self.base_path).await?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.base_path.join(&file_name);
        let tmp = self.base_path.join(format!(".{}.tmp", file_name));
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &path).await?;

        tracing::info!(original = %original_name, stored = %file_name, size_bytes, "stored upload");

        Ok(StoredMedia {
            url: format!("{}/{}", self.url_prefix, file_name),
            file_name,
            size_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn stores_image_under_generated_name() {
        let dir = TempDir::new().unwrap();
        let storage = LocalMediaStorage::new(dir.path(), "/uploads/", 1024);

        let stored = storage.store("hero.PNG", "image/png", b"\x89PNG....").await.unwrap();

        assert!(stored.file_name.ends_with(".png"));
        assert_eq!(stored.url, format!("/uploads/{}", stored.file_name));
        assert_eq!(stored.size_bytes, 8);
        assert!(dir.path().join(&stored.file_name).exists());
    }

    #[tokio::test]
    async fn rejects_non_images_and_oversized_files() {
        let dir = TempDir::new().unwrap();
        let storage = LocalMediaStorage::new(dir.path(), "/uploads", 4);

        assert!(matches!(
            storage.store("doc.pdf", "application/pdf", b"%PDF").await,
            Err(MediaError::UnsupportedType(_))
        ));
        assert!(matches!(
            storage.store("big.jpg", "image/jpeg", b"123456").await,
            Err(MediaError::TooLarge { size_bytes: 6, max_bytes: 4 })
        ));
        assert_eq!(storage.store("e.gif", "image/gif", b"").await, Err(MediaError::Empty));
    }

    #[test]
    fn content_type_parameters_are_ignored() {
        assert_eq!(LocalMediaStorage::extension_for("image/JPEG; charset=binary"), Some("jpg"));
        assert_eq!(LocalMediaStorage::extension_for("text/html"), None);
    }
}
