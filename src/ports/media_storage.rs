//! Media storage port for images uploaded from the admin editor.

use async_trait::async_trait;
use thiserror::Error;

/// A stored upload and the public URL it is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    pub file_name: String,
    pub url: String,
    pub size_bytes: u64,
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Stores `bytes` under a generated name derived from `original_name`.
    async fn store(&self, original_name: &str, content_type: &str, bytes: &[u8]) -> Result<StoredMedia, MediaError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("unsupported media type: {0}")]
    UnsupportedType(String),

    #[error("file too large: {size_bytes} bytes exceeds limit of {max_bytes} bytes")]
    TooLarge { size_bytes: u64, max_bytes: u64 },

    #[error("empty upload")]
    Empty,

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MediaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
