//! Page capture port - a headless browser session per analysis.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analyzer::PageMetadata;

/// Screenshot and metadata of a loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCapture {
    pub metadata: PageMetadata,
    /// Base64-encoded PNG of the viewport.
    pub screenshot_base64: String,
}

/// Loads a URL in an isolated browser, captures it and tears the browser down.
///
/// # Contract
///
/// Implementations must release the browser before returning, on success and
/// on failure. Metadata extraction is best-effort: failures yield empty strings.
#[async_trait]
pub trait PageCapturer: Send + Sync {
    async fn capture(&self, url: &str) -> Result<PageCapture, CaptureError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("navigation timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("screenshot failed: {0}")]
    Screenshot(String),
}
