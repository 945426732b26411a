//! Vision model port - hosted LLMs that critique a screenshot.
//!
//! The analyzer sends one instruction plus one PNG and expects text back.
//! Model selection is per call so the caller can walk a fallback list
//! against a single provider client.

use async_trait::async_trait;
use thiserror::Error;

/// One screenshot critique request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionRequest {
    pub instruction: String,
    /// Base64-encoded PNG bytes.
    pub image_base64: String,
}

impl VisionRequest {
    pub const IMAGE_MEDIA_TYPE: &'static str = "image/png";

    pub fn new(instruction: impl Into<String>, image_base64: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            image_base64: image_base64.into(),
        }
    }
}

#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Generates text from `model` for the request.
    async fn generate(&self, model: &str, request: &VisionRequest) -> Result<String, AIError>;

    /// Provider name for logs (e.g. "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Errors from AI provider operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AIError {
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("content filtered: {reason}")]
    ContentFiltered { reason: String },

    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The provider answered but produced no text.
    #[error("empty response")]
    EmptyResponse,

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl AIError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn content_filtered(reason: impl Into<String>) -> Self {
        Self::ContentFiltered { reason: reason.into() }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable { message: message.into() }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(AIError::rate_limited(30).to_string(), "rate limited: retry after 30s");
        assert_eq!(
            AIError::ModelNotFound("gemini-x".into()).to_string(),
            "model not found: gemini-x"
        );
        assert_eq!(AIError::unavailable("503").to_string(), "provider unavailable: 503");
    }

    #[test]
    fn vision_model_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn VisionModel>();
    }
}
