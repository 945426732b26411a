//! Anthropic Provider - `VisionModel` backed by the Messages API.
//!
//! The screenshot is sent as a base64 image block followed by the
//! instruction text. The model id is chosen per call.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicConfig::new(api_key).with_max_tokens(2048);
//! let provider = AnthropicProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::response::{check_status, send_error};
use crate::ports::{AIError, VisionModel, VisionRequest};

pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Configuration for the Anthropic provider.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    api_key: Secret<String>,
    pub base_url: String,
    pub timeout: Duration,
    pub max_tokens: u32,
}

impl AnthropicConfig {
    pub fn new(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            base_url: ANTHROPIC_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            max_tokens: 2048,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    pub fn new(config: AnthropicConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    fn to_anthropic_request(&self, model: &str, request: &VisionRequest) -> AnthropicRequest {
        AnthropicRequest {
            model: model.to_string(),
            max_tokens: self.config.max_tokens,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Image {
                        source: ImageSource {
                            source_type: "base64".to_string(),
                            media_type: VisionRequest::IMAGE_MEDIA_TYPE.to_string(),
                            data: request.image_base64.clone(),
                        },
                    },
                    ContentPart::Text {
                        text: request.instruction.clone(),
                    },
                ],
            }],
        }
    }
}

fn extract_text(response: AnthropicResponse) -> Result<String, AIError> {
    let text = response
        .content
        .into_iter()
        .filter(|block| block.block_type == "text")
        .filter_map(|block| block.text)
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        return Err(AIError::EmptyResponse);
    }
    Ok(text)
}

#[async_trait]
impl VisionModel for AnthropicProvider {
    async fn generate(&self, model: &str, request: &VisionRequest) -> Result<String, AIError> {
        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&self.to_anthropic_request(model, request))
            .send()
            .await
            .map_err(|e| send_error(e, self.config.timeout))?;

        let response = check_status(response, model).await?;
        let body: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        extract_text(body)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}

// ----- Anthropic API Types -----

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentPart {
    Image { source: ImageSource },
    Text { text: String },
}

#[derive(Debug, Serialize)]
struct ImageSource {
    #[serde(rename = "type")]
    source_type: String,
    media_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}
