//! Gemini Provider - `VisionModel` backed by Google's `generateContent` API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_base_url("https://generativelanguage.googleapis.com")
//!     .with_timeout(Duration::from_secs(60));
//!
//! let provider = GeminiProvider::new(config)?;
//! let text = provider.generate("gemini-1.5-flash", &request).await?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::response::{check_status, send_error};
use crate::ports::{AIError, VisionModel, VisionRequest};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
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
}

pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }
}

fn to_gemini_request(request: &VisionRequest) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: "user".to_string(),
            parts: vec![
                GeminiPart::Text {
                    text: request.instruction.clone(),
                },
                GeminiPart::InlineData {
                    inline_data: InlineData {
                        mime_type: VisionRequest::IMAGE_MEDIA_TYPE.to_string(),
                        data: request.image_base64.clone(),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            temperature: 0.2,
        },
    }
}

/// Concatenates the text parts of the first candidate.
fn extract_text(response: GeminiResponse) -> Result<String, AIError> {
    let candidate = response.candidates.into_iter().next().ok_or_else(|| {
        match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => AIError::content_filtered(reason),
            None => AIError::EmptyResponse,
        }
    })?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return match candidate.finish_reason.as_deref() {
            Some("SAFETY") => Err(AIError::content_filtered("SAFETY")),
            _ => Err(AIError::EmptyResponse),
        };
    }
    Ok(text)
}

#[async_trait]
impl VisionModel for GeminiProvider {
    async fn generate(&self, model: &str, request: &VisionRequest) -> Result<String, AIError> {
        let response = self
            .client
            .post(self.generate_url(model))
            .header("x-goog-api-key", self.config.api_key.expose_secret())
            .json(&to_gemini_request(request))
            .send()
            .await
            .map_err(|e| send_error(e, self.config.timeout))?;

        let response = check_status(response, model).await?;
        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        extract_text(body)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_instruction_and_inline_png() {
        let request = VisionRequest::new("critique this", "aGVsbG8=");
        let body = serde_json::to_value(to_gemini_request(&request)).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "critique this");
        assert_eq!(body["contents"][0]["parts"][1]["inline_data"]["mime_type"], "image/png");
        assert_eq!(body["contents"][0]["parts"][1]["inline_data"]["data"], "aGVsbG8=");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn url_includes_model() {
        let provider = GeminiProvider::new(
            GeminiConfig::new(Secret::new("k".into())).with_base_url("http://localhost:9999/"),
        )
        .unwrap();
        assert_eq!(
            provider.generate_url("gemini-1.5-pro"),
            "http://localhost:9999/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn extracts_joined_candidate_text() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } }]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn blocked_prompt_is_content_filtered() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();
        assert!(matches!(extract_text(response), Err(AIError::ContentFiltered { .. })));

        let empty: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(extract_text(empty), Err(AIError::EmptyResponse));
    }
}
