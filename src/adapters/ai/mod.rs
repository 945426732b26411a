//! AI adapters - `VisionModel` implementations.
//!
//! - `GeminiProvider` - Google Gemini `generateContent`
//! - `AnthropicProvider` - Anthropic Messages API with image blocks
//! - `MockVisionModel` - Scripted responses for tests

mod anthropic_provider;
mod gemini_provider;
mod mock_provider;
mod response;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider, ANTHROPIC_BASE_URL};
pub use gemini_provider::{GeminiConfig, GeminiProvider, GEMINI_BASE_URL};
pub use mock_provider::MockVisionModel;
