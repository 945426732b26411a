//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::split_list;

/// Vision model used by the website analyzer.
///
/// Without an API key the analyzer is disabled; the rest of the site runs.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which hosted API to call
    #[serde(default)]
    pub provider: AiProvider,

    /// Provider API key
    pub api_key: Option<Secret<String>>,

    /// Ordered model fallback list (comma-separated)
    pub models: Option<String>,

    /// Override for the provider base URL
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    Anthropic,
}

impl AiProvider {
    pub fn default_models(&self) -> &'static [&'static str] {
        match self {
            AiProvider::Gemini => &["gemini-2.0-flash", "gemini-1.5-flash", "gemini-1.5-pro"],
            AiProvider::Anthropic => &["claude-3-5-sonnet-latest", "claude-3-5-haiku-latest"],
        }
    }
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check whether an API key is configured
    pub fn is_enabled(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Models to try, in order. Falls back to the provider's defaults.
    pub fn model_list(&self) -> Vec<String> {
        let configured = self.models.as_deref().map(split_list).unwrap_or_default();
        if configured.is_empty() {
            self.provider.default_models().iter().map(|m| m.to_string()).collect()
        } else {
            configured
        }
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(base_url) = &self.base_url {
            if url::Url::parse(base_url).is_err() {
                return Err(ValidationError::InvalidAiBaseUrl);
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.is_enabled() && self.model_list().is_empty() {
            return Err(ValidationError::NoModelsConfigured);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            api_key: None,
            models: None,
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProvider::Gemini);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(!config.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_key_is_disabled() {
        let config = AiConfig {
            api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_model_list_from_setting() {
        let config = AiConfig {
            models: Some("model-a, model-b".to_string()),
            ..Default::default()
        };
        assert_eq!(config.model_list(), vec!["model-a", "model-b"]);
    }

    #[test]
    fn test_model_list_defaults_per_provider() {
        let config = AiConfig {
            provider: AiProvider::Anthropic,
            models: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.model_list().len(), 2);
        assert!(config.model_list()[0].starts_with("claude"));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = AiConfig {
            base_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidAiBaseUrl)));
    }
}
