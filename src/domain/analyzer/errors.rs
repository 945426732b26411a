use thiserror::Error;

/// Failures of a single website analysis.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("url is required")]
    MissingUrl,

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("analyzer is not configured: {0}")]
    Disabled(String),

    #[error("page capture failed: {0}")]
    Capture(String),

    #[error("model {model} failed: {message}")]
    Model { model: String, message: String },

    #[error("model output is not valid analysis JSON: {0}")]
    Parse(String),

    #[error("no models configured")]
    NoModels,
}

impl AnalysisError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn model(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Model {
            model: model.into(),
            message: message.into(),
        }
    }
}
