//! AnalyzeWebsiteHandler - Screenshot a page and have a vision model critique it.
//!
//! Flow: validate url -> capture (browser torn down inside the capturer) ->
//! build instruction -> walk the model list until one returns parseable
//! JSON. The last failure is surfaced when every model fails.

use std::sync::Arc;

use crate::domain::analyzer::{build_instruction, AnalysisError, AnalysisResult, AnalysisTarget};
use crate::ports::{PageCapturer, VisionModel, VisionRequest};

/// Handler settings taken from configuration.
#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    /// Model ids, tried in order.
    pub models: Vec<String>,
    /// Hosts that get the e-commerce criteria.
    pub ecommerce_domains: Vec<String>,
}

pub struct AnalyzeWebsiteHandler {
    capturer: Arc<dyn PageCapturer>,
    model: Option<Arc<dyn VisionModel>>,
    settings: AnalyzerSettings,
}

impl AnalyzeWebsiteHandler {
    /// `model` is `None` when no provider key is configured; requests then fail as disabled.
    pub fn new(capturer: Arc<dyn PageCapturer>, model: Option<Arc<dyn VisionModel>>, settings: AnalyzerSettings) -> Self {
        Self {
            capturer,
            model,
            settings,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.model.is_some() && !self.settings.models.is_empty()
    }

    pub async fn handle(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let target = AnalysisTarget::parse(url)?;
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| AnalysisError::Disabled("no AI provider API key configured".into()))?;
        if self.settings.models.is_empty() {
            return Err(AnalysisError::NoModels);
        }

        let capture = self
            .capturer
            .capture(target.as_str())
            .await
            .map_err(|e| AnalysisError::Capture(e.to_string()))?;

        let ecommerce = target.is_ecommerce(&self.settings.ecommerce_domains);
        let request = VisionRequest::new(
            build_instruction(&target, &capture.metadata, ecommerce),
            capture.screenshot_base64,
        );

        let mut last_error = AnalysisError::NoModels;
        for model_id in &self.settings.models {
            match model.generate(model_id, &request).await {
                Ok(text) => match AnalysisResult::parse(&text) {
                    Ok(result) => {
                        tracing::info!(
                            provider = model.provider_name(),
                            model = %model_id,
                            url = %target.as_str(),
                            ecommerce,
                            "analysis succeeded"
                        );
                        return Ok(result);
                    }
                    Err(e) => {
                        tracing::warn!(model = %model_id, error = %e, "model output did not parse");
                        last_error = e;
                    }
                },
                Err(e) => {
                    tracing::warn!(provider = model.provider_name(), model = %model_id, error = %e, "model call failed");
                    last_error = AnalysisError::model(model_id.as_str(), e.to_string());
                }
            }
        }

        Err(last_error)
    }
}
