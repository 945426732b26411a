//! Scripted vision model for tests.
//!
//! Responses are configured per model id; every call is recorded so tests
//! can assert which models were tried and in what order.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{AIError, VisionModel, VisionRequest};

#[derive(Debug, Default)]
pub struct MockVisionModel {
    responses: HashMap<String, Result<String, AIError>>,
    calls: Mutex<Vec<String>>,
}

impl MockVisionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful text response for `model`.
    pub fn with_response(mut self, model: impl Into<String>, text: impl Into<String>) -> Self {
        self.responses.insert(model.into(), Ok(text.into()));
        self
    }

    /// Scripts a failure for `model`.
    pub fn with_error(mut self, model: impl Into<String>, error: AIError) -> Self {
        self.responses.insert(model.into(), Err(error));
        self
    }

    /// Model ids passed to `generate`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl VisionModel for MockVisionModel {
    async fn generate(&self, model: &str, _request: &VisionRequest) -> Result<String, AIError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(model.to_string());
        }
        self.responses
            .get(model)
            .cloned()
            .unwrap_or_else(|| Err(AIError::ModelNotFound(model.to_string())))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
