//! POST /api/analyze - screenshot a site and return the model's critique.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::application::handlers::AnalyzeWebsiteHandler;
use crate::domain::analyzer::AnalysisResult;

use super::super::error::{ApiError, ApiResult};

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

pub async fn analyze_website(
    State(analyzer): State<Arc<AnalyzeWebsiteHandler>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let url = request.url.unwrap_or_default();

    let result = analyzer.handle(&url).await?;
    Ok(Json(result))
}
