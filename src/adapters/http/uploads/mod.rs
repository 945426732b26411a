//! Image upload from the admin rich-text editor.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub file_name: String,
    pub size_bytes: u64,
}

/// POST /api/admin/uploads - first `file` part of a multipart body.
pub async fn upload_image(State(state): State<AppState>, mut multipart: Multipart) -> ApiResult<Response> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let stored = state.media.store(&original_name, &content_type, &bytes).await?;
        tracing::info!(file = %stored.file_name, size = stored.size_bytes, "image uploaded");
        let body = UploadResponse {
            url: stored.url,
            file_name: stored.file_name,
            size_bytes: stored.size_bytes,
        };
        return Ok((StatusCode::CREATED, Json(body)).into_response());
    }

    Err(ApiError::bad_request("Multipart field 'file' is required"))
}

/// Mounted at `/api/admin/uploads`.
pub fn upload_routes(state: AppState) -> Router {
    // Leave room for multipart framing; the storage adapter enforces the exact limit.
    let body_limit = state.upload_limit_bytes.saturating_add(64 * 1024);
    Router::new()
        .route("/", post(upload_image))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
