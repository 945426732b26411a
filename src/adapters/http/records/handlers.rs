//! Generic HTTP handlers for back-office records.
//!
//! One set of handlers serves every resource; the record type picks the
//! draft payload, labels and ordering.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::application::handlers::{CrudHandler, PageContentHandler, UpsertSectionCommand};
use crate::domain::foundation::{Ordered, Record, RecordId};

use super::super::error::{ApiError, ApiResult};

/// Parses a path id, answering 400 when it is not a UUID.
pub fn parse_id(raw: &str) -> ApiResult<RecordId> {
    raw.parse::<RecordId>()
        .map_err(|_| ApiError::bad_request(format!("Invalid id: {}", raw)))
}

/// GET /api/admin/<resource>
pub async fn list_records<T: Record>(State(handler): State<CrudHandler<T>>) -> ApiResult<Json<Vec<T>>> {
    Ok(Json(handler.list().await?))
}

/// GET /api/admin/<resource>/:id
pub async fn get_record<T: Record>(
    State(handler): State<CrudHandler<T>>,
    Path(id): Path<String>,
) -> ApiResult<Json<T>> {
    let id = parse_id(&id)?;
    Ok(Json(handler.get(id).await?))
}

/// POST /api/admin/<resource>
pub async fn create_record<T: Record>(
    State(handler): State<CrudHandler<T>>,
    Json(draft): Json<T::Draft>,
) -> ApiResult<Response> {
    let record = handler.create(draft).await?;
    Ok((StatusCode::CREATED, Json(record)).into_response())
}

/// POST /api/admin/<resource> for drag-and-drop ordered resources; appends at the end.
pub async fn create_ordered_record<T: Ordered>(
    State(handler): State<CrudHandler<T>>,
    Json(draft): Json<T::Draft>,
) -> ApiResult<Response> {
    let record = handler.create_ordered(draft).await?;
    Ok((StatusCode::CREATED, Json(record)).into_response())
}

/// PUT /api/admin/<resource>/:id
pub async fn update_record<T: Record>(
    State(handler): State<CrudHandler<T>>,
    Path(id): Path<String>,
    Json(draft): Json<T::Draft>,
) -> ApiResult<Json<T>> {
    let id = parse_id(&id)?;
    Ok(Json(handler.update(id, draft).await?))
}

/// DELETE /api/admin/<resource>/:id
pub async fn delete_record<T: Record>(
    State(handler): State<CrudHandler<T>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    handler.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<String>,
}

/// PUT /api/admin/<resource>/reorder
pub async fn reorder_records<T: Ordered>(
    State(handler): State<CrudHandler<T>>,
    Json(req): Json<ReorderRequest>,
) -> ApiResult<Response> {
    let ids = req
        .ids
        .iter()
        .map(|raw| parse_id(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let result = handler.reorder(&ids).await?;
    Ok(Json(result).into_response())
}

/// GET /api/admin/pages/:page
pub async fn page_sections(
    State(handler): State<Arc<PageContentHandler>>,
    Path(page): Path<String>,
) -> ApiResult<Response> {
    let sections = handler.sections(&page).await?;
    Ok(Json(sections).into_response())
}

/// PUT /api/admin/pages/:page/:section - body is the section's JSON content
pub async fn upsert_page_section(
    State(handler): State<Arc<PageContentHandler>>,
    Path((page, section)): Path<(String, String)>,
    Json(content): Json<Value>,
) -> ApiResult<Response> {
    let result = handler
        .upsert(UpsertSectionCommand { page, section, content })
        .await?;
    let status = if result.created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(result.section)).into_response())
}
