//! Read-only public API and the contact form endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::application::handlers::{PublicContentHandler, SubmitContactCommand, SubmitContactHandler};

use super::super::error::ApiResult;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    /// `true` for lab projects, `false` for portfolio; absent for both.
    pub lab: Option<bool>,
}

/// GET /api/public/posts
pub async fn list_posts(State(content): State<Arc<PublicContentHandler>>) -> ApiResult<Response> {
    Ok(Json(content.published_posts().await?).into_response())
}

/// GET /api/public/posts/:slug
pub async fn get_post(
    State(content): State<Arc<PublicContentHandler>>,
    Path(slug): Path<String>,
) -> ApiResult<Response> {
    Ok(Json(content.post_by_slug(&slug).await?).into_response())
}

/// GET /api/public/projects?lab=bool
pub async fn list_projects(
    State(content): State<Arc<PublicContentHandler>>,
    Query(query): Query<ProjectsQuery>,
) -> ApiResult<Response> {
    Ok(Json(content.projects(query.lab).await?).into_response())
}

/// GET /api/public/projects/:slug
pub async fn get_project(
    State(content): State<Arc<PublicContentHandler>>,
    Path(slug): Path<String>,
) -> ApiResult<Response> {
    Ok(Json(content.project_by_slug(&slug).await?).into_response())
}

/// GET /api/public/services
pub async fn list_services(State(content): State<Arc<PublicContentHandler>>) -> ApiResult<Response> {
    Ok(Json(content.services().await?).into_response())
}

/// GET /api/public/pages/:page
pub async fn get_page(
    State(content): State<Arc<PublicContentHandler>>,
    Path(page): Path<String>,
) -> ApiResult<Response> {
    Ok(Json(content.page(&page).await?).into_response())
}

/// POST /api/messages - contact form
pub async fn submit_message(
    State(handler): State<Arc<SubmitContactHandler>>,
    Json(cmd): Json<SubmitContactCommand>,
) -> ApiResult<Response> {
    let message = handler.handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(message)).into_response())
}
