//! Route tables for the public API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::application::handlers::{PublicContentHandler, SubmitContactHandler};

use super::handlers::{
    get_page, get_post, get_project, list_posts, list_projects, list_services, submit_message,
};

/// Mounted at `/api/public`.
pub fn public_routes(content: Arc<PublicContentHandler>) -> Router {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/:slug", get(get_post))
        .route("/projects", get(list_projects))
        .route("/projects/:slug", get(get_project))
        .route("/services", get(list_services))
        .route("/pages/:page", get(get_page))
        .with_state(content)
}

/// Mounted at `/api/messages`.
pub fn contact_routes(handler: Arc<SubmitContactHandler>) -> Router {
    Router::new().route("/", post(submit_message)).with_state(handler)
}
