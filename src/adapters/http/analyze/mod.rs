//! Website analyzer endpoint.

mod handlers;

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::application::handlers::AnalyzeWebsiteHandler;

pub use handlers::AnalyzeRequest;

/// Mounted at `/api/analyze`.
pub fn analyze_routes(analyzer: Arc<AnalyzeWebsiteHandler>) -> Router {
    Router::new()
        .route("/", post(handlers::analyze_website))
        .with_state(analyzer)
}
