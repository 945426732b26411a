//! Axum router: maps every URL path to its handler and wraps the stack in
//! the cross-cutting tower-http layers.

use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    handler::Handler,
    http::{header, HeaderValue, Method, Request},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::analyze::analyze_routes;
use super::finance::finance_routes;
use super::login::auth_routes;
use super::middleware::{require_admin_api, require_admin_page};
use super::public::{contact_routes, public_routes};
use super::records::{ordered_resource_routes, page_routes, resource_routes};
use super::site::{not_found, site_routes};
use super::state::AppState;
use super::uploads::upload_routes;

/// Filesystem locations and limits the router needs besides the handlers.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub uploads_dir: PathBuf,
    pub admin_assets_dir: PathBuf,
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "storage": state.storage_backend }))
}

/// Session-gated back-office API, mounted at `/api/admin`.
fn admin_api_routes(state: &AppState) -> Router {
    let records = &state.records;
    Router::new()
        .nest("/posts", resource_routes(records.posts.clone()))
        .nest("/projects", resource_routes(records.projects.clone()))
        .nest("/services", ordered_resource_routes(records.services.clone()))
        .nest("/clients", ordered_resource_routes(records.clients.clone()))
        .nest("/tasks", resource_routes(records.tasks.clone()))
        .nest("/messages", resource_routes(records.messages.clone()))
        .nest("/incomes", resource_routes(records.incomes.clone()))
        .nest("/expenses", resource_routes(records.expenses.clone()))
        .nest("/payables", resource_routes(records.payables.clone()))
        .nest("/page-sections", resource_routes(records.page_sections.clone()))
        .nest("/pages", page_routes(state.pages.clone()))
        .nest("/finance", finance_routes(state.finance.clone()))
        .nest("/uploads", upload_routes(state.clone()))
        .layer(middleware::from_fn_with_state(state.sessions.clone(), require_admin_api))
}

/// The admin SPA bundle; unknown paths fall back to `index.html` for client routing.
fn admin_spa_routes(state: &AppState, assets_dir: &Path) -> Router {
    let spa = ServeDir::new(assets_dir).fallback(ServeFile::new(assets_dir.join("index.html")));
    Router::new()
        .nest_service("/admin", spa)
        .layer(middleware::from_fn_with_state(state.sessions.clone(), require_admin_page))
}

/// All routes, without the outer middleware stack.
pub fn app_routes(state: AppState, settings: &RouterSettings) -> Router {
    Router::new()
        .merge(site_routes(state.clone()))
        .route("/health", get(health).with_state(state.clone()))
        .nest("/api/admin", admin_api_routes(&state))
        .nest("/api/public", public_routes(state.public.clone()))
        .nest("/api/messages", contact_routes(state.contact.clone()))
        .nest("/api/auth", auth_routes(state.clone()))
        .nest("/api/analyze", analyze_routes(state.analyzer.clone()))
        .nest_service("/uploads", ServeDir::new(&settings.uploads_dir))
        .merge(admin_spa_routes(&state, &settings.admin_assets_dir))
        .fallback_service(not_found.with_state(state))
}

/// Build and return the full application with request ids, tracing,
/// timeouts, compression and CORS.
pub fn build_router(state: AppState, settings: &RouterSettings) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    app_routes(state, settings).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(trace)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(settings.request_timeout))
            .layer(CompressionLayer::new())
            .layer(cors_layer(&settings.cors_origins)),
    )
}

/// Same-origin only unless origins are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
