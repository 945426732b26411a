//! Session middleware and extractors for axum.
//!
//! This module provides:
//! - `session_middleware` - validates a session when one is presented, never rejects
//! - `require_admin_api` - 401 JSON for `/api/admin/*` without a valid session
//! - `require_admin_page` - 303 to `/login?next=...` for `/admin/*` without a valid session
//! - `RequireAdmin` - extractor for handlers behind the session middleware
//!
//! The session token is read from the `session` cookie, or from an
//! `Authorization: Bearer` header for API clients.
//!
//! ```text
//! Request → require_admin_* → injects AuthenticatedAdmin into extensions
//!                                      ↓
//!                              Handler → RequireAdmin extractor reads from extensions
//! ```

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::domain::foundation::{AuthError, AuthenticatedAdmin};
use crate::ports::SessionValidator;

use super::super::error::ErrorResponse;

/// Name of the HttpOnly cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Bearer token first, then the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}

async fn authenticate(validator: &AuthState, headers: &HeaderMap) -> Result<AuthenticatedAdmin, AuthError> {
    let token = session_token(headers).ok_or(AuthError::InvalidToken)?;
    validator.validate(&token).await
}

/// Injects the admin when a valid session is presented; otherwise continues untouched.
pub async fn session_middleware(State(validator): State<AuthState>, mut request: Request, next: Next) -> Response {
    if let Ok(admin) = authenticate(&validator, request.headers()).await {
        request.extensions_mut().insert(admin);
    }
    next.run(request).await
}

/// Rejects API requests without a valid session with `401`.
pub async fn require_admin_api(State(validator): State<AuthState>, mut request: Request, next: Next) -> Response {
    match authenticate(&validator, request.headers()).await {
        Ok(admin) => {
            request.extensions_mut().insert(admin);
            next.run(request).await
        }
        Err(e) => {
            let (status, message) = match &e {
                AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Session expired"),
                AuthError::ServiceUnavailable(msg) => {
                    tracing::error!("Auth service unavailable: {}", msg);
                    (StatusCode::SERVICE_UNAVAILABLE, "Authentication service unavailable")
                }
                _ => (StatusCode::UNAUTHORIZED, "Authentication required"),
            };
            (status, Json(ErrorResponse::unauthorized(message))).into_response()
        }
    }
}

/// Redirects browser requests without a valid session to the login page.
pub async fn require_admin_page(State(validator): State<AuthState>, mut request: Request, next: Next) -> Response {
    match authenticate(&validator, request.headers()).await {
        Ok(admin) => {
            request.extensions_mut().insert(admin);
            next.run(request).await
        }
        Err(_) => {
            let next_path = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("/admin");
            Redirect::to(&login_redirect(next_path)).into_response()
        }
    }
}

/// `/login?next=<path>` with the path percent-encoded.
pub fn login_redirect(next_path: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(next_path.as_bytes()).collect();
    format!("/login?next={}", encoded)
}

/// Extractor that requires a validated admin session.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedAdmin);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .cloned()
            .map(RequireAdmin)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid session was presented.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::unauthorized("Authentication required")),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use axum::{body::Body, http::Request as HttpRequest, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn validator() -> AuthState {
        Arc::new(MockSessionValidator::new().with_test_admin("good-token"))
    }

    fn api_app() -> Router {
        Router::new()
            .route(
                "/api/admin/ping",
                get(|RequireAdmin(admin): RequireAdmin| async move { admin.email }),
            )
            .layer(middleware::from_fn_with_state(validator(), require_admin_api))
    }

    fn page_app() -> Router {
        Router::new()
            .route("/admin/clients", get(|| async { "spa" }))
            .layer(middleware::from_fn_with_state(validator(), require_admin_page))
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "session=from-cookie".parse().unwrap());
        assert_eq!(session_token(&headers).as_deref(), Some("from-cookie"));

        headers.insert(header::AUTHORIZATION, "Bearer from-header".parse().unwrap());
        assert_eq!(session_token(&headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn non_bearer_authorization_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn login_redirect_encodes_next() {
        assert_eq!(login_redirect("/admin/clients?tab=2"), "/login?next=%2Fadmin%2Fclients%3Ftab%3D2");
    }

    #[tokio::test]
    async fn api_without_session_is_401() {
        let response = api_app()
            .oneshot(HttpRequest::get("/api/admin/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn api_with_session_cookie_passes() {
        let response = api_app()
            .oneshot(
                HttpRequest::get("/api/admin/ping")
                    .header(header::COOKIE, "session=good-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn page_without_session_redirects_to_login() {
        let response = page_app()
            .oneshot(HttpRequest::get("/admin/clients").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login?next=%2Fadmin%2Fclients"
        );
    }

    #[tokio::test]
    async fn page_with_bad_session_redirects_too() {
        let response = page_app()
            .oneshot(
                HttpRequest::get("/admin/clients")
                    .header(header::COOKIE, "session=stale")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn require_admin_fails_without_extension() {
        let request: HttpRequest<()> = HttpRequest::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result = RequireAdmin::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }
}
