//! HTTP handlers for admin login, logout and the current-session probe.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::application::handlers::LoginCommand;

use super::super::error::ApiResult;
use super::super::middleware::{RequireAdmin, SESSION_COOKIE};
use super::super::state::{AppState, CookieSettings};
use super::dto::{AdminResponse, LoginResponse};

/// HttpOnly session cookie scoped to the whole site.
pub fn session_cookie(token: String, settings: CookieSettings) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.secure)
        .build()
}

/// Cookie that clears the session.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(cmd): Json<LoginCommand>,
) -> ApiResult<Response> {
    let result = state.login.handle(cmd).await?;
    let body = LoginResponse::from(&result);
    let jar = jar.add(session_cookie(result.session.token, state.cookies));
    Ok((jar, Json(body)).into_response())
}

/// POST /api/auth/logout
pub async fn logout(jar: CookieJar) -> Response {
    (jar.remove(expired_session_cookie()), StatusCode::NO_CONTENT).into_response()
}

/// GET /api/auth/me
pub async fn me(RequireAdmin(admin): RequireAdmin) -> Json<AdminResponse> {
    Json(AdminResponse::from(&admin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_http_only() {
        let cookie = session_cookie("tok".into(), CookieSettings { secure: true });
        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
