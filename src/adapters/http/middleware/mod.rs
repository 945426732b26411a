//! HTTP middleware for axum.
//!
//! - `auth` - Session middleware and extractors

pub mod auth;

pub use auth::{
    login_redirect, require_admin_api, require_admin_page, session_middleware, session_token, AuthRejection,
    AuthState, RequireAdmin, SESSION_COOKIE,
};
