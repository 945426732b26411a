//! Route table for `/api/auth`.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::super::middleware::session_middleware;
use super::super::state::AppState;
use super::handlers::{login, logout, me};

pub fn auth_routes(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .layer(middleware::from_fn_with_state(state.sessions.clone(), session_middleware))
        .with_state(state)
}
