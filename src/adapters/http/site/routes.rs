//! Route table for the public site.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{
    about, blog, contact_form, contact_submit, home, lab, login_form, login_submit, portfolio, post, project, services,
};

pub fn site_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/services", get(services))
        .route("/portfolio", get(portfolio))
        .route("/portfolio/:slug", get(project))
        .route("/blog", get(blog))
        .route("/blog/:slug", get(post))
        .route("/lab", get(lab))
        .route("/contact", get(contact_form).post(contact_submit))
        .route("/login", get(login_form).post(login_submit))
        .with_state(state)
}
