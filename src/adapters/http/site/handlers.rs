//! Server-rendered public pages.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use minijinja::{context, Value};
use serde::Deserialize;

use crate::application::handlers::{LoginCommand, SubmitContactCommand};
use crate::domain::foundation::{AuthError, ErrorCode};

use super::super::error::ApiError;
use super::super::login::session_cookie;
use super::super::state::AppState;

const HOME_TEASERS: usize = 3;

const BARE_ERROR_PAGE: &str = "<!doctype html><title>Error</title><h1>Something went wrong</h1>";

fn render(state: &AppState, status: StatusCode, template: &str, ctx: Value) -> Response {
    match state.templates.render(template, ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(template, error = %e, "template render failed");
            let body = state
                .templates
                .render("500.html", context! { site => state.site.identity() })
                .unwrap_or_else(|_| BARE_ERROR_PAGE.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
        }
    }
}

fn not_found_page(state: &AppState) -> Response {
    render(
        state,
        StatusCode::NOT_FOUND,
        "404.html",
        context! { site => state.site.identity() },
    )
}

/// Fallback for unmatched paths: JSON under `/api`, HTML elsewhere.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return ApiError::not_found(format!("No route for {}", uri.path())).into_response();
    }
    not_found_page(&state)
}

/// GET /
pub async fn home(State(state): State<AppState>) -> Response {
    let site = &state.site;
    let mut services = site.services().await;
    services.truncate(HOME_TEASERS);
    let mut projects = site.projects(false).await;
    projects.truncate(HOME_TEASERS);
    let mut posts = site.posts().await;
    posts.truncate(HOME_TEASERS);

    let ctx = context! {
        site => site.identity(),
        copy => site.copy("home").await,
        services => services,
        projects => projects,
        posts => posts,
    };
    render(&state, StatusCode::OK, "home.html", ctx)
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> Response {
    let ctx = context! {
        site => state.site.identity(),
        copy => state.site.copy("about").await,
        active => "about",
    };
    render(&state, StatusCode::OK, "page.html", ctx)
}

/// GET /services
pub async fn services(State(state): State<AppState>) -> Response {
    let ctx = context! {
        site => state.site.identity(),
        copy => state.site.copy("services").await,
        services => state.site.services().await,
        active => "services",
    };
    render(&state, StatusCode::OK, "page.html", ctx)
}

/// GET /portfolio
pub async fn portfolio(State(state): State<AppState>) -> Response {
    let ctx = context! {
        site => state.site.identity(),
        copy => state.site.copy("portfolio").await,
        projects => state.site.projects(false).await,
        project_base => "/portfolio",
        active => "portfolio",
    };
    render(&state, StatusCode::OK, "page.html", ctx)
}

/// GET /lab
pub async fn lab(State(state): State<AppState>) -> Response {
    let ctx = context! {
        site => state.site.identity(),
        copy => state.site.copy("lab").await,
        projects => state.site.projects(true).await,
        project_base => "/portfolio",
        active => "lab",
    };
    render(&state, StatusCode::OK, "page.html", ctx)
}

/// GET /portfolio/:slug
pub async fn project(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.site.project(&slug).await {
        Some(project) => {
            let active = if project.lab { "lab" } else { "portfolio" };
            let ctx = context! { site => state.site.identity(), project => project, active => active };
            render(&state, StatusCode::OK, "project.html", ctx)
        }
        None => not_found_page(&state),
    }
}

/// GET /blog
pub async fn blog(State(state): State<AppState>) -> Response {
    let ctx = context! {
        site => state.site.identity(),
        copy => state.site.copy("blog").await,
        posts => state.site.posts().await,
        active => "blog",
    };
    render(&state, StatusCode::OK, "page.html", ctx)
}

/// GET /blog/:slug
pub async fn post(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.site.post(&slug).await {
        Some(post) => {
            let ctx = context! { site => state.site.identity(), post => post, active => "blog" };
            render(&state, StatusCode::OK, "post.html", ctx)
        }
        None => not_found_page(&state),
    }
}

/// GET /contact
pub async fn contact_form(State(state): State<AppState>) -> Response {
    let ctx = context! {
        site => state.site.identity(),
        form => SubmitContactCommand::default(),
        active => "contact",
    };
    render(&state, StatusCode::OK, "contact.html", ctx)
}

/// POST /contact
pub async fn contact_submit(State(state): State<AppState>, Form(form): Form<SubmitContactCommand>) -> Response {
    match state.contact.handle(form.clone()).await {
        Ok(_) => {
            let ctx = context! { site => state.site.identity(), sent => true, active => "contact" };
            render(&state, StatusCode::CREATED, "contact.html", ctx)
        }
        Err(e) => {
            let status = if e.code == ErrorCode::ValidationFailed {
                StatusCode::BAD_REQUEST
            } else {
                tracing::error!(error = %e, "contact form submission failed");
                StatusCode::INTERNAL_SERVER_ERROR
            };
            let ctx = context! {
                site => state.site.identity(),
                form => form,
                error => e.message,
                active => "contact",
            };
            render(&state, status, "contact.html", ctx)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub next: Option<String>,
}

/// Post-login destination: a local path, `/admin` otherwise.
pub fn safe_next(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path.to_string(),
        _ => "/admin".to_string(),
    }
}

/// GET /login
pub async fn login_form(State(state): State<AppState>, Query(query): Query<LoginQuery>) -> Response {
    let ctx = context! {
        site => state.site.identity(),
        next => safe_next(query.next.as_deref()),
        email => "",
    };
    render(&state, StatusCode::OK, "login.html", ctx)
}

/// POST /login - form sign-in, then redirect to `next`
pub async fn login_submit(State(state): State<AppState>, jar: CookieJar, Form(form): Form<LoginForm>) -> Response {
    let next = safe_next(form.next.as_deref());
    let cmd = LoginCommand {
        email: form.email.clone(),
        password: form.password,
    };

    match state.login.handle(cmd).await {
        Ok(result) => {
            let jar = jar.add(session_cookie(result.session.token, state.cookies));
            (jar, Redirect::to(&next)).into_response()
        }
        Err(e) => {
            let (status, message) = match e {
                AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
                other => {
                    tracing::error!(error = %other, "form login failed");
                    (StatusCode::SERVICE_UNAVAILABLE, "Sign-in is temporarily unavailable")
                }
            };
            let ctx = context! {
                site => state.site.identity(),
                next => next,
                email => form.email,
                error => message,
            };
            render(&state, status, "login.html", ctx)
        }
    }
}
