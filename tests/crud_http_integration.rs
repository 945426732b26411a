//! HTTP integration tests for the back-office API, the public API and the
//! server-rendered site.
//!
//! Each test builds the full router over in-memory repositories and drives
//! it with `tower::ServiceExt::oneshot`.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;

use common::{TestApp, ADMIN_EMAIL, ADMIN_PASSWORD};

// =============================================================================
// Admin CRUD
// =============================================================================

#[tokio::test]
async fn create_then_list_returns_generated_id() {
    let app = TestApp::new();

    let (status, created) = app
        .admin(Method::POST, "/api/admin/tasks", Some(json!({ "title": "Send proposal" })))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("generated id").to_string();
    assert!(!id.is_empty());

    let (status, listed) = app.admin(Method::GET, "/api/admin/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = listed.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id.as_str());
    assert_eq!(items[0]["title"], "Send proposal");
}

#[tokio::test]
async fn get_update_delete_round_trip() {
    let app = TestApp::new();
    let (_, created) = app
        .admin(Method::POST, "/api/admin/clients", Some(json!({ "name": "Initech" })))
        .await;
    let uri = format!("/api/admin/clients/{}", created["id"].as_str().unwrap());

    let (status, fetched) = app.admin(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Initech");

    let (status, updated) = app
        .admin(Method::PUT, &uri, Some(json!({ "name": "Initech Ltd", "company": "Initech" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Initech Ltd");
    assert_eq!(updated["id"], created["id"]);

    let (status, _) = app.admin(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.admin(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_and_delete_of_unknown_id_are_not_found() {
    let app = TestApp::new();
    let uri = "/api/admin/posts/6f9619ff-8b86-4d01-b42d-00cf4fc964ff";

    let (status, body) = app.admin(Method::PUT, uri, Some(json!({ "title": "Ghost" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());

    let (status, _) = app.admin(Method::DELETE, uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let app = TestApp::new();
    let (status, _) = app.admin(Method::GET, "/api/admin/posts/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_required_field_is_rejected() {
    let app = TestApp::new();
    let (status, body) = app
        .admin(Method::POST, "/api/admin/payables", Some(json!({ "amount": 1200 })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn admin_api_requires_a_session() {
    let app = TestApp::new();
    let (status, body) = app.json(Method::GET, "/api/admin/clients", None, false).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn reorder_sets_sort_order_and_skips_unknown_ids() {
    let app = TestApp::new();
    let mut ids = Vec::new();
    for title in ["Design", "Build", "Host"] {
        let (_, created) = app
            .admin(Method::POST, "/api/admin/services", Some(json!({ "title": title })))
            .await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let unknown = "6f9619ff-8b86-4d01-b42d-00cf4fc964ff";
    let (status, result) = app
        .admin(
            Method::PUT,
            "/api/admin/services/reorder",
            Some(json!({ "ids": [ids[2], unknown, ids[0], ids[1]] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["updated"], 3);
    assert_eq!(result["skipped"], json!([unknown]));

    let (_, listed) = app.admin(Method::GET, "/api/admin/services", None).await;
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Host", "Design", "Build"]);
}

#[tokio::test]
async fn page_sections_upsert_by_page_and_section() {
    let app = TestApp::new();

    let (status, _) = app
        .admin(Method::PUT, "/api/admin/pages/home/hero", Some(json!({ "title": "Hello" })))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, section) = app
        .admin(Method::PUT, "/api/admin/pages/home/hero", Some(json!({ "title": "Hi again" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(section["content"]["title"], "Hi again");

    let (_, sections) = app.admin(Method::GET, "/api/admin/pages/home", None).await;
    assert_eq!(sections.as_array().map(Vec::len), Some(1));
}

// =============================================================================
// Finance
// =============================================================================

#[tokio::test]
async fn finance_dashboard_counts_paid_income_only() {
    let app = TestApp::new();
    app.admin(
        Method::POST,
        "/api/admin/incomes",
        Some(json!({ "description": "Website", "amount": 150000, "paid": true, "paid_on": "2024-03-01" })),
    )
    .await;
    app.admin(
        Method::POST,
        "/api/admin/incomes",
        Some(json!({ "description": "Retainer", "amount": 50000, "due_on": "2000-01-31" })),
    )
    .await;

    let (status, dashboard) = app.admin(Method::GET, "/api/admin/finance/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["total_income"], 150000);
    assert_eq!(dashboard["outstanding_receivables"], 50000);
    assert_eq!(dashboard["overdue_receivables"], 50000);

    let (_, receivables) = app.admin(Method::GET, "/api/admin/finance/receivables", None).await;
    assert_eq!(receivables.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn statement_for_unknown_client_is_not_found() {
    let app = TestApp::new();
    let (status, _) = app
        .admin(
            Method::GET,
            "/api/admin/finance/clients/6f9619ff-8b86-4d01-b42d-00cf4fc964ff/statement",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Public API
// =============================================================================

#[tokio::test]
async fn health_reports_storage_backend() {
    let app = TestApp::new();
    let (status, body) = app.json(Method::GET, "/health", None, false).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "storage": "json" }));
}

#[tokio::test]
async fn public_posts_hide_drafts() {
    let app = TestApp::new();
    app.admin(Method::POST, "/api/admin/posts", Some(json!({ "title": "Draft thoughts" })))
        .await;
    app.admin(
        Method::POST,
        "/api/admin/posts",
        Some(json!({ "title": "Launch notes", "published": true })),
    )
    .await;

    let (status, posts) = app.json(Method::GET, "/api/public/posts", None, false).await;
    assert_eq!(status, StatusCode::OK);
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Launch notes");

    let slug = posts[0]["slug"].as_str().unwrap();
    let (status, _) = app
        .json(Method::GET, &format!("/api/public/posts/{}", slug), None, false)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn contact_submission_creates_unread_message() {
    let app = TestApp::new();
    let (status, _) = app
        .json(
            Method::POST,
            "/api/messages",
            Some(json!({ "name": "Ada", "email": "ada@example.com", "message": "Need a site" })),
            false,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, messages) = app.admin(Method::GET, "/api/admin/messages", None).await;
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["read"], false);
    assert_eq!(messages[0]["body"], "Need a site");
}

#[tokio::test]
async fn contact_submission_without_valid_email_is_rejected() {
    let app = TestApp::new();
    let (status, _) = app
        .json(
            Method::POST,
            "/api/messages",
            Some(json!({ "name": "Ada", "email": "nope", "body": "Hi" })),
            false,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn login_sets_session_cookie_usable_for_admin_api() {
    let app = TestApp::new();
    let request = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }).to_string()))
        .unwrap();
    let (status, _, headers) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);

    let cookie = headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie")
        .to_string();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));

    let pair = cookie.split(';').next().unwrap().to_string();
    let request = Request::get("/api/admin/clients")
        .header(header::COOKIE, pair)
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new();
    let (status, _) = app
        .json(
            Method::POST,
            "/api/auth/login",
            Some(json!({ "email": ADMIN_EMAIL, "password": "guess" })),
            false,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_pages_redirect_to_login() {
    let app = TestApp::new();
    let request = Request::get("/admin/clients").body(Body::empty()).unwrap();
    let (status, _, headers) = app.send(request).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        headers.get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/login?next=%2Fadmin%2Fclients")
    );
}

// =============================================================================
// Site pages
// =============================================================================

#[tokio::test]
async fn blog_falls_back_to_static_posts_when_store_is_empty() {
    let app = TestApp::new();
    let (status, html) = app.html("/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Welcome to our blog"));
    assert!(html.contains("Acme Studio"));
}

#[tokio::test]
async fn unknown_slug_renders_not_found_page() {
    let app = TestApp::new();
    let (status, html) = app.html("/portfolio/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("<html"));
}

#[tokio::test]
async fn unknown_api_path_answers_json_not_found() {
    let app = TestApp::new();
    let (status, body) = app.json(Method::GET, "/api/nothing-here", None, false).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
