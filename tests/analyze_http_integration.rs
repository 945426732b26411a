//! HTTP integration tests for `POST /api/analyze`.
//!
//! The browser and the hosted model are replaced by a stub capturer and the
//! scripted `MockVisionModel`, so these run without Chromium or network.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use agency_site::adapters::ai::MockVisionModel;
use agency_site::ports::AIError;

use common::TestApp;

const PRIMARY: &str = "gemini-2.0-flash";
const SECONDARY: &str = "gemini-1.5-flash";

const FENCED_RESPONSE: &str = "```json\n{\"scores\":{\"design\":87.6,\"ux\":140,\"seo\":-5,\"content\":70},\
\"summary\":\"Clean layout, weak meta tags.\",\"critical_issues\":[\"No meta description\"],\
\"improvements\":[\"Add alt text\"],\"positive_points\":[\"Fast\"]}\n```";

async fn analyze(app: &TestApp, url: &str) -> (StatusCode, Value) {
    app.json(Method::POST, "/api/analyze", Some(json!({ "url": url })), false)
        .await
}

fn assert_score(value: &Value) {
    let score = value.as_u64().expect("integer score");
    assert!(score <= 100, "score {} out of range", score);
}

#[tokio::test]
async fn scores_are_integers_between_0_and_100() {
    let model = MockVisionModel::new().with_response(PRIMARY, FENCED_RESPONSE);
    let app = TestApp::with_analyzer(Some(model), &[PRIMARY]);

    let (status, body) = analyze(&app, "https://example.com").await;
    assert_eq!(status, StatusCode::OK);
    for key in ["design", "ux", "seo", "content"] {
        assert_score(&body["scores"][key]);
    }
    assert_eq!(body["scores"]["design"], 88);
    assert_eq!(body["scores"]["ux"], 100);
    assert_eq!(body["scores"]["seo"], 0);
    assert_eq!(body["summary"], "Clean layout, weak meta tags.");
    assert_eq!(body["critical_issues"], json!(["No meta description"]));
}

#[tokio::test]
async fn unreachable_url_fails_with_error_message() {
    let model = MockVisionModel::new().with_response(PRIMARY, FENCED_RESPONSE);
    let app = TestApp::with_analyzer(Some(model), &[PRIMARY]);

    let (status, body) = analyze(&app, "https://nowhere.invalid").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
    assert!(body["details"].is_string());
    assert!(app.model.as_ref().unwrap().calls().is_empty());
}

#[tokio::test]
async fn malformed_url_fails_with_error_message() {
    let model = MockVisionModel::new().with_response(PRIMARY, FENCED_RESPONSE);
    let app = TestApp::with_analyzer(Some(model), &[PRIMARY]);

    for url in ["not a url", "ftp://example.com/file"] {
        let (status, body) = analyze(&app, url).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "url {:?}", url);
        assert!(!body["error"].as_str().unwrap_or_default().is_empty());
    }
}

#[tokio::test]
async fn falls_back_to_next_model() {
    let model = MockVisionModel::new()
        .with_error(PRIMARY, AIError::unavailable("overloaded"))
        .with_response(SECONDARY, FENCED_RESPONSE);
    let app = TestApp::with_analyzer(Some(model), &[PRIMARY, SECONDARY]);

    let (status, body) = analyze(&app, "https://example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_score(&body["scores"]["content"]);
    assert_eq!(app.model.as_ref().unwrap().calls(), vec![PRIMARY, SECONDARY]);
}

#[tokio::test]
async fn unparseable_output_also_falls_back() {
    let model = MockVisionModel::new()
        .with_response(PRIMARY, "Sorry, I can't help with that.")
        .with_response(SECONDARY, FENCED_RESPONSE);
    let app = TestApp::with_analyzer(Some(model), &[PRIMARY, SECONDARY]);

    let (status, _) = analyze(&app, "https://example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.model.as_ref().unwrap().calls().len(), 2);
}

#[tokio::test]
async fn fails_only_after_every_model_fails() {
    let model = MockVisionModel::new()
        .with_error(PRIMARY, AIError::unavailable("overloaded"))
        .with_error(SECONDARY, AIError::network("connection reset"));
    let app = TestApp::with_analyzer(Some(model), &[PRIMARY, SECONDARY]);

    let (status, body) = analyze(&app, "https://example.com").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
    let details = body["details"].as_str().unwrap_or_default();
    assert!(details.contains(SECONDARY), "last error surfaced: {}", details);
    assert_eq!(app.model.as_ref().unwrap().calls(), vec![PRIMARY, SECONDARY]);
}

#[tokio::test]
async fn missing_url_is_bad_request() {
    let model = MockVisionModel::new().with_response(PRIMARY, FENCED_RESPONSE);
    let app = TestApp::with_analyzer(Some(model), &[PRIMARY]);

    let (status, body) = app.json(Method::POST, "/api/analyze", Some(json!({})), false).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "URL_REQUIRED");

    let (status, _) = analyze(&app, "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn analyzer_without_model_is_unavailable() {
    let app = TestApp::new();
    let (status, body) = analyze(&app, "https://example.com").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "ANALYZER_DISABLED");
}
