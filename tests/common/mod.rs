//! Shared harness for HTTP integration tests: the full router over
//! in-memory repositories, a mock session validator and stub analyzer ports.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use agency_site::adapters::ai::MockVisionModel;
use agency_site::adapters::auth::MockSessionValidator;
use agency_site::adapters::http::{app_routes, AppParts, AppState, CookieSettings, RouterSettings};
use agency_site::adapters::media::LocalMediaStorage;
use agency_site::adapters::Repositories;
use agency_site::application::handlers::{
    sha256_hex, AdminCredentials, AnalyzeWebsiteHandler, AnalyzerSettings, SiteIdentity,
};
use agency_site::domain::analyzer::PageMetadata;
use agency_site::ports::{CaptureError, PageCapture, PageCapturer, VisionModel};
use secrecy::Secret;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const ADMIN_EMAIL: &str = "owner@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse";

/// Captures any URL except hosts ending in `.invalid`, which fail navigation.
pub struct StubCapturer;

#[async_trait]
impl PageCapturer for StubCapturer {
    async fn capture(&self, url: &str) -> Result<PageCapture, CaptureError> {
        let host = url::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();
        if host.ends_with(".invalid") {
            return Err(CaptureError::Navigation(format!("net::ERR_NAME_NOT_RESOLVED at {}", url)));
        }
        Ok(PageCapture {
            metadata: PageMetadata {
                title: "Example Domain".into(),
                description: String::new(),
            },
            screenshot_base64: "iVBORw0KGgo=".into(),
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub repositories: Repositories,
    pub model: Option<Arc<MockVisionModel>>,
    _uploads: TempDir,
}

impl TestApp {
    /// App with the analyzer configured with `models`, backed by `model`.
    pub fn with_analyzer(model: Option<MockVisionModel>, models: &[&str]) -> Self {
        let uploads = TempDir::new().expect("temp dir");
        let repositories = Repositories::in_memory();
        let sessions = Arc::new(MockSessionValidator::new().with_test_admin(ADMIN_TOKEN));
        let model = model.map(Arc::new);
        let vision: Option<Arc<dyn VisionModel>> = model.clone().map(|m| m as Arc<dyn VisionModel>);

        let analyzer = AnalyzeWebsiteHandler::new(
            Arc::new(StubCapturer),
            vision,
            AnalyzerSettings {
                models: models.iter().map(|m| m.to_string()).collect(),
                ecommerce_domains: vec!["shop.example.com".into()],
            },
        );

        let state = AppState::new(AppParts {
            repositories: repositories.clone(),
            sessions: sessions.clone(),
            issuer: sessions,
            credentials: AdminCredentials::new(ADMIN_EMAIL, Secret::new(sha256_hex(ADMIN_PASSWORD))),
            analyzer,
            media: Arc::new(LocalMediaStorage::new(uploads.path(), "/uploads", 1024 * 1024)),
            identity: SiteIdentity {
                name: "Acme Studio".into(),
                tagline: "Websites that work".into(),
                contact_email: "hello@acme.test".into(),
            },
            cookies: CookieSettings { secure: false },
            upload_limit_bytes: 1024 * 1024,
            storage_backend: "json",
        })
        .expect("templates compile");

        let settings = RouterSettings {
            uploads_dir: uploads.path().to_path_buf(),
            admin_assets_dir: uploads.path().join("admin"),
            cors_origins: Vec::new(),
            request_timeout: std::time::Duration::from_secs(30),
        };

        Self {
            router: app_routes(state, &settings),
            repositories,
            model,
            _uploads: uploads,
        }
    }

    pub fn new() -> Self {
        Self::with_analyzer(None, &[])
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
        let response = self.router.clone().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, bytes.to_vec(), headers)
    }

    /// Sends a JSON request, optionally as the admin; returns status and parsed body.
    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>, admin: bool) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if admin {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let (status, bytes, _) = self.send(request).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn admin(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.json(method, uri, body, true).await
    }

    pub async fn html(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        let (status, bytes, _) = self.send(request).await;
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }
}
