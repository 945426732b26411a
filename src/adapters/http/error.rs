//! JSON error bodies and status mapping shared by every API handler.
//!
//! Every failure leaves the API as `{ "error": ..., "code": ..., "details"?: ... }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::domain::analyzer::AnalysisError;
use crate::domain::foundation::{AuthError, DomainError, ErrorCode};
use crate::ports::MediaError;

/// Error body returned by API endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<Value>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", error)
    }

    pub fn unauthorized(error: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", error)
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", error)
    }
}

/// An error response ready to leave a handler.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorResponse::bad_request(error))
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorResponse::not_found(error))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Maps a domain error code to its HTTP status.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::AIProviderError | ErrorCode::BrowserError => StatusCode::BAD_GATEWAY,
        ErrorCode::DatabaseError | ErrorCode::StorageError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = status_for(err.code);
        if status.is_server_error() {
            tracing::error!(code = %err.code, error = %err.message, "request failed");
        }

        let mut body = ErrorResponse::new(err.code.to_string(), err.message);
        if !err.details.is_empty() {
            body = body.with_details(serde_json::json!(err.details));
        }
        Self::new(status, body)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::ServiceUnavailable(msg) => {
                tracing::error!(error = %msg, "auth service unavailable");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new("AUTH_UNAVAILABLE", "Authentication service unavailable"),
                )
            }
            other => Self::new(StatusCode::UNAUTHORIZED, ErrorResponse::unauthorized(other.to_string())),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::MissingUrl => Self::new(
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("URL_REQUIRED", "URL is required"),
            ),
            AnalysisError::Disabled(reason) => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("ANALYZER_DISABLED", "Website analyzer is not available").with_details(reason),
            ),
            other => {
                tracing::warn!(error = %other, "website analysis failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("ANALYSIS_FAILED", "Failed to analyze website").with_details(other.to_string()),
                )
            }
        }
    }
}

impl From<MediaError> for ApiError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::UnsupportedType(_) => Self::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ErrorResponse::new("UNSUPPORTED_MEDIA_TYPE", err.to_string()),
            ),
            MediaError::TooLarge { .. } => Self::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::new("PAYLOAD_TOO_LARGE", err.to_string()),
            ),
            MediaError::Empty => Self::bad_request(err.to_string()),
            MediaError::Io(msg) => {
                tracing::error!(error = %msg, "upload write failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("Failed to store upload"),
                )
            }
        }
    }
}
