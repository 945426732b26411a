//! HTTP status and transport error mapping shared by the provider clients.

use reqwest::{Response, StatusCode};
use std::time::Duration;

use crate::ports::AIError;

/// Maps a reqwest send failure to an `AIError`.
pub(crate) fn send_error(err: reqwest::Error, timeout: Duration) -> AIError {
    if err.is_timeout() {
        AIError::Timeout {
            timeout_secs: timeout.as_secs() as u32,
        }
    } else if err.is_connect() {
        AIError::network(format!("Connection failed: {}", err))
    } else {
        AIError::network(err.to_string())
    }
}

/// Maps a non-success status and its body to an `AIError`.
pub(crate) fn status_error(status: StatusCode, model: &str, body: String) -> AIError {
    match status.as_u16() {
        401 | 403 => AIError::AuthenticationFailed,
        404 => AIError::ModelNotFound(model.to_string()),
        429 => AIError::rate_limited(retry_after(&body)),
        400 => AIError::InvalidRequest(body),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

/// Passes successful responses through; reads the body of failures.
pub(crate) async fn check_status(response: Response, model: &str) -> Result<Response, AIError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, model, body))
}

/// Looks for "try again in Ns" / "retry in Ns" in an error body.
fn retry_after(body: &str) -> u32 {
    for marker in ["try again in ", "retry in "] {
        if let Some(idx) = body.find(marker) {
            let digits: String = body[idx + marker.len()..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            if let Ok(secs) = digits.parse::<u32>() {
                return secs;
            }
        }
    }
    60
}
