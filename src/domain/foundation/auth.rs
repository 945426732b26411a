//! Authentication domain types.
//!
//! The back-office has a single administrator account. A validated session
//! yields an [`AuthenticatedAdmin`]; adapters translate their own failures
//! into [`AuthError`].

use super::{AdminId, Timestamp};
use thiserror::Error;

/// Administrator identity extracted from a validated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub id: AdminId,
    pub email: String,
    /// When the current session stops being accepted.
    pub expires_at: Timestamp,
}

impl AuthenticatedAdmin {
    pub fn new(id: AdminId, email: impl Into<String>, expires_at: Timestamp) -> Self {
        Self {
            id,
            email: email.into(),
            expires_at,
        }
    }
}

/// Authentication errors that can occur during login or session validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The session token is missing, malformed, or has an invalid signature.
    #[error("Invalid session")]
    InvalidToken,

    /// The session token has expired.
    #[error("Session expired")]
    TokenExpired,

    /// Email/password pair did not match the configured administrator.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session signing or verification could not be performed.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
