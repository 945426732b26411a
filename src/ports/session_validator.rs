//! Admin session ports.
//!
//! Sessions are bearer tokens identifying the single admin account. The
//! issuer mints them at login; the validator checks them on every gated
//! request (cookie or `Authorization: Bearer`).

use async_trait::async_trait;

use crate::domain::foundation::{AdminId, AuthError, AuthenticatedAdmin, Timestamp};

/// Validates session tokens and extracts the admin identity.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for malformed tokens or bad signatures
/// - Return `AuthError::TokenExpired` for expired tokens
#[async_trait]
pub trait SessionValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<AuthenticatedAdmin, AuthError>;
}

/// A freshly minted session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Mints session tokens after a successful login.
#[async_trait]
pub trait SessionIssuer: Send + Sync {
    async fn issue(&self, admin: &AdminId, email: &str) -> Result<IssuedSession, AuthError>;
}
