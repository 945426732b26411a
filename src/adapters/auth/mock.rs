//! Mock session adapter for testing.
//!
//! Accepts a fixed set of tokens and hands out predictable ones on login,
//! avoiding real signing keys in handler and router tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AdminId, AuthError, AuthenticatedAdmin, Timestamp};
use crate::ports::{IssuedSession, SessionIssuer, SessionValidator};

/// Mock session validator/issuer.
///
/// Tokens not in the map return `InvalidToken`. `issue` mints
/// `mock-session-<n>` and remembers it so later validation succeeds.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedAdmin>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token that maps to an admin.
    pub fn with_admin(self, token: impl Into<String>, admin: AuthenticatedAdmin) -> Self {
        self.tokens
            .write()
            .expect("mock token map poisoned")
            .insert(token.into(), admin);
        self
    }

    /// Adds a token for `admin@example.com` valid for one hour.
    pub fn with_test_admin(self, token: impl Into<String>) -> Self {
        let admin = AuthenticatedAdmin::new(
            AdminId::new("admin").expect("static admin id is valid"),
            "admin@example.com",
            Timestamp::now().plus_hours(1),
        );
        self.with_admin(token, admin)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().expect("mock error slot poisoned") = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedAdmin, AuthError> {
        if let Some(error) = self.force_error.read().expect("mock error slot poisoned").clone() {
            return Err(error);
        }
        let tokens = self.tokens.read().expect("mock token map poisoned");
        let admin = tokens.get(token).cloned().ok_or(AuthError::InvalidToken)?;
        if admin.expires_at.is_before(&Timestamp::now()) {
            return Err(AuthError::TokenExpired);
        }
        Ok(admin)
    }
}

#[async_trait]
impl SessionIssuer for MockSessionValidator {
    async fn issue(&self, admin: &AdminId, email: &str) -> Result<IssuedSession, AuthError> {
        let mut tokens = self.tokens.write().expect("mock token map poisoned");
        let token = format!("mock-session-{}", tokens.len() + 1);
        let expires_at = Timestamp::now().plus_hours(1);
        tokens.insert(token.clone(), AuthenticatedAdmin::new(admin.clone(), email, expires_at));
        Ok(IssuedSession { token, expires_at })
    }
}
