//! LoginHandler - Exchanges admin credentials for a session token.

use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::domain::foundation::{AdminId, AuthError, AuthenticatedAdmin};
use crate::ports::{IssuedSession, SessionIssuer};

/// The single configured administrator account.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    email: String,
    /// Lowercase hex SHA-256 of the password.
    password_sha256: Secret<String>,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password_sha256: Secret<String>) -> Self {
        let digest = password_sha256.expose_secret().trim().to_ascii_lowercase();
        Self {
            email: email.into().trim().to_string(),
            password_sha256: Secret::new(digest),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Email is compared case-insensitively; the password digest in constant time.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        let email_ok = self.email.eq_ignore_ascii_case(email.trim());
        let digest = sha256_hex(password);
        let password_ok: bool = digest
            .as_bytes()
            .ct_eq(self.password_sha256.expose_secret().as_bytes())
            .into();
        email_ok && password_ok
    }
}

/// Lowercase hex SHA-256 of `input`.
pub fn sha256_hex(input: &str) -> String {
    Sha256::digest(input.as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginCommand {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub admin: AuthenticatedAdmin,
    pub session: IssuedSession,
}

pub struct LoginHandler {
    credentials: AdminCredentials,
    issuer: Arc<dyn SessionIssuer>,
}

impl LoginHandler {
    pub const ADMIN_ID: &'static str = "admin";

    pub fn new(credentials: AdminCredentials, issuer: Arc<dyn SessionIssuer>) -> Self {
        Self { credentials, issuer }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthError> {
        if !self.credentials.verify(&cmd.email, &cmd.password) {
            tracing::warn!("admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let id = AdminId::new(Self::ADMIN_ID).map_err(|e| AuthError::service_unavailable(e.to_string()))?;
        let session = self.issuer.issue(&id, self.credentials.email()).await?;
        tracing::info!(expires_at = session.expires_at.as_unix_secs(), "admin signed in");

        Ok(LoginResult {
            admin: AuthenticatedAdmin::new(id, self.credentials.email(), session.expires_at),
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::ports::SessionValidator;

    fn credentials() -> AdminCredentials {
        AdminCredentials::new("owner@example.com", Secret::new(sha256_hex("hunter2").to_uppercase()))
    }

    #[test]
    fn sha256_hex_matches_known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn verify_checks_email_and_password() {
        let creds = credentials();
        assert!(creds.verify("Owner@Example.com", "hunter2"));
        assert!(!creds.verify("owner@example.com", "hunter3"));
        assert!(!creds.verify("other@example.com", "hunter2"));
    }

    #[tokio::test]
    async fn successful_login_issues_valid_session() {
        let sessions = Arc::new(MockSessionValidator::new());
        let handler = LoginHandler::new(credentials(), sessions.clone());

        let result = handler
            .handle(LoginCommand {
                email: "owner@example.com".into(),
                password: "hunter2".into(),
            })
            .await
            .unwrap();

        let admin = sessions.validate(&result.session.token).await.unwrap();
        assert_eq!(admin.email, "owner@example.com");
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let handler = LoginHandler::new(credentials(), Arc::new(MockSessionValidator::new()));
        let err = handler
            .handle(LoginCommand {
                email: "owner@example.com".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }
}
