//! Admin authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Single admin account and session signing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Admin login email
    pub admin_email: String,

    /// Hex SHA-256 digest of the admin password
    pub admin_password_sha256: Secret<String>,

    /// HS256 signing key for session tokens
    pub session_secret: Secret<String>,

    /// Session lifetime in hours
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: i64,

    /// Mark the session cookie `Secure`
    #[serde(default)]
    pub secure_cookies: bool,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production the session cookie must be marked `Secure`.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let email = self.admin_email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ADMIN_EMAIL"));
        }
        if !email.contains('@') {
            return Err(ValidationError::InvalidAdminEmail);
        }

        let digest = self.admin_password_sha256.expose_secret();
        if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidPasswordDigest);
        }

        if self.session_secret.expose_secret().len() < 32 {
            return Err(ValidationError::SessionSecretTooShort);
        }
        if !(1..=720).contains(&self.session_ttl_hours) {
            return Err(ValidationError::InvalidSessionTtl);
        }

        if *environment == Environment::Production && !self.secure_cookies {
            return Err(ValidationError::SecureCookiesRequired);
        }

        Ok(())
    }
}

fn default_session_ttl() -> i64 {
    12
}
