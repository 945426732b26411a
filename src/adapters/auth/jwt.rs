//! HS256 JWT sessions for the admin account.
//!
//! Tokens are signed with the configured session secret and carry the admin
//! id (`sub`), email, issuer and expiry. Validation checks signature, issuer
//! and expiry.

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AdminId, AuthError, AuthenticatedAdmin, Timestamp};
use crate::ports::{IssuedSession, SessionIssuer, SessionValidator};

const ISSUER: &str = "agency-site";

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    email: String,
    iss: String,
    iat: i64,
    exp: i64,
}

/// Issues and validates signed session tokens.
pub struct JwtSessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_hours: i64,
}

impl JwtSessionService {
    pub fn new(secret: &Secret<String>, ttl_hours: i64) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            ttl_hours,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }

    fn issue_at(&self, admin: &AdminId, email: &str, now: Timestamp) -> Result<IssuedSession, AuthError> {
        let expires_at = now.plus_hours(self.ttl_hours);
        let claims = SessionClaims {
            sub: admin.as_str().to_string(),
            email: email.to_string(),
            iss: ISSUER.to_string(),
            iat: now.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::service_unavailable(format!("failed to sign session: {}", e)))?;
        Ok(IssuedSession { token, expires_at })
    }
}

#[async_trait]
impl SessionIssuer for JwtSessionService {
    async fn issue(&self, admin: &AdminId, email: &str) -> Result<IssuedSession, AuthError> {
        self.issue_at(admin, email, Timestamp::now())
    }
}

#[async_trait]
impl SessionValidator for JwtSessionService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedAdmin, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Self::validation()).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Session expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("Session validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        let claims = data.claims;
        let id = AdminId::new(claims.sub).map_err(|_| AuthError::InvalidToken)?;
        let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0)
            .map(Timestamp::from_datetime)
            .ok_or(AuthError::InvalidToken)?;
        Ok(AuthenticatedAdmin::new(id, claims.email, expires_at))
    }
}
