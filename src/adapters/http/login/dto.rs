//! HTTP DTOs for login endpoints.

use serde::Serialize;

use crate::application::handlers::LoginResult;
use crate::domain::foundation::AuthenticatedAdmin;

#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: String,
    pub email: String,
    pub session_expires_at: String,
}

impl From<&AuthenticatedAdmin> for AdminResponse {
    fn from(admin: &AuthenticatedAdmin) -> Self {
        Self {
            id: admin.id.as_str().to_string(),
            email: admin.email.clone(),
            session_expires_at: admin.expires_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Returned by a successful login; the token is also set as a cookie.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
    pub admin: AdminResponse,
}

impl From<&LoginResult> for LoginResponse {
    fn from(result: &LoginResult) -> Self {
        Self {
            token: result.session.token.clone(),
            expires_at: result.session.expires_at.as_datetime().to_rfc3339(),
            admin: AdminResponse::from(&result.admin),
        }
    }
}
