//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Invalid admin email address")]
    InvalidAdminEmail,

    #[error("Admin password digest must be 64 hex characters (SHA-256)")]
    InvalidPasswordDigest,

    #[error("Session secret must be at least 32 bytes")]
    SessionSecretTooShort,

    #[error("Session TTL must be between 1 and 720 hours")]
    InvalidSessionTtl,

    #[error("Secure cookies are required in production")]
    SecureCookiesRequired,

    #[error("Maximum upload size must be greater than zero")]
    InvalidUploadLimit,

    #[error("Invalid AI base URL")]
    InvalidAiBaseUrl,

    #[error("AI model list is empty")]
    NoModelsConfigured,

    #[error("Invalid viewport size")]
    InvalidViewport,

    #[error("Navigation timeout must be between 1 and 300 seconds")]
    InvalidNavigationTimeout,
}
