//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AGENCY_SITE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use agency_site::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Storage backend: {}", config.storage_backend());
//! ```

mod ai;
mod analyzer;
mod auth;
mod database;
mod error;
mod server;
mod site;
mod storage;

pub use ai::{AiConfig, AiProvider};
pub use analyzer::AnalyzerConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use site::SiteConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection; absent means the JSON file store
    pub database: Option<DatabaseConfig>,

    /// JSON store, uploads and admin asset locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// Admin account and session signing
    pub auth: AuthConfig,

    /// Vision model provider for the analyzer
    #[serde(default)]
    pub ai: AiConfig,

    /// Analyzer capture settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Public site identity
    #[serde(default)]
    pub site: SiteConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AGENCY_SITE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AGENCY_SITE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AGENCY_SITE__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AGENCY_SITE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.storage.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ai.validate()?;
        self.analyzer.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Name of the persistence backend, as reported by `/health`.
    pub fn storage_backend(&self) -> &'static str {
        if self.database.is_some() {
            "postgres"
        } else {
            "json"
        }
    }
}
