//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresRepository<T>` - Generic record storage, one table per resource
//! - `connect` - Pool construction from `DatabaseConfig`, with optional migrations

mod records;
mod repository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

pub use repository::{PgQuery, PgRecord, PostgresRepository};

/// Opens the connection pool and runs embedded migrations when enabled.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Failed to connect: {}", e)))?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Migration failed: {}", e)))?;
        tracing::info!("database migrations applied");
    }

    Ok(pool)
}
