//! Generic PostgreSQL implementation of the record repository.
//!
//! Each record type maps to one table named after its resource. Column
//! order is declared once by `PgRecord::COLUMNS`; the first column is always
//! `id`, and `bind` must push values in the same order.

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Decode, PgPool, Postgres, Row, Type};
use std::marker::PhantomData;

use crate::domain::foundation::{sort_records, DomainError, ErrorCode, Record, RecordId};
use crate::ports::Repository;

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Row mapping for a record stored in its own table.
pub trait PgRecord: Record {
    const COLUMNS: &'static [&'static str];

    /// Binds every column value, in `COLUMNS` order.
    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;

    fn from_row(row: &PgRow) -> Result<Self, DomainError>;
}

/// Reads one column, mapping decode failures to a database error.
pub(crate) fn column<'r, V>(row: &'r PgRow, name: &str) -> Result<V, DomainError>
where
    V: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to read column {}: {}", name, e),
        )
    })
}

fn database_error(action: &str, label: &str, err: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to {} {}: {}", action, label.to_lowercase(), err),
    )
}

/// PostgreSQL repository for one record type.
pub struct PostgresRepository<T> {
    pool: PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for PostgresRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: PgRecord> PostgresRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!("SELECT {} FROM {}", T::COLUMNS.join(", "), T::RESOURCE)
    }

    fn insert_sql() -> String {
        let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("${}", i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::RESOURCE,
            T::COLUMNS.join(", "),
            placeholders.join(", ")
        )
    }

    fn update_sql() -> String {
        let assignments: Vec<String> = T::COLUMNS
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, col)| format!("{} = ${}", col, i + 1))
            .collect();
        format!("UPDATE {} SET {} WHERE id = $1", T::RESOURCE, assignments.join(", "))
    }
}

#[async_trait]
impl<T: PgRecord> Repository<T> for PostgresRepository<T> {
    async fn list(&self) -> Result<Vec<T>, DomainError> {
        let sql = Self::select_sql();
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("list", T::RESOURCE, e))?;

        let mut records = rows.iter().map(T::from_row).collect::<Result<Vec<_>, _>>()?;
        sort_records(&mut records);
        Ok(records)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<T>, DomainError> {
        let sql = format!("{} WHERE id = $1", Self::select_sql());
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find", T::LABEL, e))?;

        row.as_ref().map(T::from_row).transpose()
    }

    async fn insert(&self, record: &T) -> Result<(), DomainError> {
        let sql = Self::insert_sql();
        record
            .bind(sqlx::query(&sql))
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("insert", T::LABEL, e))?;
        Ok(())
    }

    async fn update(&self, record: &T) -> Result<(), DomainError> {
        let sql = Self::update_sql();
        let result = record
            .bind(sqlx::query(&sql))
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("update", T::LABEL, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(T::LABEL, record.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::RESOURCE);
        let result = sqlx::query(&sql)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete", T::LABEL, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(T::LABEL, id));
        }
        Ok(())
    }
}
