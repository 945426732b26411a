//! Generic persistence port for back-office records.
//!
//! Every resource (posts, clients, payables, ...) is stored through the same
//! contract. Adapters exist for Postgres, JSON files and memory.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Record, RecordId};

/// CRUD storage for one record type.
///
/// # Contract
///
/// - `list` returns every record, ordered by `Record::list_order`
/// - `update` and `delete` return a `NotFound` error when the id is absent
/// - infrastructure failures surface as `DatabaseError` or `StorageError`
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, DomainError>;

    /// Returns `Ok(None)` if the record doesn't exist.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<T>, DomainError>;

    async fn insert(&self, record: &T) -> Result<(), DomainError>;

    async fn update(&self, record: &T) -> Result<(), DomainError>;

    async fn delete(&self, id: RecordId) -> Result<(), DomainError>;
}

