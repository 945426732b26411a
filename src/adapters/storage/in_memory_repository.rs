//! In-memory record storage for tests.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{sort_records, DomainError, ErrorCode, Record, RecordId};
use crate::ports::Repository;

/// Vec-backed repository. Poisoned locks surface as storage errors.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the repository with existing records.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::StorageError, "in-memory store lock poisoned")
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, DomainError> {
        let mut records = self.records.read().map_err(|_| poisoned())?.clone();
        sort_records(&mut records);
        Ok(records)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<T>, DomainError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, record: &T) -> Result<(), DomainError> {
        self.records.write().map_err(|_| poisoned())?.push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &T) -> Result<(), DomainError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| DomainError::not_found(T::LABEL, record.id()))?;
        *slot = record.clone();
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(DomainError::not_found(T::LABEL, id));
        }
        Ok(())
    }
}
