//! CrudHandler - Generic create/read/update/delete over a record repository.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Ordered, Record, RecordId, Timestamp};
use crate::ports::Repository;

/// Command/query handler shared by every back-office resource.
pub struct CrudHandler<T: Record> {
    repository: Arc<dyn Repository<T>>,
}

impl<T: Record> Clone for CrudHandler<T> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<T: Record> CrudHandler<T> {
    pub fn new(repository: Arc<dyn Repository<T>>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<T>, DomainError> {
        self.repository.list().await
    }

    /// Returns the record or a `NotFound` error.
    pub async fn get(&self, id: RecordId) -> Result<T, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(T::LABEL, id))
    }

    /// Validates the draft and inserts it under a generated id.
    pub async fn create(&self, draft: T::Draft) -> Result<T, DomainError> {
        let record = T::create(RecordId::new(), draft, Timestamp::now())?;
        self.repository.insert(&record).await?;
        tracing::info!(resource = T::RESOURCE, id = %record.id(), "record created");
        Ok(record)
    }

    /// Replaces the editable fields of an existing record.
    pub async fn update(&self, id: RecordId, draft: T::Draft) -> Result<T, DomainError> {
        let mut record = self.get(id).await?;
        record.revise(draft, Timestamp::now())?;
        self.repository.update(&record).await?;
        tracing::info!(resource = T::RESOURCE, id = %id, "record updated");
        Ok(record)
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        self.repository.delete(id).await?;
        tracing::info!(resource = T::RESOURCE, id = %id, "record deleted");
        Ok(())
    }
}

/// Outcome of a drag-and-drop reorder.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReorderResult {
    pub updated: usize,
    /// Ids that matched no record.
    pub skipped: Vec<RecordId>,
}

impl<T: Ordered> CrudHandler<T> {
    /// Creates a record placed after every existing one.
    pub async fn create_ordered(&self, draft: T::Draft) -> Result<T, DomainError> {
        let now = Timestamp::now();
        let mut record = T::create(RecordId::new(), draft, now)?;
        let next = self
            .repository
            .list()
            .await?
            .iter()
            .map(|r| r.sort_order())
            .max()
            .map_or(0, |max| max + 1);
        record.set_sort_order(next, now);
        self.repository.insert(&record).await?;
        tracing::info!(resource = T::RESOURCE, id = %record.id(), sort_order = next, "record created");
        Ok(record)
    }

    /// Sets each listed record's `sort_order` to its index in `ids`.
    ///
    /// Unknown ids are skipped with a warning. There is no transaction:
    /// concurrent reorders interleave and the last write wins.
    pub async fn reorder(&self, ids: &[RecordId]) -> Result<ReorderResult, DomainError> {
        let now = Timestamp::now();
        let mut result = ReorderResult::default();

        for (index, id) in ids.iter().enumerate() {
            let Some(mut record) = self.repository.find_by_id(*id).await? else {
                tracing::warn!(resource = T::RESOURCE, id = %id, "reorder skipped unknown id");
                result.skipped.push(*id);
                continue;
            };
            let order = i32::try_from(index).unwrap_or(i32::MAX);
            if record.sort_order() == order {
                continue;
            }
            record.set_sort_order(order, now);
            match self.repository.update(&record).await {
                Ok(()) => result.updated += 1,
                Err(e) if e.is_not_found() => {
                    tracing::warn!(resource = T::RESOURCE, id = %id, "record vanished during reorder");
                    result.skipped.push(*id);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(result)
    }
}
