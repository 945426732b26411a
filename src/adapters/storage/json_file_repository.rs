//! JSON-file record storage for local development.
//!
//! Each resource lives in `{data_dir}/{resource}.json` as a JSON array.
//! Read-modify-write cycles are serialized per file and writes go through a
//! temp file + rename so a crash never leaves a truncated array behind.

use async_trait::async_trait;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::{sort_records, DomainError, ErrorCode, Record, RecordId};
use crate::ports::Repository;

/// File-backed repository for one record type.
#[derive(Debug)]
pub struct JsonFileRepository<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

fn storage_error(path: &Path, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::StorageError, format!("{}: {}", path.display(), err))
}

impl<T: Record> JsonFileRepository<T> {
    /// Creates a repository storing into `data_dir/<resource>.json`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", T::RESOURCE)),
            lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<T>, DomainError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error(&self.path, e)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|e| storage_error(&self.path, e))
    }

    async fn persist(&self, records: &[T]) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error(parent, e))?;
        }
        let json = serde_json::to_string_pretty(records).map_err(|e| storage_error(&self.path, e))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await.map_err(|e| storage_error(&tmp, e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| storage_error(&self.path, e))
    }
}

#[async_trait]
impl<T: Record> Repository<T> for JsonFileRepository<T> {
    async fn list(&self) -> Result<Vec<T>, DomainError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        sort_records(&mut records);
        Ok(records)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<T>, DomainError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.into_iter().find(|r| r.id() == id))
    }

    async fn insert(&self, record: &T) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("{} already exists: {}", T::LABEL, record.id()),
            ));
        }
        records.push(record.clone());
        self.persist(&records).await
    }

    async fn update(&self, record: &T) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| DomainError::not_found(T::LABEL, record.id()))?;
        *slot = record.clone();
        self.persist(&records).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(DomainError::not_found(T::LABEL, id));
        }
        self.persist(&records).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{Service, ServiceDraft};
    use crate::domain::crm::{Message, MessageDraft};
    use crate::domain::foundation::Timestamp;
    use tempfile::TempDir;

    fn service(title: &str, order: i32) -> Service {
        let mut service = Service::create(
            RecordId::new(),
            ServiceDraft {
                title: title.into(),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        service.sort_order = order;
        service
    }

    #[tokio::test]
    async fn missing_file_lists_empty() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Service>::new(dir.path());
        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.find_by_id(RecordId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_persists_to_resource_file() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Service>::new(dir.path());
        let seo = service("SEO", 1);
        let design = service("Design", 0);
        repo.insert(&seo).await.unwrap();
        repo.insert(&design).await.unwrap();

        assert!(dir.path().join("services.json").exists());
        let reopened = JsonFileRepository::<Service>::new(dir.path());
        let titles: Vec<_> = reopened.list().await.unwrap().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Design", "SEO"]);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_ids_are_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Service>::new(dir.path());
        let ghost = service("Ghost", 0);

        assert!(repo.update(&ghost).await.unwrap_err().is_not_found());
        assert!(repo.delete(ghost.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn update_replaces_and_delete_removes() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Message>::new(dir.path());
        let mut message = Message::create(
            RecordId::new(),
            MessageDraft {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                body: "Hello".into(),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        repo.insert(&message).await.unwrap();

        message.read = true;
        repo.update(&message).await.unwrap();
        assert!(repo.find_by_id(message.id).await.unwrap().unwrap().read);

        repo.delete(message.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("services.json"), "{not json").unwrap();
        let repo = JsonFileRepository::<Service>::new(dir.path());
        let err = repo.list().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
