use std::sync::Arc;

use models::diary_entry::{Model, UNASSIGNED_ID};
use tracing::{debug, info, instrument, warn};

use super::domain::DiaryEntry;
use super::repository::{DiaryEntryRepository, WriteOutcome};
use crate::errors::ServiceError;

const ENTITY: &str = "diary_entry";

/// Lifecycle of diary entries: list, get, create, full-replace update.
/// Holds no state between calls; concurrency is delegated to the store's
/// version check.
pub struct DiaryEntryService<R: DiaryEntryRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: DiaryEntryRepository + ?Sized> Clone for DiaryEntryService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: DiaryEntryRepository + ?Sized> DiaryEntryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_all(&self) -> Result<Vec<Model>, ServiceError> {
        let rows = self.repo.list().await?;
        debug!(count = rows.len(), "listed diary entries");
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    /// Persist a new entry. Any id on the input is discarded so the store
    /// always assigns a fresh one.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::diary_entry::{repo::InMemoryDiaryEntryRepository, DiaryEntry, DiaryEntryService};
    /// let svc = DiaryEntryService::new(Arc::new(InMemoryDiaryEntryRepository::new()));
    /// let mut entry = DiaryEntry::new("Day 1", "sunny");
    /// entry.id = 42;
    /// let created = tokio_test::block_on(svc.create(entry)).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(created.title, "Day 1");
    /// ```
    #[instrument(skip(self, entry), fields(requested_id = entry.id))]
    pub async fn create(&self, mut entry: DiaryEntry) -> Result<Model, ServiceError> {
        entry.id = UNASSIGNED_ID;
        let created = self.repo.insert(entry.fields()).await?;
        info!(id = created.id, "diary_entry_created");
        Ok(created)
    }

    /// Replace every user field of entry `id`.
    ///
    /// The write is conditional on the version the caller supplied, or on the
    /// version read just before writing when none was supplied. A stale write
    /// is `NotFound` if the row is gone and `Conflict` if another writer got
    /// there first.
    #[instrument(skip(self, entry), fields(id = id, body_id = entry.id))]
    pub async fn update(&self, id: i32, entry: DiaryEntry) -> Result<(), ServiceError> {
        if entry.id != id {
            return Err(ServiceError::BadRequest(format!("path id {} does not match body id {}", id, entry.id)));
        }

        let expected_version = match entry.version {
            Some(v) => v,
            None => match self.repo.get(id).await? {
                Some(current) => current.version,
                None => return Err(ServiceError::not_found(ENTITY, id)),
            },
        };

        match self.repo.replace(id, expected_version, entry.fields()).await? {
            WriteOutcome::Written(m) => {
                info!(id = m.id, version = m.version, "diary_entry_updated");
                Ok(())
            }
            WriteOutcome::Stale => {
                if !self.repo.exists(id).await? {
                    return Err(ServiceError::not_found(ENTITY, id));
                }
                warn!(id, expected_version, "diary_entry_update_conflict");
                Err(ServiceError::Conflict(format!(
                    "{} {} was modified by another writer (expected version {})",
                    ENTITY, id, expected_version
                )))
            }
        }
    }
}
