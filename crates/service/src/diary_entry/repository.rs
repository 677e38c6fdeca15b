use async_trait::async_trait;
use models::diary_entry::{EntryFields, Model};

use crate::errors::ServiceError;

/// Result of a version-checked write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(Model),
    /// No row matched id and expected version.
    Stale,
}

/// Store of diary entries supporting optimistic-concurrency writes.
#[async_trait]
pub trait DiaryEntryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    async fn insert(&self, fields: EntryFields) -> Result<Model, ServiceError>;
    async fn replace(&self, id: i32, expected_version: i32, fields: EntryFields) -> Result<WriteOutcome, ServiceError>;
    async fn exists(&self, id: i32) -> Result<bool, ServiceError>;
}
