use std::collections::BTreeMap;

use async_trait::async_trait;
use models::diary_entry::{EntryFields, Model, INITIAL_VERSION};
use tokio::sync::RwLock;

use crate::diary_entry::repository::{DiaryEntryRepository, WriteOutcome};
use crate::errors::ServiceError;

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Model>,
}

/// In-process repository with the same version-check semantics as the
/// database one. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryDiaryEntryRepository {
    table: RwLock<Table>,
}

impl InMemoryDiaryEntryRepository {
    pub fn new() -> Self { Self::default() }

    /// Drop a row. Only reachable from tests to simulate an out-of-band delete.
    #[cfg(test)]
    pub(crate) async fn remove(&self, id: i32) -> Option<Model> {
        self.table.write().await.rows.remove(&id)
    }
}

#[async_trait]
impl DiaryEntryRepository for InMemoryDiaryEntryRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, fields: EntryFields) -> Result<Model, ServiceError> {
        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Db("diary_entry id space exhausted".into()))?;
        table.last_id = id;
        let row = Model { id, title: fields.title, content: fields.content, created: fields.created, version: INITIAL_VERSION };
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn replace(&self, id: i32, expected_version: i32, fields: EntryFields) -> Result<WriteOutcome, ServiceError> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else { return Ok(WriteOutcome::Stale) };
        if row.version != expected_version {
            return Ok(WriteOutcome::Stale);
        }
        let next_version = row
            .version
            .checked_add(1)
            .ok_or_else(|| ServiceError::Db(format!("diary_entry {} version space exhausted", id)))?;
        row.title = fields.title;
        row.content = fields.content;
        row.created = fields.created;
        row.version = next_version;
        Ok(WriteOutcome::Written(row.clone()))
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        let table = self.table.read().await;
        Ok(table.rows.contains_key(&id))
    }
}
