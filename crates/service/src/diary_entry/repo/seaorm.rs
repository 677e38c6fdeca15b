use async_trait::async_trait;
use models::diary_entry::{self, EntryFields, Model};
use sea_orm::DatabaseConnection;

use crate::diary_entry::repository::{DiaryEntryRepository, WriteOutcome};
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmDiaryEntryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmDiaryEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl DiaryEntryRepository for SeaOrmDiaryEntryRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        Ok(diary_entry::list(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        Ok(diary_entry::find(&self.db, id).await?)
    }

    async fn insert(&self, fields: EntryFields) -> Result<Model, ServiceError> {
        Ok(diary_entry::insert(&self.db, fields).await?)
    }

    async fn replace(&self, id: i32, expected_version: i32, fields: EntryFields) -> Result<WriteOutcome, ServiceError> {
        let updated = diary_entry::replace_if_version(&self.db, id, expected_version, fields).await?;
        Ok(match updated {
            Some(m) => WriteOutcome::Written(m),
            None => WriteOutcome::Stale,
        })
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(diary_entry::exists(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::Utc;
    use sea_orm::EntityTrait;

    fn fields(title: &str) -> EntryFields {
        EntryFields { title: title.into(), content: "svc".into(), created: Utc::now().into() }
    }

    #[tokio::test]
    async fn seaorm_repository_reports_stale_writes() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmDiaryEntryRepository::new(db.clone());

        let a = repo.insert(fields("repo")).await?;
        assert_eq!(repo.get(a.id).await?.map(|m| m.title), Some("repo".to_string()));

        let outcome = repo.replace(a.id, a.version, fields("repo 2")).await?;
        assert!(matches!(outcome, WriteOutcome::Written(ref m) if m.version == a.version + 1));
        assert_eq!(repo.replace(a.id, a.version, fields("repo 3")).await?, WriteOutcome::Stale);
        assert!(repo.exists(a.id).await?);

        // cleanup
        diary_entry::Entity::delete_by_id(a.id).exec(&db).await?;
        assert!(!repo.exists(a.id).await?);
        Ok(())
    }
}
