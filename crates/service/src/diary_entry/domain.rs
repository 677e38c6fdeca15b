use chrono::{DateTime, Utc};
use models::diary_entry::{EntryFields, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

/// Diary entry as supplied by a caller on create or update.
///
/// `id` defaults to the unassigned sentinel and `created` to the current time
/// when omitted. `version`, when present, is the token the caller last read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    #[serde(default)]
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

impl DiaryEntry {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { id: UNASSIGNED_ID, title: title.into(), content: content.into(), created: Utc::now(), version: None }
    }

    pub fn fields(&self) -> EntryFields {
        EntryFields { title: self.title.clone(), content: self.content.clone(), created: self.created.into() }
    }
}

impl From<models::diary_entry::Model> for DiaryEntry {
    fn from(m: models::diary_entry::Model) -> Self {
        Self { id: m.id, title: m.title, content: m.content, created: m.created.with_timezone(&Utc), version: Some(m.version) }
    }
}
