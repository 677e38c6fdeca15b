use std::sync::Arc;

use service::diary_entry::{DiaryEntryRepository, DiaryEntryService};

/// Shared handler state. The repository is picked at startup, so the service
/// is held behind a trait object.
#[derive(Clone)]
pub struct AppState {
    pub diary: DiaryEntryService<dyn DiaryEntryRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn DiaryEntryRepository>) -> Self {
        Self { diary: DiaryEntryService::new(repo) }
    }
}
