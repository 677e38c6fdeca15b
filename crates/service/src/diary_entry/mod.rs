//! Diary entry module: domain, repository, service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::DiaryEntry;
pub use repository::{DiaryEntryRepository, WriteOutcome};
pub use service::DiaryEntryService;
