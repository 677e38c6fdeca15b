//! Service layer owning the diary entry lifecycle on top of `models`.
//! - Separates business rules (id guard, conflict disambiguation) from data access.
//! - Ships a SeaORM-backed and an in-process repository behind one trait.

pub mod errors;
pub mod diary_entry;
#[cfg(test)]
pub mod test_support;

pub use diary_entry::{DiaryEntry, DiaryEntryService};
