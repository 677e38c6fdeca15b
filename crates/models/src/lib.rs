pub mod errors;
pub mod db;
pub mod diary_entry;
