//! Tracker operations on top of the parser and the store.
//!
//! The CLI calls these; they take an open [`Database`](crate::db::Database) so tests
//! can run against an in-memory store.

pub mod clear;
pub mod import;
pub mod list;
pub mod sample;
pub mod status;

pub use clear::{clear_all, ClearResult};
pub use import::{import_text, load_sample, ImportResult};
pub use list::{list_companies, show_company, CompanyEntry, ListResult};
pub use sample::SAMPLE_TEXT;
pub use status::{get_progress, set_status, StatusResult};
