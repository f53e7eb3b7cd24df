// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_entry;

pub use error::map_sqlx;
pub use sqlite_entry::SqliteBlogEntryStore;
