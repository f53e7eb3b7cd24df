pub mod entity;
pub mod provider;
pub mod repository;
pub mod value_objects;

pub use entity::{BlogEntry, NewBlogEntry};
pub use provider::{BlogEntryProvider, DEFAULT_LATEST_LIMIT, StoreEntryProvider};
pub use repository::{BlogEntryStore, BlogEntryWriteStore};
pub use value_objects::{BlogId, EntryId, EntrySlug, EntryTitle};
