use crate::domain::entry::entity::{BlogEntry, NewBlogEntry};
use crate::domain::entry::value_objects::{BlogId, EntrySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read access to persisted entries. Every query is scoped to one blog and
/// orders entries by `(published_at, id)`.
#[async_trait]
pub trait BlogEntryStore: Send + Sync {
    async fn find_by_slug(&self, blog: &BlogId, slug: &EntrySlug)
    -> DomainResult<Option<BlogEntry>>;

    /// First entry whose ordering key is strictly greater than `reference`'s.
    async fn find_after(&self, blog: &BlogId, reference: &BlogEntry)
    -> DomainResult<Option<BlogEntry>>;

    /// Last entry whose ordering key is strictly less than `reference`'s.
    async fn find_before(
        &self,
        blog: &BlogId,
        reference: &BlogEntry,
    ) -> DomainResult<Option<BlogEntry>>;

    /// Up to `limit` entries, newest first.
    async fn latest(&self, blog: &BlogId, limit: u32) -> DomainResult<Vec<BlogEntry>>;

    async fn last_published_at(&self, blog: &BlogId) -> DomainResult<Option<DateTime<Utc>>>;
}

#[async_trait]
pub trait BlogEntryWriteStore: Send + Sync {
    async fn insert(&self, entry: NewBlogEntry) -> DomainResult<BlogEntry>;
}
