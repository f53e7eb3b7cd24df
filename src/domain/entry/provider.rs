// src/domain/entry/provider.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::application::ports::time::Clock;
use crate::domain::entry::entity::BlogEntry;
use crate::domain::entry::repository::BlogEntryStore;
use crate::domain::entry::value_objects::{BlogId, EntrySlug};
use crate::domain::errors::DomainResult;

pub const DEFAULT_LATEST_LIMIT: u32 = 5;

/// Entry retrieval for a single blog.
///
/// A provider is bound to exactly one blog id when it is created and never
/// answers for any other blog.
#[async_trait]
pub trait BlogEntryProvider: Send + Sync {
    fn blog_id(&self) -> &BlogId;

    async fn find_by_slug(&self, slug: &EntrySlug) -> DomainResult<Option<BlogEntry>>;

    /// The chronologically next entry, or `None` when `entry` is the newest.
    async fn next_entry(&self, entry: &BlogEntry) -> DomainResult<Option<BlogEntry>>;

    /// The chronologically previous entry, or `None` when `entry` is the oldest.
    async fn previous_entry(&self, entry: &BlogEntry) -> DomainResult<Option<BlogEntry>>;

    /// Newest entries first. `None` uses [`DEFAULT_LATEST_LIMIT`].
    async fn latest(&self, limit: Option<u32>) -> DomainResult<Vec<BlogEntry>>;

    /// Freshness marker for feeds and caches.
    async fn get_updated(&self) -> DomainResult<DateTime<Utc>>;
}

/// Provider backed by a [`BlogEntryStore`]; one store query per call.
pub struct StoreEntryProvider {
    blog_id: BlogId,
    store: Arc<dyn BlogEntryStore>,
    clock: Arc<dyn Clock>,
}

impl StoreEntryProvider {
    pub fn new(blog_id: BlogId, store: Arc<dyn BlogEntryStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            blog_id,
            store,
            clock,
        }
    }

    fn belongs_here(&self, entry: &BlogEntry) -> bool {
        entry.blog_id == self.blog_id
    }
}

#[async_trait]
impl BlogEntryProvider for StoreEntryProvider {
    fn blog_id(&self) -> &BlogId {
        &self.blog_id
    }

    async fn find_by_slug(&self, slug: &EntrySlug) -> DomainResult<Option<BlogEntry>> {
        self.store.find_by_slug(&self.blog_id, slug).await
    }

    async fn next_entry(&self, entry: &BlogEntry) -> DomainResult<Option<BlogEntry>> {
        if !self.belongs_here(entry) {
            tracing::debug!(blog = %self.blog_id, entry_blog = %entry.blog_id, "next_entry for foreign entry");
        }
        self.store.find_after(&self.blog_id, entry).await
    }

    async fn previous_entry(&self, entry: &BlogEntry) -> DomainResult<Option<BlogEntry>> {
        if !self.belongs_here(entry) {
            tracing::debug!(blog = %self.blog_id, entry_blog = %entry.blog_id, "previous_entry for foreign entry");
        }
        self.store.find_before(&self.blog_id, entry).await
    }

    async fn latest(&self, limit: Option<u32>) -> DomainResult<Vec<BlogEntry>> {
        let limit = limit.unwrap_or(DEFAULT_LATEST_LIMIT);
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.store.latest(&self.blog_id, limit).await
    }

    async fn get_updated(&self) -> DomainResult<DateTime<Utc>> {
        let updated = self.store.last_published_at(&self.blog_id).await?;
        Ok(updated.unwrap_or_else(|| self.clock.now()))
    }
}
