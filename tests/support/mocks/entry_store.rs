// tests/support/mocks/entry_store.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use blog_core::domain::entry::{
    BlogEntry, BlogEntryStore, BlogEntryWriteStore, BlogId, EntryId, EntrySlug, NewBlogEntry,
};
use blog_core::domain::errors::{DomainError, DomainResult};

/// Entry store kept in a vector, ordering entries the same way the SQLite
/// store does.
#[derive(Default)]
pub struct InMemoryEntryStore {
    entries: Mutex<Vec<BlogEntry>>,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn scoped(&self, blog: &BlogId) -> Vec<BlogEntry> {
        let entries = self.entries.lock().unwrap();
        let mut scoped: Vec<BlogEntry> = entries
            .iter()
            .filter(|e| &e.blog_id == blog)
            .cloned()
            .collect();
        scoped.sort_by_key(BlogEntry::ordering_key);
        scoped
    }
}

#[async_trait]
impl BlogEntryWriteStore for InMemoryEntryStore {
    async fn insert(&self, entry: NewBlogEntry) -> DomainResult<BlogEntry> {
        let mut entries = self.entries.lock().unwrap();
        if entries
            .iter()
            .any(|e| e.blog_id == entry.blog_id && e.slug == entry.slug)
        {
            return Err(DomainError::Conflict("slug already exists in this blog".into()));
        }

        let id = EntryId::new(entries.len() as i64 + 1)?;
        let stored = BlogEntry {
            id,
            blog_id: entry.blog_id,
            slug: entry.slug,
            title: entry.title,
            summary: entry.summary,
            content: entry.content,
            published_at: entry.published_at,
            updated_at: entry.updated_at,
            display_full_content_in_feed: entry.display_full_content_in_feed,
        };
        entries.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl BlogEntryStore for InMemoryEntryStore {
    async fn find_by_slug(
        &self,
        blog: &BlogId,
        slug: &EntrySlug,
    ) -> DomainResult<Option<BlogEntry>> {
        Ok(self.scoped(blog).into_iter().find(|e| &e.slug == slug))
    }

    async fn find_after(
        &self,
        blog: &BlogId,
        reference: &BlogEntry,
    ) -> DomainResult<Option<BlogEntry>> {
        let key = reference.ordering_key();
        Ok(self
            .scoped(blog)
            .into_iter()
            .find(|e| e.ordering_key() > key))
    }

    async fn find_before(
        &self,
        blog: &BlogId,
        reference: &BlogEntry,
    ) -> DomainResult<Option<BlogEntry>> {
        let key = reference.ordering_key();
        Ok(self
            .scoped(blog)
            .into_iter()
            .rev()
            .find(|e| e.ordering_key() < key))
    }

    async fn latest(&self, blog: &BlogId, limit: u32) -> DomainResult<Vec<BlogEntry>> {
        Ok(self
            .scoped(blog)
            .into_iter()
            .rev()
            .take(limit as usize)
            .collect())
    }

    async fn last_published_at(&self, blog: &BlogId) -> DomainResult<Option<DateTime<Utc>>> {
        Ok(self.scoped(blog).last().map(|e| e.published_at))
    }
}

/// Store whose every query fails, for error propagation tests.
pub struct FailingEntryStore;

#[async_trait]
impl BlogEntryStore for FailingEntryStore {
    async fn find_by_slug(&self, _: &BlogId, _: &EntrySlug) -> DomainResult<Option<BlogEntry>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn find_after(&self, _: &BlogId, _: &BlogEntry) -> DomainResult<Option<BlogEntry>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn find_before(&self, _: &BlogId, _: &BlogEntry) -> DomainResult<Option<BlogEntry>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn latest(&self, _: &BlogId, _: u32) -> DomainResult<Vec<BlogEntry>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }

    async fn last_published_at(&self, _: &BlogId) -> DomainResult<Option<DateTime<Utc>>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }
}
