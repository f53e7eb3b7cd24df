// src/domain/entry/entity.rs
use crate::domain::entry::value_objects::{BlogId, EntryId, EntrySlug, EntryTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogEntry {
    pub id: EntryId,
    pub blog_id: BlogId,
    pub slug: EntrySlug,
    pub title: EntryTitle,
    pub summary: Option<String>,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub display_full_content_in_feed: Option<bool>,
}

impl BlogEntry {
    /// Whether the full content of this entry belongs in a feed, falling back
    /// to the blog-wide `default` when the entry carries no override.
    pub fn display_full_content_in_feed(&self, default: bool) -> bool {
        self.display_full_content_in_feed.unwrap_or(default)
    }

    /// Key that orders entries within a blog. Entries sharing a publish
    /// timestamp are ordered by id.
    pub fn ordering_key(&self) -> (DateTime<Utc>, EntryId) {
        (self.published_at, self.id)
    }
}

#[derive(Debug, Clone)]
pub struct NewBlogEntry {
    pub blog_id: BlogId,
    pub slug: EntrySlug,
    pub title: EntryTitle,
    pub summary: Option<String>,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub display_full_content_in_feed: Option<bool>,
}

impl NewBlogEntry {
    pub fn new(
        blog_id: BlogId,
        slug: EntrySlug,
        title: EntryTitle,
        content: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            blog_id,
            slug,
            title,
            summary: None,
            content: content.into(),
            published_at,
            updated_at: published_at,
            display_full_content_in_feed: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn with_full_content_in_feed(mut self, display: bool) -> Self {
        self.display_full_content_in_feed = Some(display);
        self
    }
}
