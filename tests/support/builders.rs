// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use blog_core::domain::entry::{BlogId, EntrySlug, EntryTitle, NewBlogEntry};

use super::mocks::fixed_now;

/// Timestamp `secs` seconds after the fixed test epoch.
pub fn at(secs: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(365) + Duration::seconds(secs)
}

pub struct EntryBuilder {
    blog_id: String,
    slug: String,
    title: String,
    summary: Option<String>,
    content: String,
    published_at: DateTime<Utc>,
    full_content_in_feed: Option<bool>,
}

impl EntryBuilder {
    pub fn new(blog_id: &str, slug: &str) -> Self {
        Self {
            blog_id: blog_id.into(),
            slug: slug.into(),
            title: format!("Entry {slug}"),
            summary: None,
            content: format!("Body of {slug}"),
            published_at: at(0),
            full_content_in_feed: None,
        }
    }

    pub fn published_at(mut self, secs: i64) -> Self {
        self.published_at = at(secs);
        self
    }

    pub fn published(mut self, instant: DateTime<Utc>) -> Self {
        self.published_at = instant;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn full_content_in_feed(mut self, display: bool) -> Self {
        self.full_content_in_feed = Some(display);
        self
    }

    pub fn build(self) -> NewBlogEntry {
        let mut entry = NewBlogEntry::new(
            BlogId::new(self.blog_id).unwrap(),
            EntrySlug::new(self.slug).unwrap(),
            EntryTitle::new(self.title).unwrap(),
            self.content,
            self.published_at,
        );
        if let Some(summary) = self.summary {
            entry = entry.with_summary(summary);
        }
        if let Some(display) = self.full_content_in_feed {
            entry = entry.with_full_content_in_feed(display);
        }
        entry
    }
}
