use super::map_sqlx;
use crate::domain::entry::{
    BlogEntry, BlogEntryStore, BlogEntryWriteStore, BlogId, EntryId, EntrySlug, EntryTitle,
    NewBlogEntry,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const COLUMNS: &str = "id, blog_id, slug, title, summary, content, published_at, updated_at, display_full_content_in_feed";

// Publish times are compared as instants. Rows written by other tools may use
// SQLite's `YYYY-MM-DD HH:MM:SS` layout instead of RFC 3339.
const PUBLISHED: &str = "julianday(published_at)";

#[derive(Clone)]
pub struct SqliteBlogEntryStore {
    pool: Arc<SqlitePool>,
}

impl SqliteBlogEntryStore {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogEntryRow {
    id: i64,
    blog_id: String,
    slug: String,
    title: String,
    summary: Option<String>,
    content: String,
    published_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    display_full_content_in_feed: Option<bool>,
}

impl TryFrom<BlogEntryRow> for BlogEntry {
    type Error = DomainError;

    fn try_from(row: BlogEntryRow) -> Result<Self, Self::Error> {
        Ok(BlogEntry {
            id: EntryId::new(row.id)?,
            blog_id: BlogId::new(row.blog_id)?,
            slug: EntrySlug::new(row.slug)?,
            title: EntryTitle::new(row.title)?,
            summary: row.summary,
            content: row.content,
            published_at: row.published_at,
            updated_at: row.updated_at,
            display_full_content_in_feed: row.display_full_content_in_feed,
        })
    }
}

#[async_trait]
impl BlogEntryWriteStore for SqliteBlogEntryStore {
    async fn insert(&self, entry: NewBlogEntry) -> DomainResult<BlogEntry> {
        let NewBlogEntry {
            blog_id,
            slug,
            title,
            summary,
            content,
            published_at,
            updated_at,
            display_full_content_in_feed,
        } = entry;

        let sql = format!(
            "INSERT INTO blog_entries (blog_id, slug, title, summary, content, published_at, updated_at, display_full_content_in_feed) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, BlogEntryRow>(&sql)
            .bind(blog_id.as_str())
            .bind(slug.as_str())
            .bind(title.as_str())
            .bind(summary)
            .bind(content)
            .bind(published_at)
            .bind(updated_at)
            .bind(display_full_content_in_feed)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        BlogEntry::try_from(row)
    }
}

#[async_trait]
impl BlogEntryStore for SqliteBlogEntryStore {
    async fn find_by_slug(
        &self,
        blog: &BlogId,
        slug: &EntrySlug,
    ) -> DomainResult<Option<BlogEntry>> {
        let sql = format!("SELECT {COLUMNS} FROM blog_entries WHERE blog_id = ? AND slug = ?");
        let row = sqlx::query_as::<_, BlogEntryRow>(&sql)
            .bind(blog.as_str())
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(BlogEntry::try_from).transpose()
    }

    async fn find_after(
        &self,
        blog: &BlogId,
        reference: &BlogEntry,
    ) -> DomainResult<Option<BlogEntry>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM blog_entries WHERE blog_id = ? AND ({PUBLISHED} > julianday(?) OR ({PUBLISHED} = julianday(?) AND id > ?)) ORDER BY {PUBLISHED} ASC, id ASC LIMIT 1"
        );
        let row = sqlx::query_as::<_, BlogEntryRow>(&sql)
            .bind(blog.as_str())
            .bind(reference.published_at)
            .bind(reference.published_at)
            .bind(i64::from(reference.id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(BlogEntry::try_from).transpose()
    }

    async fn find_before(
        &self,
        blog: &BlogId,
        reference: &BlogEntry,
    ) -> DomainResult<Option<BlogEntry>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM blog_entries WHERE blog_id = ? AND ({PUBLISHED} < julianday(?) OR ({PUBLISHED} = julianday(?) AND id < ?)) ORDER BY {PUBLISHED} DESC, id DESC LIMIT 1"
        );
        let row = sqlx::query_as::<_, BlogEntryRow>(&sql)
            .bind(blog.as_str())
            .bind(reference.published_at)
            .bind(reference.published_at)
            .bind(i64::from(reference.id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(BlogEntry::try_from).transpose()
    }

    async fn latest(&self, blog: &BlogId, limit: u32) -> DomainResult<Vec<BlogEntry>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM blog_entries WHERE blog_id = ? ORDER BY {PUBLISHED} DESC, id DESC LIMIT ?"
        );
        let rows = sqlx::query_as::<_, BlogEntryRow>(&sql)
            .bind(blog.as_str())
            .bind(i64::from(limit))
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        tracing::debug!(blog = %blog, limit, fetched = rows.len(), "latest entries");

        rows.into_iter()
            .map(BlogEntry::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn last_published_at(&self, blog: &BlogId) -> DomainResult<Option<DateTime<Utc>>> {
        let sql = format!(
            "SELECT published_at FROM blog_entries WHERE blog_id = ? ORDER BY {PUBLISHED} DESC, id DESC LIMIT 1"
        );
        sqlx::query_scalar::<_, DateTime<Utc>>(&sql)
            .bind(blog.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)
    }
}
