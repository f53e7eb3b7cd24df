use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::domain::blog::{Author, Blog, MetaTagBag};
use crate::domain::entry::BlogEntry;
use crate::domain::errors::DomainResult;

fn in_blog_time(blog: &Blog, time: DateTime<Utc>) -> DateTime<FixedOffset> {
    time.with_timezone(&blog.timezone()).fixed_offset()
}

/// Blog-wide data every page of a blog renders.
#[derive(Debug, Clone, Serialize)]
pub struct BlogHeaderDto {
    pub id: String,
    pub title: String,
    pub page_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub index_url: String,
    pub stylesheets: Vec<String>,
    pub authors: Vec<Author>,
    pub timezone: String,
}

impl BlogHeaderDto {
    pub fn from_blog(blog: &Blog) -> DomainResult<Self> {
        Ok(Self {
            id: blog.id().to_string(),
            title: blog.title().to_string(),
            page_title: blog.page_title().to_string(),
            description: blog.description(),
            index_url: blog.index_url()?,
            stylesheets: blog.stylesheet_urls().to_vec(),
            authors: blog.authors(),
            timezone: blog.timezone().name().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummaryDto {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub url: String,
    pub published_at: DateTime<FixedOffset>,
}

impl EntrySummaryDto {
    pub fn from_entry(blog: &Blog, entry: &BlogEntry) -> DomainResult<Self> {
        Ok(Self {
            slug: entry.slug.to_string(),
            title: entry.title.to_string(),
            summary: entry.summary.clone(),
            url: blog.entry_url(entry)?,
            published_at: in_blog_time(blog, entry.published_at),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryDto {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub content: String,
    pub url: String,
    pub published_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl EntryDto {
    pub fn from_entry(blog: &Blog, entry: &BlogEntry) -> DomainResult<Self> {
        Ok(Self {
            slug: entry.slug.to_string(),
            title: entry.title.to_string(),
            summary: entry.summary.clone(),
            content: entry.content.clone(),
            url: blog.entry_url(entry)?,
            published_at: in_blog_time(blog, entry.published_at),
            updated_at: in_blog_time(blog, entry.updated_at),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexPageDto {
    pub blog: BlogHeaderDto,
    pub meta_tags: MetaTagBag,
    pub entries: Vec<EntrySummaryDto>,
    pub updated: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryPageDto {
    pub blog: BlogHeaderDto,
    pub page_title: String,
    pub meta_tags: MetaTagBag,
    pub entry: EntryDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<EntrySummaryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<EntrySummaryDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedItemDto {
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Only present when the blog (or the entry itself) allows full content in feeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub published_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl FeedItemDto {
    pub fn from_entry(blog: &Blog, entry: &BlogEntry) -> DomainResult<Self> {
        let content = blog
            .display_full_entry_in_feed(Some(entry))
            .then(|| entry.content.clone());
        Ok(Self {
            url: blog.entry_url(entry)?,
            title: entry.title.to_string(),
            summary: entry.summary.clone(),
            content,
            published_at: in_blog_time(blog, entry.published_at),
            updated_at: in_blog_time(blog, entry.updated_at),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub updated: DateTime<FixedOffset>,
    pub authors: Vec<Author>,
    pub items: Vec<FeedItemDto>,
}
