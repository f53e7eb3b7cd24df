// tests/support/helpers.rs
use std::sync::Arc;

use blog_core::application::ports::{ClockPort, UrlGeneratorPort};
use blog_core::domain::blog::Blog;
use blog_core::domain::entry::{
    BlogEntry, BlogEntryStore, BlogEntryWriteStore, BlogId, StoreEntryProvider,
};

use super::builders::EntryBuilder;
use super::mocks::{FixedClock, InMemoryEntryStore, TestUrls};

pub fn blog_id(id: &str) -> BlogId {
    BlogId::new(id).unwrap()
}

pub fn clock() -> Arc<ClockPort> {
    Arc::new(FixedClock)
}

pub fn urls() -> Arc<UrlGeneratorPort> {
    Arc::new(TestUrls)
}

/// Insert `(slug, seconds)` pairs into `blog`, returning the stored entries
/// in insertion order.
pub async fn seed(
    store: &dyn BlogEntryWriteStore,
    blog: &str,
    entries: &[(&str, i64)],
) -> Vec<BlogEntry> {
    let mut stored = Vec::with_capacity(entries.len());
    for (slug, secs) in entries {
        let entry = EntryBuilder::new(blog, slug).published_at(*secs).build();
        stored.push(store.insert(entry).await.unwrap());
    }
    stored
}

pub fn provider_for(store: &Arc<InMemoryEntryStore>, blog: &str) -> StoreEntryProvider {
    let store: Arc<dyn BlogEntryStore> = Arc::clone(store) as Arc<dyn BlogEntryStore>;
    StoreEntryProvider::new(blog_id(blog), store, clock())
}

pub fn blog_on(store: &Arc<InMemoryEntryStore>, id: &str) -> Blog {
    let store: Arc<dyn BlogEntryStore> = Arc::clone(store) as Arc<dyn BlogEntryStore>;
    Blog::from_store(blog_id(id), store, clock(), urls())
}

pub fn empty_blog(id: &str) -> Blog {
    blog_on(&Arc::new(InMemoryEntryStore::new()), id)
}

pub fn slugs(entries: &[BlogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.slug.as_str()).collect()
}
