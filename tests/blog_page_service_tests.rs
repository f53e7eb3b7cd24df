use std::sync::Arc;

mod support;

use blog_core::application::queries::pages::{ShowEntryQuery, ShowFeedQuery, ShowIndexQuery};
use blog_core::application::services::ApplicationServices;
use blog_core::domain::blog::{BlogDefinition, MetaTag};
use blog_core::domain::entry::{BlogEntryStore, BlogEntryWriteStore};
use support::*;

async fn services() -> ApplicationServices {
    let store = Arc::new(InMemoryEntryStore::new());
    seed(store.as_ref(), "news", &[("a", 1), ("b", 2), ("c", 3)]).await;
    store
        .insert(
            EntryBuilder::new("news", "d")
                .published_at(4)
                .summary("The fourth")
                .full_content_in_feed(true)
                .build(),
        )
        .await
        .unwrap();
    seed(store.as_ref(), "dev", &[("a", 10)]).await;

    let definitions: Vec<BlogDefinition> = serde_json::from_str(
        r#"[
            {"id": "news", "title": "News", "timezone": "UTC", "latest_entries_limit": 3,
             "index_meta_tags": [{"name": "description", "content": "Daily news"}]},
            {"id": "dev", "timezone": "UTC"}
        ]"#,
    )
    .unwrap();

    let store: Arc<dyn BlogEntryStore> = store;
    ApplicationServices::from_definitions(definitions, store, clock(), urls()).unwrap()
}

fn index(blog: &str) -> ShowIndexQuery {
    ShowIndexQuery {
        blog_id: blog.into(),
    }
}

fn entry(blog: &str, slug: &str) -> ShowEntryQuery {
    ShowEntryQuery {
        blog_id: blog.into(),
        slug: slug.into(),
    }
}

#[tokio::test]
async fn index_lists_latest_entries_newest_first() {
    let services = services().await;
    let page = services.pages.show_index(index("news")).await.unwrap();

    assert_eq!(page.blog.title, "News");
    assert_eq!(page.blog.description.as_deref(), Some("Daily news"));
    assert_eq!(page.blog.index_url, format!("{TEST_BASE_URL}/blog/news"));
    let listed: Vec<_> = page.entries.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(listed, vec!["d", "c", "b"]);
    assert_eq!(page.entries[0].summary.as_deref(), Some("The fourth"));
    assert_eq!(page.updated, at(4).fixed_offset());
    assert_eq!(
        page.meta_tags
            .content(&MetaTag::new([("property", "og:type")])),
        Some("blog")
    );
}

#[tokio::test]
async fn entry_page_links_neighbours_within_the_blog() {
    let services = services().await;
    let page = services.pages.show_entry(entry("news", "b")).await.unwrap();

    assert_eq!(page.entry.title, "Entry b");
    assert_eq!(page.page_title, "Entry b - News");
    assert_eq!(page.entry.url, format!("{TEST_BASE_URL}/blog/news/b"));
    assert_eq!(page.next.as_ref().map(|e| e.slug.as_str()), Some("c"));
    assert_eq!(page.previous.as_ref().map(|e| e.slug.as_str()), Some("a"));
    assert_eq!(
        page.meta_tags
            .content(&MetaTag::new([("property", "og:type")])),
        Some("article")
    );
    assert_eq!(
        page.meta_tags
            .content(&MetaTag::new([("property", "og:title")])),
        Some("Entry b")
    );

    let oldest = services.pages.show_entry(entry("news", "a")).await.unwrap();
    assert!(oldest.previous.is_none());
    let newest = services.pages.show_entry(entry("news", "d")).await.unwrap();
    assert!(newest.next.is_none());
}

#[tokio::test]
async fn entry_of_another_blog_is_not_found() {
    let services = services().await;
    let dev = services.pages.show_entry(entry("dev", "a")).await.unwrap();
    assert!(dev.next.is_none() && dev.previous.is_none());

    let err = services
        .pages
        .show_entry(entry("dev", "b"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn unknown_blog_is_not_found() {
    let services = services().await;
    assert!(
        services
            .pages
            .show_index(index("missing"))
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(
        services
            .pages
            .show_feed(ShowFeedQuery {
                blog_id: "missing".into()
            })
            .await
            .unwrap_err()
            .is_not_found()
    );
}

#[tokio::test]
async fn feed_hides_content_unless_allowed() {
    let services = services().await;
    let feed = services
        .pages
        .show_feed(ShowFeedQuery {
            blog_id: "news".into(),
        })
        .await
        .unwrap();

    assert_eq!(feed.id, format!("{TEST_BASE_URL}/blog/news"));
    assert_eq!(feed.description.as_deref(), Some("Daily news"));
    assert_eq!(feed.authors[0].name, "News");
    assert_eq!(feed.items.len(), 3);
    assert_eq!(feed.items[0].content.as_deref(), Some("Body of d"));
    assert!(feed.items[1..].iter().all(|item| item.content.is_none()));
}

#[tokio::test]
async fn empty_blog_feed_is_updated_now() {
    let store: Arc<dyn BlogEntryStore> = Arc::new(InMemoryEntryStore::new());
    let services = ApplicationServices::from_definitions(
        vec![BlogDefinition::new("quiet")],
        store,
        clock(),
        urls(),
    )
    .unwrap();

    let feed = services
        .pages
        .show_feed(ShowFeedQuery {
            blog_id: "quiet".into(),
        })
        .await
        .unwrap();
    assert!(feed.items.is_empty());
    assert_eq!(feed.updated.naive_utc(), fixed_now().naive_utc());
}
