// src/domain/blog/aggregate.rs
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use once_cell::sync::OnceCell;

use crate::application::ports::{time::Clock, url::UrlGenerator};
use crate::domain::blog::abilities::Abilities;
use crate::domain::blog::author::{Author, AuthorData};
use crate::domain::blog::meta_tags::{MetaTag, MetaTagBag};
use crate::domain::blog::settings::BlogSettings;
use crate::domain::blog::timezone::{parse_timezone, process_default_timezone};
use crate::domain::entry::{
    BlogEntry, BlogEntryProvider, BlogEntryStore, BlogId, DEFAULT_LATEST_LIMIT, EntrySlug,
    StoreEntryProvider,
};
use crate::domain::errors::{DomainError, DomainResult};

/// A blog's configuration plus the provider its entries come from.
///
/// All mutation happens through `with_*` and [`Blog::configure`] before the
/// blog is shared; afterwards every getter is a pure function of that state.
pub struct Blog {
    id: BlogId,
    public_path: String,
    provider: Arc<dyn BlogEntryProvider>,
    urls: Arc<dyn UrlGenerator>,
    title: Option<String>,
    page_title: Option<String>,
    entry_page_title_suffix: Option<String>,
    author: Option<Author>,
    latest_entries_limit: u32,
    timezone: Option<Tz>,
    default_timezone: OnceCell<Tz>,
    stylesheet_urls: Vec<String>,
    index_meta_tags: Vec<MetaTag>,
    default_meta_tags: Vec<MetaTag>,
    full_entries_in_feed: bool,
    abilities: Abilities,
}

impl Blog {
    /// Build a blog around an existing provider, which must already be bound
    /// to `id`.
    pub fn new(
        id: BlogId,
        provider: Arc<dyn BlogEntryProvider>,
        urls: Arc<dyn UrlGenerator>,
    ) -> DomainResult<Self> {
        if provider.blog_id() != &id {
            return Err(DomainError::Configuration(format!(
                "entry provider is bound to blog `{}`, not `{id}`",
                provider.blog_id()
            )));
        }

        Ok(Self::assemble(id, provider, urls))
    }

    pub fn from_store(
        id: BlogId,
        store: Arc<dyn BlogEntryStore>,
        clock: Arc<dyn Clock>,
        urls: Arc<dyn UrlGenerator>,
    ) -> Self {
        let provider: Arc<dyn BlogEntryProvider> =
            Arc::new(StoreEntryProvider::new(id.clone(), store, clock));
        Self::assemble(id, provider, urls)
    }

    fn assemble(id: BlogId, provider: Arc<dyn BlogEntryProvider>, urls: Arc<dyn UrlGenerator>) -> Self {
        Self {
            public_path: format!("blog/{id}"),
            id,
            provider,
            urls,
            title: None,
            page_title: None,
            entry_page_title_suffix: None,
            author: None,
            latest_entries_limit: DEFAULT_LATEST_LIMIT,
            timezone: None,
            default_timezone: OnceCell::new(),
            stylesheet_urls: Vec::new(),
            index_meta_tags: Vec::new(),
            default_meta_tags: Vec::new(),
            full_entries_in_feed: false,
            abilities: Abilities::default(),
        }
    }

    /// Apply every option present in `settings`.
    ///
    /// Unrecognized keys are logged and skipped. Malformed timezone, author or
    /// stylesheet values are returned as errors, and the blog is then left
    /// exactly as it was.
    pub fn configure(&mut self, settings: BlogSettings) -> DomainResult<&mut Self> {
        let BlogSettings {
            public_path,
            title,
            page_title,
            entry_page_title_suffix,
            author,
            latest_entries_limit,
            timezone,
            stylesheets,
            index_meta_tags,
            default_meta_tags,
            full_entries_in_feed,
            main_ability,
            create_ability,
            edit_ability,
            preview_ability,
            unrecognized,
        } = settings;

        let author = author.map(Author::from_data).transpose()?;
        let timezone = timezone.as_deref().map(parse_timezone).transpose()?;
        let stylesheets = stylesheets
            .map(|styles| self.resolve_stylesheets(styles.into_vec()))
            .transpose()?;

        for key in unrecognized.keys() {
            tracing::warn!(blog = %self.id, key = %key, "unrecognized blog configuration key, skipping");
        }

        if let Some(path) = public_path {
            self.with_public_path(&path);
        }
        if let Some(title) = title {
            self.with_title(title);
        }
        if let Some(title) = page_title {
            self.with_page_title(title);
        }
        if let Some(suffix) = entry_page_title_suffix {
            self.with_entry_page_title_suffix(suffix);
        }
        if author.is_some() {
            self.author = author;
        }
        if let Some(limit) = latest_entries_limit {
            self.with_latest_entries_limit(limit);
        }
        if timezone.is_some() {
            self.timezone = timezone;
        }
        if let Some(urls) = stylesheets {
            self.stylesheet_urls.extend(urls);
        }
        if let Some(tags) = index_meta_tags {
            self.with_index_meta_tags(tags);
        }
        if let Some(tags) = default_meta_tags {
            self.with_default_meta_tags(tags);
        }
        if let Some(full) = full_entries_in_feed {
            self.with_full_entries_in_feed(full);
        }
        if main_ability.is_some() {
            self.with_main_ability(main_ability);
        }
        if create_ability.is_some() {
            self.with_create_ability(create_ability);
        }
        if edit_ability.is_some() {
            self.with_edit_ability(edit_ability);
        }
        if preview_ability.is_some() {
            self.with_preview_ability(preview_ability);
        }

        Ok(self)
    }

    pub fn id(&self) -> &BlogId {
        &self.id
    }

    pub fn entry_provider(&self) -> &Arc<dyn BlogEntryProvider> {
        &self.provider
    }

    /// Surrounding slashes are dropped so paths compose cleanly.
    pub fn with_public_path(&mut self, path: &str) -> &mut Self {
        self.public_path = path.trim_matches('/').to_string();
        self
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    pub fn with_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_else(|| self.id.as_str())
    }

    pub fn with_page_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.page_title = Some(title.into());
        self
    }

    pub fn page_title(&self) -> &str {
        self.page_title.as_deref().unwrap_or_else(|| self.title())
    }

    pub fn with_entry_page_title_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.entry_page_title_suffix = Some(suffix.into());
        self
    }

    pub fn entry_page_title_suffix(&self) -> String {
        match &self.entry_page_title_suffix {
            Some(suffix) => suffix.clone(),
            None => format!(" - {}", self.page_title()),
        }
    }

    pub fn with_author(&mut self, data: AuthorData) -> DomainResult<&mut Self> {
        self.author = Some(Author::from_data(data)?);
        Ok(self)
    }

    /// Never empty: without configured author data the blog title stands in.
    pub fn authors(&self) -> Vec<Author> {
        let author = self
            .author
            .clone()
            .unwrap_or_else(|| Author::named(self.title()));
        vec![author]
    }

    pub fn with_latest_entries_limit(&mut self, limit: u32) -> &mut Self {
        self.latest_entries_limit = limit;
        self
    }

    pub fn latest_entries_limit(&self) -> u32 {
        self.latest_entries_limit
    }

    pub fn with_timezone(&mut self, name: &str) -> DomainResult<&mut Self> {
        self.timezone = Some(parse_timezone(name)?);
        Ok(self)
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
            .unwrap_or_else(|| *self.default_timezone.get_or_init(process_default_timezone))
    }

    pub fn convert_to_blog_timezone(&self, time: Option<DateTime<Utc>>) -> Option<DateTime<Tz>> {
        time.map(|t| t.with_timezone(&self.timezone()))
    }

    /// Adds to the stylesheets already configured; each is resolved to an
    /// absolute URL now.
    pub fn with_stylesheets<I, S>(&mut self, styles: I) -> DomainResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolved = self.resolve_stylesheets(styles)?;
        self.stylesheet_urls.extend(resolved);
        Ok(self)
    }

    fn resolve_stylesheets<I, S>(&self, styles: I) -> DomainResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        styles
            .into_iter()
            .map(|style| self.urls.to(style.as_ref()))
            .collect()
    }

    pub fn stylesheet_urls(&self) -> &[String] {
        &self.stylesheet_urls
    }

    pub fn with_index_meta_tags(&mut self, tags: impl IntoIterator<Item = MetaTag>) -> &mut Self {
        self.index_meta_tags.extend(tags);
        self
    }

    pub fn with_default_meta_tags(
        &mut self,
        tags: impl IntoIterator<Item = MetaTag>,
    ) -> &mut Self {
        self.default_meta_tags.extend(tags);
        self
    }

    /// Tags for every page under this blog.
    pub fn default_meta_tags(&self) -> MetaTagBag {
        MetaTagBag::make([MetaTag::name("twitter:card", "summary")])
            .merge(self.default_meta_tags.iter().cloned())
    }

    /// Tags for the blog's index page.
    pub fn meta_tag_bag(&self) -> MetaTagBag {
        self.default_meta_tags()
            .merge([
                MetaTag::property("og:title", self.title()),
                MetaTag::property("og:type", "blog"),
            ])
            .merge(self.index_meta_tags.iter().cloned())
    }

    pub fn description(&self) -> Option<String> {
        self.meta_tag_bag()
            .content(&MetaTag::new([("name", "description")]))
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }

    pub fn with_full_entries_in_feed(&mut self, full: bool) -> &mut Self {
        self.full_entries_in_feed = full;
        self
    }

    pub fn display_full_entry_in_feed(&self, entry: Option<&BlogEntry>) -> bool {
        entry.map_or(self.full_entries_in_feed, |e| {
            e.display_full_content_in_feed(self.full_entries_in_feed)
        })
    }

    pub fn with_main_ability(&mut self, ability: Option<String>) -> &mut Self {
        self.abilities.main = ability;
        self
    }

    pub fn with_create_ability(&mut self, ability: Option<String>) -> &mut Self {
        self.abilities.create = ability;
        self
    }

    pub fn with_edit_ability(&mut self, ability: Option<String>) -> &mut Self {
        self.abilities.edit = ability;
        self
    }

    pub fn with_preview_ability(&mut self, ability: Option<String>) -> &mut Self {
        self.abilities.preview = ability;
        self
    }

    pub fn main_ability(&self) -> Option<&str> {
        self.abilities.main()
    }

    pub fn create_ability(&self) -> Option<&str> {
        self.abilities.create()
    }

    pub fn edit_ability(&self) -> Option<&str> {
        self.abilities.edit()
    }

    pub fn preview_ability(&self) -> &str {
        self.abilities.preview()
    }

    pub fn index_url(&self) -> DomainResult<String> {
        self.urls.to(&self.public_path)
    }

    pub fn entry_url(&self, entry: &BlogEntry) -> DomainResult<String> {
        self.urls
            .to(&format!("{}/{}", self.public_path, entry.slug.as_str()))
    }

    /// A blank slug can never match, so it yields `None` rather than an error.
    pub async fn find_entry(&self, slug: &str) -> DomainResult<Option<BlogEntry>> {
        match EntrySlug::new(slug) {
            Ok(slug) => self.provider.find_by_slug(&slug).await,
            Err(_) => Ok(None),
        }
    }

    pub async fn next_entry(&self, entry: &BlogEntry) -> DomainResult<Option<BlogEntry>> {
        self.provider.next_entry(entry).await
    }

    pub async fn previous_entry(&self, entry: &BlogEntry) -> DomainResult<Option<BlogEntry>> {
        self.provider.previous_entry(entry).await
    }

    pub async fn latest_entries(&self) -> DomainResult<Vec<BlogEntry>> {
        self.provider.latest(Some(self.latest_entries_limit)).await
    }

    pub async fn updated(&self) -> DomainResult<DateTime<Tz>> {
        let updated = self.provider.get_updated().await?;
        Ok(updated.with_timezone(&self.timezone()))
    }
}

impl fmt::Debug for Blog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blog")
            .field("id", &self.id)
            .field("public_path", &self.public_path)
            .field("title", &self.title())
            .finish_non_exhaustive()
    }
}
