// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::{ClockPort, UrlGeneratorPort},
        queries::pages::BlogPageService,
    },
    domain::{
        blog::{BlogDefinition, BlogRegistry},
        entry::BlogEntryStore,
        errors::DomainResult,
    },
};

pub struct ApplicationServices {
    pub registry: Arc<BlogRegistry>,
    pub pages: Arc<BlogPageService>,
}

impl ApplicationServices {
    pub fn new(registry: Arc<BlogRegistry>) -> Self {
        let pages = Arc::new(BlogPageService::new(Arc::clone(&registry)));
        Self { registry, pages }
    }

    /// Configure every defined blog against `store` and wire the services
    /// around the resulting registry.
    pub fn from_definitions(
        definitions: Vec<BlogDefinition>,
        store: Arc<dyn BlogEntryStore>,
        clock: Arc<ClockPort>,
        urls: Arc<UrlGeneratorPort>,
    ) -> DomainResult<Self> {
        let registry = BlogRegistry::from_definitions(definitions, &store, &clock, &urls)?;
        Ok(Self::new(Arc::new(registry)))
    }
}
