// src/domain/blog/registry.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, url::UrlGenerator};
use crate::domain::blog::aggregate::Blog;
use crate::domain::blog::settings::BlogDefinition;
use crate::domain::entry::{BlogEntryStore, BlogId};
use crate::domain::errors::{DomainError, DomainResult};

/// All configured blogs, in registration order.
///
/// Built once at startup and handed to whatever needs to look blogs up.
#[derive(Debug, Default)]
pub struct BlogRegistry {
    blogs: Vec<Arc<Blog>>,
}

impl BlogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure one blog per definition, each reading from `store`.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = BlogDefinition>,
        store: &Arc<dyn BlogEntryStore>,
        clock: &Arc<dyn Clock>,
        urls: &Arc<dyn UrlGenerator>,
    ) -> DomainResult<Self> {
        let mut registry = Self::new();
        for definition in definitions {
            let id = BlogId::new(definition.id)?;
            let mut blog = Blog::from_store(
                id,
                Arc::clone(store),
                Arc::clone(clock),
                Arc::clone(urls),
            );
            blog.configure(definition.settings)?;
            registry.add(blog)?;
        }
        Ok(registry)
    }

    pub fn add(&mut self, blog: Blog) -> DomainResult<Arc<Blog>> {
        if self.get(blog.id().as_str()).is_some() {
            return Err(DomainError::Conflict(format!(
                "blog `{}` is already registered",
                blog.id()
            )));
        }
        if let Some(other) = self
            .blogs
            .iter()
            .find(|b| b.public_path() == blog.public_path())
        {
            return Err(DomainError::Conflict(format!(
                "blogs `{}` and `{}` share the public path `{}`",
                other.id(),
                blog.id(),
                blog.public_path()
            )));
        }

        tracing::info!(blog = %blog.id(), path = %blog.public_path(), "blog registered");
        let blog = Arc::new(blog);
        self.blogs.push(Arc::clone(&blog));
        Ok(blog)
    }

    pub fn get(&self, id: &str) -> Option<Arc<Blog>> {
        self.blogs
            .iter()
            .find(|blog| blog.id().as_str() == id)
            .cloned()
    }

    pub fn all(&self) -> &[Arc<Blog>] {
        &self.blogs
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }
}
