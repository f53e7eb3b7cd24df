use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::blog::{Blog, BlogRegistry},
};

/// Produces the data external templates and feed writers render.
pub struct BlogPageService {
    pub(super) registry: Arc<BlogRegistry>,
}

impl BlogPageService {
    pub fn new(registry: Arc<BlogRegistry>) -> Self {
        Self { registry }
    }

    pub(super) fn blog(&self, blog_id: &str) -> ApplicationResult<Arc<Blog>> {
        self.registry
            .get(blog_id)
            .ok_or_else(|| ApplicationError::not_found(format!("blog `{blog_id}` not found")))
    }
}
