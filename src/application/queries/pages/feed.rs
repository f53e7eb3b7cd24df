use super::BlogPageService;
use crate::application::{
    dto::{FeedDto, FeedItemDto},
    error::ApplicationResult,
};

pub struct ShowFeedQuery {
    pub blog_id: String,
}

impl BlogPageService {
    pub async fn show_feed(&self, query: ShowFeedQuery) -> ApplicationResult<FeedDto> {
        let blog = self.blog(&query.blog_id)?;

        let items = blog
            .latest_entries()
            .await?
            .iter()
            .map(|entry| FeedItemDto::from_entry(&blog, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeedDto {
            id: blog.index_url()?,
            title: blog.title().to_string(),
            description: blog.description(),
            updated: blog.updated().await?.fixed_offset(),
            authors: blog.authors(),
            items,
        })
    }
}
