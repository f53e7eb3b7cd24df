use super::BlogPageService;
use crate::application::{
    dto::{BlogHeaderDto, EntrySummaryDto, IndexPageDto},
    error::ApplicationResult,
};

pub struct ShowIndexQuery {
    pub blog_id: String,
}

impl BlogPageService {
    pub async fn show_index(&self, query: ShowIndexQuery) -> ApplicationResult<IndexPageDto> {
        let blog = self.blog(&query.blog_id)?;

        let entries = blog
            .latest_entries()
            .await?
            .iter()
            .map(|entry| EntrySummaryDto::from_entry(&blog, entry))
            .collect::<Result<Vec<_>, _>>()?;
        let updated = blog.updated().await?.fixed_offset();

        Ok(IndexPageDto {
            blog: BlogHeaderDto::from_blog(&blog)?,
            meta_tags: blog.meta_tag_bag(),
            entries,
            updated,
        })
    }
}
