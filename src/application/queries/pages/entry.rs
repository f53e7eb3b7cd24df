use super::BlogPageService;
use crate::{
    application::{
        dto::{BlogHeaderDto, EntryDto, EntryPageDto, EntrySummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::MetaTag,
};

pub struct ShowEntryQuery {
    pub blog_id: String,
    pub slug: String,
}

impl BlogPageService {
    pub async fn show_entry(&self, query: ShowEntryQuery) -> ApplicationResult<EntryPageDto> {
        let blog = self.blog(&query.blog_id)?;
        let entry = blog
            .find_entry(&query.slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("entry not found"))?;

        let next = blog
            .next_entry(&entry)
            .await?
            .map(|e| EntrySummaryDto::from_entry(&blog, &e))
            .transpose()?;
        let previous = blog
            .previous_entry(&entry)
            .await?
            .map(|e| EntrySummaryDto::from_entry(&blog, &e))
            .transpose()?;

        let meta_tags = blog.default_meta_tags().merge([
            MetaTag::property("og:title", entry.title.as_str()),
            MetaTag::property("og:type", "article"),
        ]);

        Ok(EntryPageDto {
            blog: BlogHeaderDto::from_blog(&blog)?,
            page_title: format!("{}{}", entry.title, blog.entry_page_title_suffix()),
            meta_tags,
            entry: EntryDto::from_entry(&blog, &entry)?,
            next,
            previous,
        })
    }
}
