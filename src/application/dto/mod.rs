pub mod pages;

pub use pages::{
    BlogHeaderDto, EntryDto, EntryPageDto, EntrySummaryDto, FeedDto, FeedItemDto, IndexPageDto,
};
