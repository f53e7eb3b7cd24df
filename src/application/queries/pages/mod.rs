mod entry;
mod feed;
mod index;
mod service;

pub use entry::ShowEntryQuery;
pub use feed::ShowFeedQuery;
pub use index::ShowIndexQuery;
pub use service::BlogPageService;
