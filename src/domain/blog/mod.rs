pub mod abilities;
pub mod aggregate;
pub mod author;
pub mod meta_tags;
pub mod registry;
pub mod settings;
pub mod timezone;

pub use abilities::{Abilities, DEFAULT_PREVIEW_ABILITY};
pub use aggregate::Blog;
pub use author::{Author, AuthorData};
pub use meta_tags::{MetaTag, MetaTagBag};
pub use registry::BlogRegistry;
pub use settings::{BlogDefinition, BlogSettings, OneOrMany};
