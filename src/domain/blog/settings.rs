// src/domain/blog/settings.rs
use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::blog::author::AuthorData;
use crate::domain::blog::meta_tags::MetaTag;

/// Either a single value or a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// Every option a blog recognizes. Absent fields leave the blog untouched.
///
/// Keys that match no field are kept in `unrecognized` so the blog can report
/// them instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogSettings {
    pub public_path: Option<String>,
    pub title: Option<String>,
    pub page_title: Option<String>,
    pub entry_page_title_suffix: Option<String>,
    pub author: Option<AuthorData>,
    pub latest_entries_limit: Option<u32>,
    pub timezone: Option<String>,
    pub stylesheets: Option<OneOrMany<String>>,
    pub index_meta_tags: Option<Vec<MetaTag>>,
    pub default_meta_tags: Option<Vec<MetaTag>>,
    pub full_entries_in_feed: Option<bool>,
    pub main_ability: Option<String>,
    pub create_ability: Option<String>,
    pub edit_ability: Option<String>,
    pub preview_ability: Option<String>,
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, serde_json::Value>,
}

/// A blog id together with its settings, as read from a configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogDefinition {
    pub id: String,
    #[serde(flatten)]
    pub settings: BlogSettings,
}

impl BlogDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            settings: BlogSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_collected() {
        let settings: BlogSettings =
            serde_json::from_str(r#"{"title":"News","colour_scheme":"dark"}"#).unwrap();
        assert_eq!(settings.title.as_deref(), Some("News"));
        assert_eq!(settings.unrecognized.len(), 1);
        assert!(settings.unrecognized.contains_key("colour_scheme"));
    }

    #[test]
    fn stylesheets_accept_string_or_list() {
        let one: BlogSettings = serde_json::from_str(r#"{"stylesheets":"css/blog.css"}"#).unwrap();
        assert_eq!(one.stylesheets.unwrap().into_vec(), vec!["css/blog.css"]);

        let many: BlogSettings =
            serde_json::from_str(r#"{"stylesheets":["a.css","b.css"]}"#).unwrap();
        assert_eq!(many.stylesheets.unwrap().into_vec().len(), 2);
    }

    #[test]
    fn definition_reads_id_next_to_settings() {
        let definition: BlogDefinition = serde_json::from_str(
            r#"{"id":"news","timezone":"Europe/Stockholm","author":{"name":"Desk"}}"#,
        )
        .unwrap();
        assert_eq!(definition.id, "news");
        assert_eq!(definition.settings.timezone.as_deref(), Some("Europe/Stockholm"));
        assert!(definition.settings.author.is_some());
        assert!(definition.settings.unrecognized.is_empty());
    }
}
