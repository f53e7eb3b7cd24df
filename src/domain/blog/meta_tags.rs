// src/domain/blog/meta_tags.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const CONTENT: &str = "content";

/// One `<meta>` tag as attribute/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaTag(BTreeMap<String, String>);

impl MetaTag {
    pub fn new<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn name(name: &str, content: impl Into<String>) -> Self {
        Self::new([("name", name.to_string()), (CONTENT, content.into())])
    }

    pub fn property(property: &str, content: impl Into<String>) -> Self {
        Self::new([("property", property.to_string()), (CONTENT, content.into())])
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }

    pub fn content(&self) -> Option<&str> {
        self.get(CONTENT)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when every attribute of `filter` is present here with the same value.
    pub fn matches(&self, filter: &MetaTag) -> bool {
        filter
            .0
            .iter()
            .all(|(k, v)| self.0.get(k).is_some_and(|own| own == v))
    }

    fn same_identity(&self, other: &MetaTag) -> bool {
        let identity = |tag: &MetaTag| {
            tag.0
                .iter()
                .filter(|(k, _)| k.as_str() != CONTENT)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<BTreeMap<_, _>>()
        };
        identity(self) == identity(other)
    }
}

/// Ordered set of meta tags where a later tag replaces any earlier tag with
/// the same non-content attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetaTagBag(Vec<MetaTag>);

impl MetaTagBag {
    pub fn make(tags: impl IntoIterator<Item = MetaTag>) -> Self {
        Self::default().merge(tags)
    }

    #[must_use]
    pub fn merge(mut self, tags: impl IntoIterator<Item = MetaTag>) -> Self {
        for tag in tags {
            if tag.is_empty() {
                continue;
            }
            self.0.retain(|existing| !existing.same_identity(&tag));
            self.0.push(tag);
        }
        self
    }

    /// Content of the last tag matching `filter`.
    pub fn content(&self, filter: &MetaTag) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|tag| tag.matches(filter))
            .and_then(MetaTag::content)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetaTag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<MetaTag> {
        self.0
    }
}
