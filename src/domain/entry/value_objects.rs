use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(i64);

impl EntryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("entry id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<EntryId> for i64 {
    fn from(value: EntryId) -> Self {
        value.0
    }
}

/// Identifier of a blog. Entries and providers are scoped by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlogId(String);

impl BlogId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("blog id cannot be empty".into()));
        }
        if value.contains('/') {
            return Err(DomainError::Validation(format!(
                "blog id `{value}` cannot contain '/'"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BlogId> for String {
    fn from(value: BlogId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySlug(String);

impl EntrySlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntrySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntrySlug> for String {
    fn from(value: EntrySlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTitle(String);

impl EntryTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntryTitle> for String {
    fn from(value: EntryTitle) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_rejects_non_positive() {
        assert!(EntryId::new(0).is_err());
        assert!(EntryId::new(-3).is_err());
        assert_eq!(i64::from(EntryId::new(7).unwrap()), 7);
    }

    #[test]
    fn blog_id_rejects_blank_and_slashes() {
        assert!(BlogId::new("  ").is_err());
        assert!(BlogId::new("news/archive").is_err());
        assert_eq!(BlogId::new("news").unwrap().as_str(), "news");
    }

    #[test]
    fn slug_and_title_reject_blank() {
        assert!(EntrySlug::new("").is_err());
        assert!(EntryTitle::new(" \t").is_err());
        assert_eq!(EntrySlug::new("hello-world").unwrap().to_string(), "hello-world");
    }
}
