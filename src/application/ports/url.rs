// src/application/ports/url.rs
use crate::domain::errors::DomainResult;

/// Resolves relative paths into absolute URLs. Absolute input is returned
/// unchanged.
pub trait UrlGenerator: Send + Sync {
    fn to(&self, path: &str) -> DomainResult<String>;
}
