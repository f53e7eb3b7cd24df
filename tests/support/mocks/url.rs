// tests/support/mocks/url.rs
use blog_core::application::ports::url::UrlGenerator;
use blog_core::domain::errors::DomainResult;

pub const TEST_BASE_URL: &str = "https://blog.test";

/// Prefixes relative paths with [`TEST_BASE_URL`].
pub struct TestUrls;

impl UrlGenerator for TestUrls {
    fn to(&self, path: &str) -> DomainResult<String> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(path.to_string());
        }
        Ok(format!("{TEST_BASE_URL}/{}", path.trim_start_matches('/')))
    }
}
