use crate::application::ports::url::UrlGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use url::Url;

/// Resolves relative paths against the application's base URL.
#[derive(Debug, Clone)]
pub struct BaseUrlGenerator {
    base: Url,
}

impl BaseUrlGenerator {
    pub fn new(base: &str) -> DomainResult<Self> {
        let mut base = Url::parse(base)
            .map_err(|err| DomainError::Configuration(format!("invalid base url `{base}`: {err}")))?;
        if base.cannot_be_a_base() {
            return Err(DomainError::Configuration(format!(
                "base url `{base}` cannot have paths"
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }
}

/// Protocol-relative or `http(s)` URLs are left alone; anything else,
/// including `host:port/...` forms, is a path under the base.
fn is_absolute(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    Url::parse(path).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

impl UrlGenerator for BaseUrlGenerator {
    fn to(&self, path: &str) -> DomainResult<String> {
        let path = path.trim();
        if is_absolute(path) {
            return Ok(path.to_string());
        }

        let resolved = self
            .base
            .join(&format!("./{}", path.trim_start_matches('/')))
            .map_err(|err| DomainError::Validation(format!("cannot resolve url `{path}`: {err}")))?;
        let resolved = resolved.as_str();
        Ok(resolved
            .strip_suffix('/')
            .filter(|_| !path.is_empty())
            .unwrap_or(resolved)
            .to_string())
    }
}
