use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Author data as it appears in blog settings: either a bare name or a
/// record with optional contact details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AuthorData {
    Name(String),
    Details {
        name: String,
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Author {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            url: None,
        }
    }

    pub fn from_data(data: AuthorData) -> DomainResult<Self> {
        let (name, email, url) = match data {
            AuthorData::Name(name) => (name, None, None),
            AuthorData::Details { name, email, url } => (name, email, url),
        };

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::Configuration("author name cannot be empty".into()));
        }

        let email = email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty());
        if let Some(email) = &email {
            if !email.contains('@') {
                return Err(DomainError::Configuration(format!(
                    "author email `{email}` is not an email address"
                )));
            }
        }
        let url = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());

        Ok(Self { name, email, url })
    }
}
