// src/config.rs
use std::{env, fs, path::PathBuf};
use thiserror::Error;

use crate::domain::blog::BlogDefinition;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    app_url: String,
    blog_config_path: Option<PathBuf>,
    log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("cannot read blog configuration {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse blog configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_database_url() -> String {
    "sqlite://blog.db?mode=rwc".into()
}

fn default_app_url() -> String {
    "http://localhost".into()
}

fn default_log_filter() -> String {
    "info,sqlx=warn".into()
}

const fn default_max_connections() -> u32 {
    16
}

const DEFAULT_BLOG_ID: &str = "main";

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got `{raw}`"
                    )));
                }
            },
            None => default_max_connections(),
        };

        let app_url = lookup("APP_URL").unwrap_or_else(default_app_url);
        if !(app_url.starts_with("http://") || app_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "APP_URL must be an http(s) url, got `{app_url}`"
            )));
        }

        let blog_config_path = lookup("BLOG_CONFIG_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let log_filter = lookup("RUST_LOG")
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(default_log_filter);

        Ok(Self {
            database_url,
            database_max_connections,
            app_url,
            blog_config_path,
            log_filter,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn app_url(&self) -> &str {
        &self.app_url
    }

    /// `tracing` filter directives, from `RUST_LOG`.
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn blog_config_path(&self) -> Option<&PathBuf> {
        self.blog_config_path.as_ref()
    }

    /// Blog definitions from `BLOG_CONFIG_PATH`, or a single `main` blog when
    /// no file is configured.
    pub fn blog_definitions(&self) -> Result<Vec<BlogDefinition>, ConfigError> {
        let Some(path) = &self.blog_config_path else {
            return Ok(vec![BlogDefinition::new(DEFAULT_BLOG_ID)]);
        };

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        parse_blog_definitions(&raw)
    }
}

/// Parse a JSON array of blog definitions (`[{"id": "news", ...}]`).
pub fn parse_blog_definitions(raw: &str) -> Result<Vec<BlogDefinition>, ConfigError> {
    let definitions: Vec<BlogDefinition> = serde_json::from_str(raw)?;
    if definitions.is_empty() {
        return Err(ConfigError::Invalid(
            "blog configuration must define at least one blog".into(),
        ));
    }
    Ok(definitions)
}
