// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for entry freshness when a blog has nothing published.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
