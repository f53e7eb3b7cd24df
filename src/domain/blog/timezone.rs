use chrono_tz::Tz;

use crate::domain::errors::{DomainError, DomainResult};

pub fn parse_timezone(name: &str) -> DomainResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|err| DomainError::Configuration(format!("invalid timezone `{name}`: {err}")))
}

/// Timezone of the running process: `TZ` when it names a known zone,
/// otherwise UTC.
pub fn process_default_timezone() -> Tz {
    std::env::var("TZ")
        .ok()
        .and_then(|value| value.trim_start_matches(':').parse::<Tz>().ok())
        .unwrap_or(Tz::UTC)
}
