use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock; stands in for the freshness marker of a blog with no entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
