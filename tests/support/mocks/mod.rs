// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod entry_store;
pub mod time;
pub mod url;

pub use entry_store::{FailingEntryStore, InMemoryEntryStore};
pub use time::{FixedClock, fixed_now};
pub use url::{TEST_BASE_URL, TestUrls};
