pub mod blog;
pub mod entry;
pub mod errors;
