//! Personal library catalog: add, remove, search and list books, persisting the
//! whole collection as one snapshot in a key-value store.
//!
//! Hosts call `utils::logs::setup_tracing()` once at startup to get JSON log lines.

pub mod books;
pub mod catalog;
pub mod core;
pub mod utils;
