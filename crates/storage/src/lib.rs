//! Storage layer for salesdash
//!
//! A string key-value store (SQLite or in-memory) and the FAQ repository
//! built on top of it.

mod error;
mod faq_repository;
mod kv;
mod memory;
mod migrations;
mod sqlite;

pub use error::StorageError;
pub use faq_repository::{FaqRepository, FaqStore};
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_get_missing_key() {
        let store = SqliteStore::in_memory().unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_sqlite_set_overwrites() {
        let store = SqliteStore::in_memory().unwrap();
        store.set("faqs", "[]").unwrap();
        store.set("faqs", "[1]").unwrap();
        assert_eq!(store.get("faqs").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_memory_set_get() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
