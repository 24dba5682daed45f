use crate::StorageError;

/// Synchronous string key-value store.
///
/// `set` replaces the whole value for a key in one write.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
