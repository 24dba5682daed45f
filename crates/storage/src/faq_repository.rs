//! FAQ persistence: the whole collection lives under one key.

use std::sync::Arc;

use async_trait::async_trait;
use salesdash_core::{default_faqs, FaqEntry, FAQ_STORE_KEY};

use crate::{KeyValueStore, StorageError};

/// Load/save contract for the FAQ collection.
///
/// `save` always receives the full collection; there are no partial writes.
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// Current collection, or the built-in seed when nothing was saved yet.
    async fn load(&self) -> Result<Vec<FaqEntry>, StorageError>;

    /// Replaces the stored collection with `faqs`.
    async fn save(&self, faqs: &[FaqEntry]) -> Result<(), StorageError>;
}

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| StorageError::Join(e.to_string()))?
}

/// `FaqStore` that serializes the collection as JSON into a `KeyValueStore`.
#[derive(Clone)]
pub struct FaqRepository {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl FaqRepository {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv, key: FAQ_STORE_KEY.to_owned() }
    }

    fn load_blocking(&self) -> Result<Vec<FaqEntry>, StorageError> {
        match self.kv.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                tracing::debug!(key = %self.key, "no saved FAQs, using defaults");
                Ok(default_faqs())
            },
        }
    }

    fn save_blocking(&self, faqs: &[FaqEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(faqs)?;
        self.kv.set(&self.key, &raw)
    }
}

#[async_trait]
impl FaqStore for FaqRepository {
    async fn load(&self) -> Result<Vec<FaqEntry>, StorageError> {
        let repo = self.clone();
        blocking(move || repo.load_blocking()).await
    }

    async fn save(&self, faqs: &[FaqEntry]) -> Result<(), StorageError> {
        let repo = self.clone();
        let faqs = faqs.to_vec();
        blocking(move || repo.save_blocking(&faqs)).await
    }
}
