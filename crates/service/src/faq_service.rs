use std::sync::Arc;

use chrono::Utc;
use salesdash_core::{FaqEntry, FaqInput};
use salesdash_storage::FaqStore;
use tokio::sync::RwLock;

use crate::ServiceError;

struct FaqState {
    faqs: Vec<FaqEntry>,
    /// Highest id handed out so far; new ids are always greater.
    last_id: i64,
}

/// FAQ collection loaded once from the store and saved in full after every
/// change.
///
/// A mutation only becomes visible once its snapshot has been saved, so a
/// failed save leaves both the store and the in-memory list untouched.
pub struct FaqService {
    store: Arc<dyn FaqStore>,
    state: RwLock<FaqState>,
}

impl FaqService {
    /// Loads the collection from `store`.
    ///
    /// # Errors
    /// Returns an error if the stored collection cannot be read.
    pub async fn open(store: Arc<dyn FaqStore>) -> Result<Self, ServiceError> {
        let faqs = store.load().await?;
        let last_id = faqs.iter().filter_map(|f| f.id.parse::<i64>().ok()).max().unwrap_or(0);
        tracing::info!(count = faqs.len(), "loaded FAQs");
        Ok(Self { store, state: RwLock::new(FaqState { faqs, last_id }) })
    }

    pub async fn list(&self) -> Vec<FaqEntry> {
        self.state.read().await.faqs.clone()
    }

    pub async fn get(&self, id: &str) -> Option<FaqEntry> {
        self.state.read().await.faqs.iter().find(|f| f.id == id).cloned()
    }

    /// Appends a new entry with a fresh time-based id.
    ///
    /// # Errors
    /// `InvalidInput` for blank fields, `Storage` if the save fails.
    pub async fn add(&self, input: FaqInput) -> Result<FaqEntry, ServiceError> {
        input.validate()?;
        let mut state = self.state.write().await;

        let id = next_id(state.last_id);
        let entry = input.into_entry(id.to_string());
        let mut next = state.faqs.clone();
        next.push(entry.clone());

        self.store.save(&next).await?;
        state.faqs = next;
        state.last_id = id;
        tracing::info!(id = %entry.id, "FAQ added");
        Ok(entry)
    }

    /// Replaces question and answer of the entry with `id`, keeping its position.
    ///
    /// # Errors
    /// `InvalidInput` for blank fields, `NotFound` for an unknown id,
    /// `Storage` if the save fails.
    pub async fn update(&self, id: &str, input: FaqInput) -> Result<FaqEntry, ServiceError> {
        input.validate()?;
        let mut state = self.state.write().await;

        let Some(index) = state.faqs.iter().position(|f| f.id == id) else {
            return Err(ServiceError::NotFound { entity: "faq", id: id.to_owned() });
        };
        let entry = input.into_entry(id.to_owned());
        let mut next = state.faqs.clone();
        next[index] = entry.clone();

        self.store.save(&next).await?;
        state.faqs = next;
        tracing::info!(id, "FAQ updated");
        Ok(entry)
    }

    /// Removes the entry with `id`. Returns `false` if there was none.
    ///
    /// # Errors
    /// `Storage` if the save fails.
    pub async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let mut state = self.state.write().await;
        if !state.faqs.iter().any(|f| f.id == id) {
            return Ok(false);
        }
        let next: Vec<FaqEntry> = state.faqs.iter().filter(|f| f.id != id).cloned().collect();

        self.store.save(&next).await?;
        state.faqs = next;
        tracing::info!(id, "FAQ deleted");
        Ok(true)
    }
}

/// Current millisecond timestamp, bumped past `last` if the clock lags.
fn next_id(last: i64) -> i64 {
    Utc::now().timestamp_millis().max(last.saturating_add(1))
}
