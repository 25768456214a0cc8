//! Volatile [`EntryStore`] backend.
//!
//! Serves as the fallback when no durable backend is wired up and as
//! the fixture store in tests. Ids are assigned sequentially; created
//! and updated timestamps are stamped from the wall clock, which is a
//! store concern and never leaks into the analytics.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{Entry, EntryStore, JournalError};

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    entries: Vec<Entry>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing entries; missing ids are assigned.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let mut next_id = entries.iter().filter_map(|e| e.id).max().unwrap_or(0);
        let entries = entries
            .into_iter()
            .map(|mut e| {
                if e.id.is_none() {
                    next_id += 1;
                    e.id = Some(next_id);
                }
                e
            })
            .collect();
        Self {
            inner: Arc::new(Mutex::new(Inner { entries, next_id })),
        }
    }
}

/// Boundary validation per the store contract; the analytics core
/// tolerates anything that got past this point.
fn validate(entry: &Entry) -> Result<(), JournalError> {
    if entry.date.trim().is_empty() {
        return Err(JournalError::Validation("entry date is required".into()));
    }
    Ok(())
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn list_entries(&self) -> Result<Vec<Entry>, JournalError> {
        Ok(self.inner.lock().await.entries.clone())
    }

    async fn add_entry(&self, mut entry: Entry) -> Result<Entry, JournalError> {
        validate(&entry)?;
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        entry.id = Some(inner.next_id);
        let now = chrono::Utc::now().to_rfc3339();
        entry.created_at = Some(now.clone());
        entry.updated_at = Some(now);
        inner.entries.push(entry.clone());
        tracing::debug!(id = ?entry.id, date = %entry.date, "entry added");
        Ok(entry)
    }

    async fn update_entry(&self, mut entry: Entry) -> Result<Entry, JournalError> {
        validate(&entry)?;
        let id = entry
            .id
            .ok_or_else(|| JournalError::Validation("update requires an id".into()))?;
        let mut inner = self.inner.lock().await;
        let Some(slot) = inner.entries.iter_mut().find(|e| e.id == Some(id)) else {
            return Err(JournalError::NotFound(id));
        };
        entry.created_at = slot.created_at.clone();
        entry.updated_at = Some(chrono::Utc::now().to_rfc3339());
        *slot = entry.clone();
        Ok(entry)
    }

    async fn delete_entry(&self, id: i64) -> Result<(), JournalError> {
        let mut inner = self.inner.lock().await;
        inner.entries.retain(|e| e.id != Some(id));
        Ok(())
    }
}
