//! Shared test doubles for the dashboard layer.
#![cfg(test)]

use async_trait::async_trait;

use moodlog_core::{Entry, EntryStore, JournalError};

/// Store whose read always fails, for error-propagation tests.
pub struct FailingStore;

#[async_trait]
impl EntryStore for FailingStore {
    async fn list_entries(&self) -> Result<Vec<Entry>, JournalError> {
        Err(JournalError::Store("backend unavailable".into()))
    }

    async fn add_entry(&self, _entry: Entry) -> Result<Entry, JournalError> {
        Err(JournalError::Store("backend unavailable".into()))
    }

    async fn update_entry(&self, _entry: Entry) -> Result<Entry, JournalError> {
        Err(JournalError::Store("backend unavailable".into()))
    }

    async fn delete_entry(&self, _id: i64) -> Result<(), JournalError> {
        Err(JournalError::Store("backend unavailable".into()))
    }
}
