//! Journal `Entry` model, the `EntryStore` collaborator trait, and the
//! analytics that turn a journal snapshot into dashboard data.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub mod factors;
pub mod filter;
pub mod kpi;
pub mod memory_store;
pub mod normalize;
pub mod series;
pub mod triggers;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("entry not found: {0}")]
    NotFound(i64),
    #[error("store error: {0}")]
    Store(String),
}

/// One medication taken on a journal day, carried through reports
/// unmodified.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MedDose {
    pub name: String,
    #[serde(default)]
    pub dose: String,
}

/// One daily journal record as the store hands it out.
///
/// Numeric fields tolerate whatever shape the store kept: numbers,
/// numeric strings, null, or garbage. Anything unparsable lands as
/// `None`; the arithmetic paths read mood through
/// [`Entry::coerced_mood`], which maps `None` to 0.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub id: Option<i64>,
    /// Raw stored date string; parsing happens in [`normalize`].
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub mood: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub anxiety: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub meds: Vec<MedDose>,
    /// PHQ-9 answers, one per question, unanswered as `None`.
    #[serde(default)]
    pub phq: Option<Vec<Option<u8>>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Entry {
    /// Mood as the window computations see it: absent or unparsable is 0.
    pub fn coerced_mood(&self) -> f64 {
        self.mood.unwrap_or(0.0)
    }

    /// Anxiety under the same coercion policy as mood.
    pub fn coerced_anxiety(&self) -> f64 {
        self.anxiety.unwrap_or(0.0)
    }

    /// Sum of answered PHQ-9 items. Derived display value, not analytics
    /// input.
    pub fn phq_sum(&self) -> Option<u32> {
        self.phq
            .as_ref()
            .map(|items| items.iter().flatten().map(|v| u32::from(*v)).sum())
    }
}

/// Accept a number or a numeric string, map everything else to `None`.
/// Store payloads predate any schema, so rejection is not an option.
fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    })
}

/// Persistence collaborator boundary. The analytics never talk to a
/// store; they operate on the materialized snapshot `list_entries`
/// resolved for the caller.
#[async_trait]
pub trait EntryStore: Send + Sync + 'static {
    /// All entries in any order; callers re-sort.
    async fn list_entries(&self) -> Result<Vec<Entry>, JournalError>;
    /// Persist a new entry, assigning an id and timestamps.
    async fn add_entry(&self, entry: Entry) -> Result<Entry, JournalError>;
    /// Replace an existing entry by id.
    async fn update_entry(&self, entry: Entry) -> Result<Entry, JournalError>;
    /// Remove an entry; unknown ids are a no-op.
    async fn delete_entry(&self, id: i64) -> Result<(), JournalError>;
}
